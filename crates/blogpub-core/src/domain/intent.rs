//! Publish intents and the intake draft model
//!
//! [`PublishDraft`] is the mutable state behind the "Publish to Blog"
//! dialog: filename, single-select category and a live preview of the
//! destination. Once the user confirms, it is frozen into a
//! [`PublishIntent`] and handed to the orchestrator exactly once.

use serde::{Deserialize, Serialize};

use super::path::{resolve, ResolvedPath};

/// Vault folder whose direct children are treated as categories
const CATEGORY_ROOT_FOLDER: &str = "Resources";

/// Infers the initial category from the note's location in the vault
///
/// A note stored at `Resources/<Category>/...` starts with `<Category>`
/// selected; any other location starts with no category.
pub fn category_from_path(source_path: &str) -> Vec<String> {
    let parts: Vec<&str> = source_path.split('/').collect();
    if parts.len() > 1 && parts[0] == CATEGORY_ROOT_FOLDER {
        vec![parts[1].to_string()]
    } else {
        Vec::new()
    }
}

// ============================================================================
// PublishIntent
// ============================================================================

/// A confirmed request to publish one note
///
/// Immutable once constructed. Only the first category is semantically
/// significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishIntent {
    source_file_path: String,
    raw_content: String,
    title: String,
    categories: Vec<String>,
}

impl PublishIntent {
    /// Creates a new intent
    pub fn new(
        source_file_path: impl Into<String>,
        raw_content: impl Into<String>,
        title: impl Into<String>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            source_file_path: source_file_path.into(),
            raw_content: raw_content.into(),
            title: title.into(),
            categories,
        }
    }

    /// Path of the note inside the host's vault
    pub fn source_file_path(&self) -> &str {
        &self.source_file_path
    }

    /// Note content, uploaded as-is
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Human-readable title the slug and commit message are derived from
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Selected categories (0 or 1 in normal use)
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

// ============================================================================
// PublishDraft
// ============================================================================

/// Editable state of the intake dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishDraft {
    source_file_path: String,
    content: String,
    filename: String,
    selected_categories: Vec<String>,
}

impl PublishDraft {
    /// Starts a draft for a note
    ///
    /// The filename defaults to the note's basename and the category is
    /// inferred with [`category_from_path`].
    pub fn new(
        source_file_path: impl Into<String>,
        basename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let source_file_path = source_file_path.into();
        let selected_categories = category_from_path(&source_file_path);
        Self {
            source_file_path,
            content: content.into(),
            filename: basename.into(),
            selected_categories,
        }
    }

    pub fn source_file_path(&self) -> &str {
        &self.source_file_path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    /// Toggles a category with single-select semantics
    ///
    /// Choosing the selected category deselects it; choosing any other
    /// category replaces the current selection.
    pub fn toggle_category(&mut self, category: &str) {
        if self.selected_categories.iter().any(|c| c == category) {
            self.selected_categories.retain(|c| c != category);
        } else {
            self.selected_categories = vec![category.to_string()];
        }
    }

    /// Destination the draft would be published to with the given settings
    pub fn preview(&self, posts_path: &str, use_category_folders: bool) -> ResolvedPath {
        resolve(
            posts_path,
            use_category_folders,
            &self.selected_categories,
            &self.filename,
        )
    }

    /// Freezes the draft into an intent
    pub fn into_intent(self) -> PublishIntent {
        PublishIntent {
            source_file_path: self.source_file_path,
            raw_content: self.content,
            title: self.filename,
            categories: self.selected_categories,
        }
    }
}
