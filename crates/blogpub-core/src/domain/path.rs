//! Destination path resolution
//!
//! Maps a post title and its (optional) category onto the path of the
//! Markdown file in the remote repository:
//!
//! - `<posts>/<category>/<slug>.md` when category folders are enabled and
//!   a category is selected
//! - `<posts>/<slug>.md` otherwise

use serde::{Deserialize, Serialize};

use super::slug::slugify;

/// File extension of published posts
pub const POST_EXTENSION: &str = "md";

/// A resolved destination for a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPath {
    /// Full repository path, e.g. `posts/Tech/hello-world.md`
    pub path: String,
    /// Slug derived from the title, e.g. `hello-world`
    pub slug: String,
}

impl ResolvedPath {
    /// File name of the post, e.g. `hello-world.md`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.slug, POST_EXTENSION)
    }

    /// Returns true if the title produced no usable slug
    pub fn has_empty_slug(&self) -> bool {
        self.slug.is_empty()
    }

    /// Returns true if any segment is `.` or `..`
    pub fn has_relative_segment(&self) -> bool {
        self.path.split('/').any(|s| s == "." || s == "..")
    }
}

/// Computes the destination path for a post
///
/// Only the first element of `categories` is considered; a blank first
/// category counts as no category. An empty `posts_path` is kept as an
/// empty leading segment. No I/O and no failure modes: an empty slug is
/// reported through [`ResolvedPath::has_empty_slug`].
pub fn resolve(
    posts_path: &str,
    use_category_folders: bool,
    categories: &[String],
    title: &str,
) -> ResolvedPath {
    let slug = slugify(title);
    let file_name = format!("{slug}.{POST_EXTENSION}");

    let category = categories
        .first()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty());

    let path = match category {
        Some(category) if use_category_folders => {
            format!("{posts_path}/{category}/{file_name}")
        }
        _ => format!("{posts_path}/{file_name}"),
    };

    ResolvedPath { path, slug }
}
