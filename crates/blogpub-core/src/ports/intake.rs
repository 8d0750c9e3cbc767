//! Publish intake port
//!
//! The host shows a modal dialog seeded from a [`PublishDraft`]. The user
//! edits the filename and toggles categories through the draft's methods
//! and either confirms or dismisses the dialog.

use crate::config::PluginConfiguration;
use crate::domain::intent::PublishDraft;

/// Port trait for the intake dialog
#[async_trait::async_trait]
pub trait IPublishIntake: Send + Sync {
    /// Presents `draft` and waits for the user
    ///
    /// # Arguments
    /// * `draft` - Initial dialog state
    /// * `settings` - Snapshot used for the category list and path preview
    ///
    /// # Returns
    /// The confirmed draft, or `None` if the dialog was closed without
    /// publishing. A dismissed draft has no network effect.
    async fn confirm(
        &self,
        draft: PublishDraft,
        settings: &PluginConfiguration,
    ) -> Option<PublishDraft>;
}
