//! Notification service port (driven/secondary port)
//!
//! This module defines the interface for showing short notices to the
//! user (the host's toast/notice area). Every publish invocation ends in
//! exactly one outcome notice.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because notification delivery is adapter-specific.
//! - Notifications are fire-and-forget; the caller does not wait for
//!   user interaction and a delivery failure never fails the publish.

use serde::{Deserialize, Serialize};

/// Priority level for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    /// Progress notices that may be replaced quickly
    Low,
    /// Normal priority
    #[default]
    Normal,
    /// Failures the user should read
    High,
}

impl std::fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NotificationPriority::Low => "low",
            NotificationPriority::Normal => "normal",
            NotificationPriority::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// A notice to display to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text of the notice
    pub message: String,
    /// Priority level affecting how the notice is displayed
    pub priority: NotificationPriority,
    /// Category for grouping/filtering (e.g., "publish", "config", "error")
    pub category: String,
}

impl Notification {
    /// Creates a new notification with `Normal` priority and no category
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            priority: NotificationPriority::Normal,
            category: String::new(),
        }
    }

    /// Sets the priority level
    pub fn with_priority(mut self, priority: NotificationPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Creates a low priority progress notice
    pub fn progress(message: impl Into<String>) -> Self {
        Self::new(message)
            .with_priority(NotificationPriority::Low)
            .with_category("publish")
    }

    /// Creates a publish-related notice
    pub fn publish(message: impl Into<String>) -> Self {
        Self::new(message).with_category("publish")
    }

    /// Creates an error notice with High priority
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message)
            .with_priority(NotificationPriority::High)
            .with_category("error")
    }
}

/// Port trait for user-facing notices
#[async_trait::async_trait]
pub trait INotificationService: Send + Sync {
    /// Shows a notice to the user
    ///
    /// # Arguments
    /// * `notification` - The notice content and metadata
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()>;
}
