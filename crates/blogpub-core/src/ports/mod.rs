//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the core depends on,
//! but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IRemoteRepository`] - Remote content store (GitHub contents API)
//! - [`IDocumentSource`] - Host editor: the active note and its text
//! - [`IPublishIntake`] - Host UI that collects filename and category
//! - [`INotificationService`] - User-facing notices
//! - [`ISettingsStorage`] - Persistence for the plugin configuration

pub mod document;
pub mod intake;
pub mod notification;
pub mod remote_repository;
pub mod settings_storage;

pub use document::{ActiveDocument, IDocumentSource};
pub use intake::IPublishIntake;
pub use notification::{INotificationService, Notification, NotificationPriority};
pub use remote_repository::{IRemoteRepository, ProbeOutcome, WriteFailure, WriteRequest, WrittenObject};
pub use settings_storage::ISettingsStorage;
