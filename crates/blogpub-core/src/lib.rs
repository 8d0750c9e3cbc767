//! Blogpub Core - Publish-synchronization logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain** - slugs, destination paths, content transport encoding,
//!   publish intents and the per-publish state machine
//! - **Use cases** - `PublishPostUseCase`, the resolve → probe → write orchestrator,
//!   and `PublishCommandUseCase`, the user-facing command wrapped around it
//! - **Port definitions** - Traits for adapters: `IRemoteRepository`,
//!   `IDocumentSource`, `IPublishIntake`, `INotificationService`, `ISettingsStorage`
//! - **Configuration** - `PluginConfiguration` and the `Settings` editing surface
//!
//! # Architecture
//!
//! The domain module contains pure business logic with no I/O.
//! Ports define trait interfaces that adapter crates implement
//! (`blogpub-github` for the remote content store, `blogpub-plugin`
//! for the host application). Use cases orchestrate domain types through
//! port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
pub mod settings;
pub mod usecases;
