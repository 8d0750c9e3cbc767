//! Domain types and business logic
//!
//! This module contains the core domain types for Blogpub:
//! - Newtypes for validated identifiers and opaque remote tokens
//! - Slug and destination path computation
//! - Content transport encoding
//! - Publish intents and the intake draft model
//! - Publish state machine and results
//! - Domain-specific error types

pub mod codec;
pub mod errors;
pub mod intent;
pub mod newtypes;
pub mod path;
pub mod publish;
pub mod slug;

// Re-export commonly used types
pub use codec::CodecError;
pub use errors::{DomainError, PublishError};
pub use intent::{category_from_path, PublishDraft, PublishIntent};
pub use newtypes::*;
pub use path::{resolve, ResolvedPath};
pub use publish::{PublishResult, PublishState, RemoteObjectRef};
pub use slug::slugify;
