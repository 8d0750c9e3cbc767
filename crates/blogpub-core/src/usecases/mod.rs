//! Use cases (interactors) for Blogpub
//!
//! This module contains the application use cases that orchestrate
//! domain types and port interfaces. Use cases are thin coordinators
//! that delegate business rules to domain functions and I/O to ports.
//!
//! ## Use Cases
//!
//! - [`PublishPostUseCase`] - Resolve, probe and write a single post
//! - [`PublishCommandUseCase`] - The "Publish to Blog" command around it

pub mod publish_command;
pub mod publish_post;

pub use publish_command::{
    CommandOutcome, PublishCommandUseCase, RemoteFactory, COMMAND_ID, COMMAND_NAME,
    PUBLISHING_NOTICE,
};
pub use publish_post::{ProbeFailurePolicy, PublishPostUseCase};
