//! Integration tests for blogpub-github
//!
//! Uses wiremock to simulate the GitHub contents API and verifies
//! end-to-end behavior of the client calls and of the
//! `IRemoteRepository` adapter.


mod test_contents;
mod test_repository;
