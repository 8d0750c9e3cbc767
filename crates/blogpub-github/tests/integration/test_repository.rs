//! Integration tests for the `IRemoteRepository` adapter
//!
//! Drives `GitHubRepository` through the port trait and checks the
//! probe classification and the create/update write semantics.

use blogpub_core::domain::{codec, RevisionToken};
use blogpub_core::ports::{IRemoteRepository, ProbeOutcome, WriteRequest};
use blogpub_github::{GitHubClient, GitHubRepository};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common;

fn repository(server: &MockServer) -> GitHubRepository {
    GitHubRepository::new(GitHubClient::with_base_url(common::TOKEN, server.uri()))
}

fn write_request(file_path: &str, token: Option<&str>) -> WriteRequest {
    WriteRequest {
        coordinates: common::coordinates(),
        path: file_path.to_string(),
        content: codec::encode("# Hello\n\n안녕하세요"),
        message: "Publish: Hello".to_string(),
        revision_token: token.map(|t| RevisionToken::new(t.to_string()).unwrap()),
    }
}

// ============================================================================
// Probe
// ============================================================================

#[tokio::test]
async fn test_probe_existing_file_returns_token() {
    let server = MockServer::start().await;
    common::mount_existing_file(&server, "posts/hello.md", "abc123").await;

    let outcome = repository(&server)
        .probe(&common::coordinates(), "posts/hello.md")
        .await;

    match outcome {
        ProbeOutcome::Found(found) => {
            assert_eq!(found.path, "posts/hello.md");
            assert_eq!(found.revision_token.unwrap().as_str(), "abc123");
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_probe_missing_file() {
    let server = MockServer::start().await;
    common::mount_missing_file(&server, "posts/hello.md").await;

    let outcome = repository(&server)
        .probe(&common::coordinates(), "posts/hello.md")
        .await;

    assert_eq!(outcome, ProbeOutcome::NotFound);
}

#[tokio::test]
async fn test_probe_unauthorized_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Bad credentials"
        })))
        .mount(&server)
        .await;

    let outcome = repository(&server)
        .probe(&common::coordinates(), "posts/hello.md")
        .await;

    assert_eq!(
        outcome,
        ProbeOutcome::TransientError("Bad credentials".to_string())
    );
}

#[tokio::test]
async fn test_closed_port_is_transient() {
    // Reserve a port, then close it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let repository =
        GitHubRepository::new(GitHubClient::with_base_url(common::TOKEN, format!("http://{addr}")));
    let outcome = repository
        .probe(&common::coordinates(), "posts/hello.md")
        .await;

    match outcome {
        ProbeOutcome::TransientError(reason) => assert!(reason.starts_with("Network error")),
        other => panic!("expected TransientError, got {other:?}"),
    }
}

// ============================================================================
// Write
// ============================================================================

#[tokio::test]
async fn test_write_create_omits_sha() {
    let server = MockServer::start().await;
    common::mount_put(&server, "posts/hello.md", 201).await;

    let written = repository(&server)
        .write(&write_request("posts/hello.md", None))
        .await
        .expect("write failed");

    assert!(written.created);
    assert_eq!(written.commit_id.as_deref(), Some("commit-sha-1"));
    assert_eq!(
        written.revision_token.map(|t| t.as_str().to_string()),
        Some("new-blob-sha".to_string())
    );

    let bodies = common::put_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].get("sha").is_none());
    assert_eq!(
        codec::decode(bodies[0]["content"].as_str().unwrap()).unwrap(),
        "# Hello\n\n안녕하세요"
    );
}

#[tokio::test]
async fn test_write_update_forwards_sha() {
    let server = MockServer::start().await;
    common::mount_put(&server, "posts/hello.md", 200).await;

    let written = repository(&server)
        .write(&write_request("posts/hello.md", Some("abc123")))
        .await
        .unwrap();

    assert!(!written.created);
    let bodies = common::put_bodies(&server).await;
    assert_eq!(bodies[0]["sha"], "abc123");
    assert_eq!(bodies[0]["message"], "Publish: Hello");
    assert_eq!(bodies[0]["branch"], "main");
}

#[tokio::test]
async fn test_write_rejection_keeps_reason() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(common::contents_path("posts/hello.md")))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Invalid request.\n\n\"sha\" wasn't supplied.",
            "documentation_url": "https://docs.github.com/rest/repos/contents"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let failure = repository(&server)
        .write(&write_request("posts/hello.md", None))
        .await
        .unwrap_err();

    assert_eq!(failure.status, Some(422));
    assert_eq!(failure.reason, "Invalid request.\n\n\"sha\" wasn't supplied.");
}

#[tokio::test]
async fn test_write_rejection_without_message_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let failure = repository(&server)
        .write(&write_request("posts/hello.md", None))
        .await
        .unwrap_err();

    assert_eq!(failure.status, Some(500));
    assert_eq!(failure.reason, "GitHub API error");
}
