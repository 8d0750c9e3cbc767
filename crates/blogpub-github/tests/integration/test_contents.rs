//! Integration tests for the contents endpoint calls
//!
//! Verifies request shape (URL, query, headers, body) and response
//! handling of `get_contents` / `put_contents`.

use blogpub_github::contents;
use blogpub_github::GitHubError;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::common;

// ============================================================================
// GET
// ============================================================================

#[tokio::test]
async fn test_get_contents_returns_file() {
    let (server, client) = common::setup_github_mock().await;
    common::mount_existing_file(&server, "posts/Tech/hello.md", "abc123").await;

    let file = contents::get_contents(&client, &common::coordinates(), "posts/Tech/hello.md")
        .await
        .expect("get_contents failed")
        .expect("file should exist");

    assert_eq!(file.sha, "abc123");
    assert_eq!(file.path, "posts/Tech/hello.md");
    assert_eq!(file.decode_content().unwrap().as_deref(), Some("Hello"));
}

#[tokio::test]
async fn test_get_contents_404_is_none() {
    let (server, client) = common::setup_github_mock().await;
    common::mount_missing_file(&server, "posts/new.md").await;

    let file = contents::get_contents(&client, &common::coordinates(), "posts/new.md")
        .await
        .expect("404 must not be an error");

    assert!(file.is_none());
}

#[tokio::test]
async fn test_get_contents_sends_auth_and_accept_headers() {
    let (server, client) = common::setup_github_mock().await;

    Mock::given(method("GET"))
        .and(path(common::contents_path("posts/a.md")))
        .and(query_param("ref", "main"))
        .and(header("authorization", "Bearer ghp_test_token"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    contents::get_contents(&client, &common::coordinates(), "posts/a.md")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_contents_encodes_non_ascii_segments() {
    let (server, client) = common::setup_github_mock().await;

    Mock::given(method("GET"))
        .and(path(
            "/repos/octocat/blog/contents/posts/%EC%9D%BC%EC%83%81/%ED%95%9C%EA%B8%80.md",
        ))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let file = contents::get_contents(&client, &common::coordinates(), "posts/일상/한글.md")
        .await
        .unwrap();
    assert!(file.is_none());
}

#[tokio::test]
async fn test_get_contents_server_error() {
    let (server, client) = common::setup_github_mock().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = contents::get_contents(&client, &common::coordinates(), "posts/a.md")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "GitHub API error");
}

#[tokio::test]
async fn test_get_contents_directory_is_invalid_response() {
    let (server, client) = common::setup_github_mock().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"path": "posts/a.md", "sha": "abc", "type": "file"}
        ])))
        .mount(&server)
        .await;

    let err = contents::get_contents(&client, &common::coordinates(), "posts")
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubError::InvalidResponse(_)));
}

// ============================================================================
// PUT
// ============================================================================

#[tokio::test]
async fn test_put_contents_create() {
    let (server, client) = common::setup_github_mock().await;
    common::mount_put(&server, "posts/new.md", 201).await;

    let outcome = contents::put_contents(
        &client,
        &common::coordinates(),
        "posts/new.md",
        "SGVsbG8=",
        "Publish: New",
        None,
    )
    .await
    .expect("put_contents failed");

    assert!(outcome.created);
    assert_eq!(outcome.path, "posts/new.md");
    assert_eq!(outcome.sha.as_deref(), Some("new-blob-sha"));
    assert_eq!(outcome.commit_sha.as_deref(), Some("commit-sha-1"));

    let bodies = common::put_bodies(&server).await;
    assert_eq!(
        bodies[0],
        serde_json::json!({
            "message": "Publish: New",
            "content": "SGVsbG8=",
            "branch": "main"
        })
    );
}

#[tokio::test]
async fn test_put_contents_update_sends_sha() {
    let (server, client) = common::setup_github_mock().await;
    common::mount_put(&server, "posts/old.md", 200).await;

    let outcome = contents::put_contents(
        &client,
        &common::coordinates(),
        "posts/old.md",
        "SGVsbG8=",
        "Publish: Old",
        Some("abc123"),
    )
    .await
    .unwrap();

    assert!(!outcome.created);
    let bodies = common::put_bodies(&server).await;
    assert_eq!(bodies[0]["sha"], "abc123");
}

#[tokio::test]
async fn test_put_contents_conflict_message_verbatim() {
    let (server, client) = common::setup_github_mock().await;

    Mock::given(method("PUT"))
        .and(path(common::contents_path("posts/a.md")))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "message": "posts/a.md does not match 95b966ae1c166bd92f8ae7d1c313e738c731dfc3",
            "documentation_url": "https://docs.github.com/rest/repos/contents"
        })))
        .mount(&server)
        .await;

    let err = contents::put_contents(
        &client,
        &common::coordinates(),
        "posts/a.md",
        "",
        "Publish: A",
        Some("stale"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(
        err.to_string(),
        "posts/a.md does not match 95b966ae1c166bd92f8ae7d1c313e738c731dfc3"
    );
}
