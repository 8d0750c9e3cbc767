//! End-to-end tests of the "Publish to Blog" command
//!
//! The command runs against a wiremock GitHub API; request counts are
//! verified when each mock server is dropped.

use blogpub_core::config::ConfigBuilder;
use blogpub_core::domain::{codec, PublishError};
use blogpub_core::usecases::CommandOutcome;
use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::{self, FakeEditor};

const NOTE_PATH: &str = "Resources/Tech/Hello World.md";
const NOTE_BODY: &str = "# Hello World\n\n첫 번째 글입니다.\n";
const API_PATH: &str = "/repos/octocat/blog/contents/posts/Tech/hello-world.md";

fn editor() -> std::sync::Arc<FakeEditor> {
    FakeEditor::with_note(NOTE_PATH, "Hello World", NOTE_BODY)
}

async fn mount_no_network_expected(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

async fn put_body(server: &MockServer) -> serde_json::Value {
    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .expect("no PUT request received");
    serde_json::from_slice(&put.body).unwrap()
}

// ============================================================================
// Create / update
// ============================================================================

#[tokio::test]
async fn test_first_publish_creates_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("ref", "main"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "content": {"path": "posts/Tech/hello-world.md", "sha": "blob-1"},
            "commit": {"sha": "commit-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let t = common::load_plugin(Some(common::config_for(&server)), editor(), true).await;
    let outcome = t.plugin.publish_to_blog().await;

    match &outcome {
        CommandOutcome::Completed(result) => {
            assert!(result.is_success());
            assert!(result.created());
            assert_eq!(result.final_path(), "posts/Tech/hello-world.md");
        }
        other => panic!("expected completed publish, got {other:?}"),
    }
    assert_eq!(
        t.notices.messages(),
        vec!["Publishing...", "Published: hello-world.md"]
    );

    let body = put_body(&server).await;
    assert!(body.get("sha").is_none());
    assert_eq!(body["message"], "Publish: Hello World");
    assert_eq!(body["branch"], "main");
    assert_eq!(
        codec::decode(body["content"].as_str().unwrap()).unwrap(),
        NOTE_BODY
    );
}

#[tokio::test]
async fn test_republish_updates_existing_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "file",
            "path": "posts/Tech/hello-world.md",
            "sha": "95b966ae1c166bd92f8ae7d1c313e738c731dfc3",
            "encoding": "base64",
            "content": "IyBPbGQ=\n"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": {"path": "posts/Tech/hello-world.md", "sha": "blob-2"},
            "commit": {"sha": "commit-2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let t = common::load_plugin(Some(common::config_for(&server)), editor(), true).await;
    let outcome = t.plugin.publish_to_blog().await;

    assert!(outcome.is_published());
    let body = put_body(&server).await;
    assert_eq!(body["sha"], "95b966ae1c166bd92f8ae7d1c313e738c731dfc3");
    assert_eq!(
        t.notices.messages().last().unwrap(),
        "Published: hello-world.md"
    );
}

#[tokio::test]
async fn test_failed_probe_then_rejected_write_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Invalid request.\n\n\"sha\" wasn't supplied."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let t = common::load_plugin(Some(common::config_for(&server)), editor(), true).await;
    let outcome = t.plugin.publish_to_blog().await;

    assert!(!outcome.is_published());
    assert!(put_body(&server).await.get("sha").is_none());
    assert_eq!(
        t.notices.messages(),
        vec![
            "Publishing...",
            "Failed to publish: Invalid request.\n\n\"sha\" wasn't supplied."
        ]
    );
}

#[tokio::test]
async fn test_flat_layout_when_category_folders_disabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/blog/contents/_posts/hello-world.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/repos/octocat/blog/contents/_posts/hello-world.md"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "content": {"path": "_posts/hello-world.md", "sha": "blob"},
            "commit": {"sha": "c"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ConfigBuilder::new()
        .credential("ghp_test_token")
        .repository("octocat/blog")
        .posts_path("_posts")
        .use_category_folders(false)
        .api_base_url(server.uri())
        .build();
    let t = common::load_plugin(Some(config), editor(), true).await;

    assert!(t.plugin.publish_to_blog().await.is_published());
}

// ============================================================================
// No network effect
// ============================================================================

#[tokio::test]
async fn test_cancelled_dialog_makes_no_requests() {
    let server = MockServer::start().await;
    mount_no_network_expected(&server).await;

    let t = common::load_plugin(Some(common::config_for(&server)), editor(), false).await;
    let outcome = t.plugin.publish_to_blog().await;

    assert_eq!(outcome, CommandOutcome::Cancelled);
    assert!(t.notices.messages().is_empty());
}

#[tokio::test]
async fn test_no_open_file() {
    let server = MockServer::start().await;
    mount_no_network_expected(&server).await;

    let t = common::load_plugin(
        Some(common::config_for(&server)),
        FakeEditor::empty(),
        true,
    )
    .await;
    let outcome = t.plugin.publish_to_blog().await;

    assert_eq!(
        outcome,
        CommandOutcome::Rejected(PublishError::NoActiveDocument)
    );
    assert_eq!(t.notices.messages(), vec!["No file is currently open."]);
}

#[tokio::test]
async fn test_missing_token() {
    let server = MockServer::start().await;
    mount_no_network_expected(&server).await;

    let config = ConfigBuilder::new()
        .repository("octocat/blog")
        .api_base_url(server.uri())
        .build();
    let t = common::load_plugin(Some(config), editor(), true).await;
    t.plugin.publish_to_blog().await;

    assert_eq!(
        t.notices.messages(),
        vec!["GitHub token not configured. Please set it in plugin settings."]
    );
}

#[tokio::test]
async fn test_repository_without_owner_makes_no_requests() {
    let server = MockServer::start().await;
    mount_no_network_expected(&server).await;

    let config = ConfigBuilder::new()
        .credential("ghp_test_token")
        .repository("blog")
        .api_base_url(server.uri())
        .build();
    let t = common::load_plugin(Some(config), editor(), true).await;
    let outcome = t.plugin.publish_to_blog().await;

    assert!(!outcome.is_published());
    assert_eq!(
        t.notices.messages(),
        vec!["Repository must be in the form owner/repo: \"blog\""]
    );
}
