use std::path::Path;

use ward::http::mime::{ContentTypeOracle, ExtensionOracle};
use ward::http::response::{decide, Decision, StatusCode};

struct FixedOracle(Option<&'static str>);

impl ContentTypeOracle for FixedOracle {
    fn probe(&self, _path: &Path) -> Option<String> {
        self.0.map(str::to_string)
    }
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
}

#[tokio::test]
async fn test_decide_unresolved_is_not_found() {
    let decision = decide(None, &FixedOracle(Some("text/html"))).await;
    assert_eq!(decision, Decision::not_found());
    assert_eq!(decision.content_type, "text/html");
}

#[tokio::test]
async fn test_decide_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.html");

    let decision = decide(Some(missing.as_path()), &FixedOracle(Some("text/html"))).await;
    assert_eq!(decision.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_decide_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let decision = decide(Some(dir.path()), &FixedOracle(None)).await;
    assert_eq!(decision.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_decide_html_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("index.html");
    std::fs::write(&page, "<p>hi</p>").unwrap();

    let decision = decide(Some(page.as_path()), &FixedOracle(Some("text/html"))).await;
    assert_eq!(decision, Decision::ok("text/html"));
}

#[tokio::test]
async fn test_decide_untyped_file_is_served_as_html() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("README");
    std::fs::write(&page, "plain").unwrap();

    let decision = decide(Some(page.as_path()), &FixedOracle(None)).await;
    assert!(decision.is_ok());
    assert_eq!(decision.content_type, "text/html");
}

#[tokio::test]
async fn test_decide_other_type_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("photo.png");
    std::fs::write(&image, [0x89, b'P', b'N', b'G']).unwrap();

    let decision = decide(Some(image.as_path()), &FixedOracle(Some("image/png"))).await;
    assert_eq!(decision.status, StatusCode::NotFound);
    assert_eq!(decision.content_type, "image/png");
}

#[tokio::test]
async fn test_decide_with_extension_oracle() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("index.html");
    let image = dir.path().join("photo.png");
    std::fs::write(&page, "<p>hi</p>").unwrap();
    std::fs::write(&image, [0u8; 4]).unwrap();

    assert!(decide(Some(page.as_path()), &ExtensionOracle).await.is_ok());
    assert!(!decide(Some(image.as_path()), &ExtensionOracle).await.is_ok());
}
