use std::path::Path;

use crate::http::mime::{ContentTypeOracle, TEXT_HTML};

/// HTTP status codes this server answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 NOT FOUND
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use ward::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the reason phrase written on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT FOUND",
        }
    }
}

/// What to answer for one request: status and declared `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub status: StatusCode,
    pub content_type: String,
}

impl Decision {
    pub fn ok(content_type: impl Into<String>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: TEXT_HTML.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::Ok
    }
}

/// Decides the response for a located file.
///
/// Only HTML is served. A file the oracle has no type for is still served
/// as `text/html`, while a file with any other known type is refused even
/// though it exists:
///
/// | file                | oracle        | decision           |
/// |---------------------|---------------|--------------------|
/// | missing/unreadable  | -             | 404, `text/html`   |
/// | readable            | none          | 200, `text/html`   |
/// | readable            | `text/html`   | 200, `text/html`   |
/// | readable            | anything else | 404, guessed type  |
pub async fn decide(target: Option<&Path>, oracle: &dyn ContentTypeOracle) -> Decision {
    let Some(target) = target else {
        return Decision::not_found();
    };

    if !is_readable_file(target).await {
        return Decision::not_found();
    }

    match oracle.probe(target) {
        None => Decision::ok(TEXT_HTML),
        Some(content_type) if content_type == TEXT_HTML => Decision::ok(content_type),
        Some(content_type) => Decision {
            status: StatusCode::NotFound,
            content_type,
        },
    }
}

async fn is_readable_file(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => tokio::fs::File::open(path).await.is_ok(),
        _ => false,
    }
}
