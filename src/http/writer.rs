use std::path::Path;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::http::placeholder::Placeholders;
use crate::http::response::Decision;

const HTTP_VERSION: &str = "HTTP/1.1";
const NOT_FOUND_BODY: &[u8] = b"404 Not Found\n";

fn http_date() -> String {
    chrono::Utc::now()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Serializes the status line and header block for `decision`.
///
/// There is no `Content-Length`; the body ends when the connection closes.
pub fn serialize_headers(decision: &Decision, server_name: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(160);

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        decision.status.as_u16(),
        decision.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    let headers = [
        ("Date", http_date()),
        ("Server", server_name.to_string()),
        ("Connection", "close".to_string()),
        ("Content-Type", decision.content_type.clone()),
    ];
    for (k, v) in &headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes the header block. The caller flushes once the body is written.
pub async fn write_headers<W>(
    out: &mut W,
    decision: &Decision,
    server_name: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(&serialize_headers(decision, server_name)).await?;
    Ok(())
}

/// Writes the response body.
///
/// For an OK decision the file at `target` is read whole, the values built
/// by `placeholders` are substituted and the result written. If the file can
/// no longer be read the failure is logged and nothing more is written,
/// leaving the response truncated. Any other decision gets the short
/// not-found body without building placeholders.
pub async fn write_content<W, P>(
    out: &mut W,
    decision: &Decision,
    target: Option<&Path>,
    placeholders: P,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
    P: FnOnce() -> Placeholders,
{
    let target = match (decision.is_ok(), target) {
        (true, Some(target)) => target,
        _ => {
            out.write_all(NOT_FOUND_BODY).await?;
            return Ok(());
        }
    };

    let content = match tokio::fs::read(target).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", target.display(), e);
            return Ok(());
        }
    };

    debug!(path = %target.display(), bytes = content.len(), "Writing file");
    out.write_all(&placeholders().apply(&content)).await?;
    Ok(())
}
