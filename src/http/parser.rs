use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::http::request::Request;

const REQUEST_PREFIX: &str = "GET ";
const REQUEST_SUFFIX: &str = " HTTP/1.1";

/// Extracts `<path>` from a `GET <path> HTTP/1.1` request line.
///
/// Any other shape yields `None`; the path itself is returned verbatim.
pub fn parse_request_line(line: &str) -> Option<&str> {
    line.strip_prefix(REQUEST_PREFIX)?
        .strip_suffix(REQUEST_SUFFIX)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Reads a request head line by line until the blank line that ends it.
///
/// Every line starting with `GET` replaces what earlier ones resolved, so
/// the last one wins; a malformed one leaves the request unresolved.
/// Reaching EOF, a read error or a line that is not UTF-8 stops parsing
/// early and returns whatever was resolved up to that point; none of these
/// are reported as errors.
pub async fn parse_request<R>(reader: &mut R) -> Request
where
    R: AsyncBufRead + Unpin,
{
    let mut request = Request::unresolved();
    let mut raw = Vec::with_capacity(256);

    loop {
        raw.clear();
        match reader.read_until(b'\n', &mut raw).await {
            Ok(0) => {
                debug!("Peer closed before end of request head");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Request read error: {}", e);
                break;
            }
        }

        let line = match std::str::from_utf8(trim_line_ending(&raw)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Request line is not UTF-8: {}", e);
                break;
            }
        };
        debug!("Request line: ({})", line);

        if line.is_empty() {
            break;
        }

        if line.starts_with("GET") {
            request = parse_request_line(line)
                .map(Request::new)
                .unwrap_or_else(Request::unresolved);
        }
    }

    if !request.is_resolved() {
        debug!("No usable request line in request head");
    }
    request
}
