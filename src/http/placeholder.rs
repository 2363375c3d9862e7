use bytes::BytesMut;

pub const DATE_TOKEN: &str = "<cs371date>";
pub const SERVER_TOKEN: &str = "<cs371server>";

/// Runtime values substituted into served files.
///
/// Built fresh for every response so a changed date or host name is
/// picked up without a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub date: String,
    pub server: String,
}

impl Placeholders {
    /// Today's local date as `dd-mm-yyyy` and this machine's host name.
    pub fn current() -> Self {
        Self {
            date: chrono::Local::now().format("%d-%m-%Y").to_string(),
            server: gethostname::gethostname().to_string_lossy().into_owned(),
        }
    }

    /// Replaces every occurrence of both tokens. Matching is exact and
    /// case-sensitive; bytes outside the tokens are copied unchanged.
    pub fn apply(&self, content: &[u8]) -> BytesMut {
        let dated = replace_all(content, DATE_TOKEN.as_bytes(), self.date.as_bytes());
        replace_all(&dated, SERVER_TOKEN.as_bytes(), self.server.as_bytes())
    }
}

fn replace_all(haystack: &[u8], token: &[u8], value: &[u8]) -> BytesMut {
    let mut out = BytesMut::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(at) = rest.windows(token.len()).position(|w| w == token) {
        out.extend_from_slice(&rest[..at]);
        out.extend_from_slice(value);
        rest = &rest[at + token.len()..];
    }
    out.extend_from_slice(rest);

    out
}
