use std::path::Path;

use mime_guess::MimeGuess;

pub const TEXT_HTML: &str = "text/html";

/// Guesses the media type of a file.
///
/// Implementations are shared by every connection task and must not
/// fail the caller; "don't know" is `None`.
pub trait ContentTypeOracle: Send + Sync {
    fn probe(&self, path: &Path) -> Option<String>;
}

/// Extension-based guessing backed by `mime_guess`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionOracle;

impl ContentTypeOracle for ExtensionOracle {
    fn probe(&self, path: &Path) -> Option<String> {
        MimeGuess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_by_extension() {
        let oracle = ExtensionOracle;
        assert_eq!(oracle.probe(Path::new("index.html")).as_deref(), Some(TEXT_HTML));
        assert_eq!(oracle.probe(Path::new("photo.png")).as_deref(), Some("image/png"));
        assert_eq!(oracle.probe(Path::new("README")), None);
    }
}
