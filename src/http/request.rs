use std::path::{Component, Path, PathBuf};

/// The result of reading a request head.
///
/// Only the requested resource path survives parsing. `path` is `None`
/// when no well-formed `GET` request line was seen, which callers treat
/// as a resource that does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The resolved path exactly as it appeared on the request line (e.g. "/index.html")
    pub path: Option<String>,
}

impl Request {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A request whose head carried no usable request line.
    pub fn unresolved() -> Self {
        Self { path: None }
    }

    pub fn is_resolved(&self) -> bool {
        self.path.is_some()
    }

    /// Maps the resolved path onto a file below `root`.
    ///
    /// The leading `/` is dropped and the rest joined onto `root`.
    /// Returns `None` for an unresolved request or for any path that
    /// would climb out of `root` (`..`, or an absolute remainder).
    ///
    /// # Example
    ///
    /// ```
    /// # use std::path::{Path, PathBuf};
    /// # use ward::http::request::Request;
    /// let req = Request::new("/docs/index.html");
    /// assert_eq!(
    ///     req.locate(Path::new("/srv/www")),
    ///     Some(PathBuf::from("/srv/www/docs/index.html"))
    /// );
    /// assert_eq!(Request::new("/../etc/passwd").locate(Path::new("/srv/www")), None);
    /// ```
    pub fn locate(&self, root: &Path) -> Option<PathBuf> {
        let path = self.path.as_deref()?;
        let relative = Path::new(path.strip_prefix('/').unwrap_or(path));

        let escapes = relative.components().any(|c| {
            matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if escapes {
            return None;
        }

        Some(root.join(relative))
    }
}
