//! Where coefficient tables come from.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::body::Body;
use crate::error::AstroError;

/// Provides the raw text of a body's coefficient table.
pub trait SeriesSource: Send + Sync {
    /// Short label for log lines.
    fn describe(&self) -> String;

    /// Text of `body`'s table, or `DataUnavailable` when there is none.
    fn table_text(&self, body: Body) -> Result<Cow<'_, str>, AstroError>;
}

fn unavailable(body: Body, message: impl Into<String>) -> AstroError {
    AstroError::DataUnavailable {
        body: body.name().to_string(),
        axis: "all".to_string(),
        message: message.into(),
    }
}

/// Tables compiled into the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSeries;

impl BundledSeries {
    fn text(body: Body) -> Option<&'static str> {
        Some(match body {
            Body::Mercury => include_str!("../../data/series/mercury.txt"),
            Body::Venus => include_str!("../../data/series/venus.txt"),
            Body::Earth => include_str!("../../data/series/earth.txt"),
            Body::Mars => include_str!("../../data/series/mars.txt"),
            Body::Jupiter => include_str!("../../data/series/jupiter.txt"),
            Body::Saturn => include_str!("../../data/series/saturn.txt"),
            Body::Uranus => include_str!("../../data/series/uranus.txt"),
            Body::Neptune => include_str!("../../data/series/neptune.txt"),
            Body::Pluto => include_str!("../../data/series/pluto.txt"),
            Body::Sun | Body::Moon => return None,
        })
    }
}

impl SeriesSource for BundledSeries {
    fn describe(&self) -> String {
        "bundled tables".to_string()
    }

    fn table_text(&self, body: Body) -> Result<Cow<'_, str>, AstroError> {
        Self::text(body)
            .map(Cow::Borrowed)
            .ok_or_else(|| unavailable(body, "no bundled table for this body"))
    }
}

/// Tables read from `<root>/<body>.txt`.
#[derive(Debug, Clone)]
pub struct SeriesDirectory {
    root: PathBuf,
}

impl SeriesDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self, body: Body) -> PathBuf {
        self.root.join(format!("{}.txt", body.name()))
    }
}

impl SeriesSource for SeriesDirectory {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn table_text(&self, body: Body) -> Result<Cow<'_, str>, AstroError> {
        let path = self.table_path(body);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Cow::Owned(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(unavailable(body, format!("{} does not exist", path.display())))
            }
            Err(e) => Err(unavailable(
                body,
                format!("failed to read {}: {e}", path.display()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_has_every_series_body() {
        for body in Body::SERIES_BODIES {
            assert!(BundledSeries.table_text(body).is_ok(), "{body}");
        }
        assert!(matches!(
            BundledSeries.table_text(Body::Moon),
            Err(AstroError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn directory_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = SeriesDirectory::new(dir.path());
        let err = source.table_text(Body::Mars).unwrap_err();
        assert!(matches!(err, AstroError::DataUnavailable { ref body, .. } if body == "mars"));
    }

    #[test]
    fn directory_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("venus.txt"), "[venus x]\n").unwrap();
        let source = SeriesDirectory::new(dir.path());
        assert_eq!(source.table_text(Body::Venus).unwrap(), "[venus x]\n");
    }
}
