//! Document loading.
//!
//! # Responsibility
//! - Read `profile.json` from an asset source and decode it.
//! - Substitute the default document on any failure.
//! - Run the one-shot startup load off the caller thread.
//!
//! # Invariants
//! - `load_document` never fails and never panics.
//! - Load failures are logged, never surfaced to the presentation layer.

mod source;
mod task;

pub use source::{AssetSource, DirAssetSource, MemoryAssetSource};
pub use task::DocumentLoad;

use crate::model::document::Document;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Asset name of the biography document.
pub const DOCUMENT_ASSET: &str = "profile.json";

pub type LoadResult<T> = Result<T, LoadError>;

/// Document load failures.
#[derive(Debug)]
pub enum LoadError {
    AssetMissing(String),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetMissing(name) => write!(f, "asset not found: {name}"),
            Self::Io(err) => write!(f, "asset read failed: {err}"),
            Self::Parse(err) => write!(f, "document parse failed: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AssetMissing(_) => None,
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Decodes a document from raw JSON bytes.
///
/// # Errors
/// - Returns `LoadError::Parse` for malformed JSON or missing required fields.
pub fn parse_document(bytes: &[u8]) -> LoadResult<Document> {
    let doc: Document = serde_json::from_slice(bytes)?;
    if let Some(err) = doc.theme_color.error() {
        warn!("event=theme_color_fallback module=loader status=degraded reason={err}");
    }
    Ok(doc)
}

/// Reads and decodes the document asset.
pub fn try_load_document(source: &dyn AssetSource) -> LoadResult<Document> {
    let bytes = source.read(DOCUMENT_ASSET)?;
    parse_document(&bytes)
}

/// Reads and decodes the document asset, falling back to `Document::default()`.
pub fn load_document(source: &dyn AssetSource) -> Document {
    match try_load_document(source) {
        Ok(doc) => {
            info!(
                "event=document_load module=loader status=ok profiles={} timelines={}",
                doc.profiles.len(),
                doc.timelines.len()
            );
            doc
        }
        Err(err) => {
            warn!("event=document_load module=loader status=fallback reason={err}");
            Document::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_document, parse_document, LoadError, MemoryAssetSource, DOCUMENT_ASSET};
    use crate::model::document::Document;

    #[test]
    fn parse_applies_defaults_for_missing_fields() {
        let doc = parse_document(br#"{"title":"Me"}"#).expect("minimal document should parse");
        assert_eq!(doc.title, "Me");
        assert_eq!(doc.theme_color.raw(), "#FFFFFF");
        assert_eq!(doc.birth_year, 1700);
        assert!(doc.profiles.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_document(b"{not json").expect_err("malformed json must fail");
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn load_falls_back_to_default_when_asset_missing() {
        let source = MemoryAssetSource::new();
        assert_eq!(load_document(&source), Document::default());
    }

    #[test]
    fn load_falls_back_when_required_field_missing() {
        let source = MemoryAssetSource::new().with_asset(
            DOCUMENT_ASSET,
            br#"{"title":"Me","profiles":[{"items":[]}]}"#.to_vec(),
        );
        assert_eq!(load_document(&source), Document::default());
    }
}
