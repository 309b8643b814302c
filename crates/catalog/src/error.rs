//! Error types produced while loading a catalog.
//!
//! Loading is the only fallible step in this crate. Once a [`Catalog`] exists
//! every read on it is infallible, so callers only need to handle
//! [`LoadError`] at startup.
//!
//! | Error | Description |
//! |-------|-------------|
//! | [`Io`](LoadError::Io) | Source file missing or unreadable |
//! | [`Json`](LoadError::Json) | JSON source is not valid JSON |
//! | [`Csv`](LoadError::Csv) | CSV source could not be parsed |
//! | [`Xlsx`](LoadError::Xlsx) | Workbook is not a readable xlsx file |
//! | [`InvalidShape`](LoadError::InvalidShape) | JSON parsed but is not an array of row objects |
//! | [`UnsupportedFormat`](LoadError::UnsupportedFormat) | File extension not recognised |
//! | [`MissingColumn`](LoadError::MissingColumn) | A required column header is absent |
//!
//! [`Catalog`]: crate::Catalog

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a catalog source cannot be turned into a [`Catalog`].
///
/// These are fatal for a serving process: nothing should answer queries
/// until a catalog has loaded.
///
/// ```rust
/// use catalog::LoadError;
///
/// let err = LoadError::MissingColumn("Suma Bodegas".into());
/// assert_eq!(err.to_string(), "missing required column 'Suma Bodegas'");
/// ```
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("failed to read catalog source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON source is syntactically invalid.
    #[error("malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV source is malformed (ragged rows, bad quoting, invalid UTF-8).
    #[error("malformed CSV catalog: {0}")]
    Csv(#[from] csv::Error),

    /// The xlsx source is not a readable workbook.
    #[error("malformed xlsx catalog: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    /// The source parsed but holds no usable table (not an array of row
    /// objects, or a workbook without sheets).
    #[error("invalid catalog shape: {0}")]
    InvalidShape(String),

    /// The file extension does not name a supported format.
    #[error("unsupported catalog format '{0}' (expected json, csv or xlsx)")]
    UnsupportedFormat(String),

    /// A required column header is missing from the source.
    #[error("missing required column '{0}'")]
    MissingColumn(String),
}
