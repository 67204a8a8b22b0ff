use thiserror::Error;

/// Main error type for workbook generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing the output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Failure while serializing an XML part
    #[error("XML error: {0}")]
    XmlError(String),

    /// Sheet name rejected by the workbook naming rules
    #[error("Invalid sheet name {name:?}: {reason}")]
    InvalidSheetName { name: String, reason: &'static str },

    /// Two sheets whose names differ only in case
    #[error("Duplicate sheet name: {0}")]
    DuplicateSheetName(String),

    /// Worksheet lookup past the end of the workbook
    #[error("Worksheet index {index} out of bounds ({count} worksheets)")]
    WorksheetIndexOutOfBounds { index: usize, count: usize },

    /// Packaging error that has no closer variant
    #[error("{0}")]
    Other(String),
}

/// Result type for workbook generation.
pub type Result<T> = std::result::Result<T, Error>;
