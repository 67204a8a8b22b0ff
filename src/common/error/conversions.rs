//! Conversions from lower-level errors into [`Error`].

use super::types::Error;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::InvalidPackUri(_) => Error::Other(err.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipError(err.to_string())
    }
}

// `fmt::Write` into a `String` only fails if a `Display` impl does.
impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(format!("XML write error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opc_io_error_keeps_io_variant() {
        let opc = OpcError::IoError(std::io::Error::other("disk full"));
        assert!(matches!(Error::from(opc), Error::Io(_)));
    }

    #[test]
    fn invalid_pack_uri_is_reported_verbatim() {
        let err = Error::from(OpcError::InvalidPackUri("xl/workbook.xml".into()));
        assert_eq!(
            err.to_string(),
            "Invalid pack URI: xl/workbook.xml (must start with '/')"
        );
    }
}
