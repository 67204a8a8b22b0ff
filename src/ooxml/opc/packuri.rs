/// Part names inside an OPC package.
use crate::ooxml::opc::error::{OpcError, Result};

/// URI of the `[Content_Types].xml` manifest.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// Pseudo-partname of the package itself (source of package-level relationships).
pub const PACKAGE_URI: &str = "/";

/// A partname within an OPC package, e.g. `/xl/worksheets/sheet1.xml`.
///
/// Always absolute with forward-slash separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a PackURI, rejecting anything that is not absolute.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(uri));
        }
        Ok(PackURI { uri })
    }

    /// Directory portion: `/xl/worksheets` for `/xl/worksheets/sheet1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Final path segment: `sheet1.xml` for `/xl/worksheets/sheet1.xml`.
    pub fn filename(&self) -> &str {
        self.uri
            .rfind('/')
            .map_or("", |pos| &self.uri[pos + 1..])
    }

    /// Extension without the leading period.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        filename.rfind('.').map_or("", |pos| &filename[pos + 1..])
    }

    /// ZIP member name (leading slash stripped).
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Partname of the relationships part belonging to this part.
    ///
    /// `/xl/workbook.xml` maps to `/xl/_rels/workbook.xml.rels` and the package
    /// pseudo-partname `/` maps to `/_rels/.rels`.
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base = self.base_uri().trim_end_matches('/');
        PackURI::new(format!("{}/_rels/{}.rels", base, self.filename()))
    }

    /// The URI as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_uri() {
        assert!(matches!(
            PackURI::new("xl/workbook.xml"),
            Err(OpcError::InvalidPackUri(_))
        ));
    }

    #[test]
    fn components() {
        let uri = PackURI::new("/xl/worksheets/sheet3.xml").unwrap();
        assert_eq!(uri.base_uri(), "/xl/worksheets");
        assert_eq!(uri.filename(), "sheet3.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.membername(), "xl/worksheets/sheet3.xml");
    }

    #[test]
    fn rels_uri_for_part_and_package() {
        let workbook = PackURI::new("/xl/workbook.xml").unwrap();
        assert_eq!(
            workbook.rels_uri().unwrap().as_str(),
            "/xl/_rels/workbook.xml.rels"
        );

        let package = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(package.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }

    #[test]
    fn content_types_uri_has_no_extension_dir() {
        let uri = PackURI::new(CONTENT_TYPES_URI).unwrap();
        assert_eq!(uri.membername(), "[Content_Types].xml");
        assert_eq!(uri.base_uri(), "/");
    }
}
