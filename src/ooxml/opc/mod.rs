/// Open Packaging Conventions (OPC) writer.
///
/// An XLSX file is an OPC package: a ZIP archive of XML parts tied together by
/// relationship files and a `[Content_Types].xml` manifest. This module models
/// just enough of that to assemble a package in memory and serialize it.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
