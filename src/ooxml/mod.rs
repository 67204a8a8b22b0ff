//! Office Open XML (OOXML) writing.
//!
//! 1. **OPC layer** (`opc`): package parts, relationships, ZIP serialization
//! 2. **Shared parts** (`common`): document properties
//! 3. **Spreadsheets** (`xlsx`): cells, formats, and the workbook writer

pub mod common;
pub mod opc;
pub mod xlsx;

pub use opc::{OpcPackage, PackURI, PackageWriter};
