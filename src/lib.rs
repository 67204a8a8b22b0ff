//! Generator for the TPE matching-entities schema workbook.
//!
//! The workbook documents, for each entity the matching system recommends
//! (books, podcasts, events, strategic partners), which database fields
//! exist, which the matcher reads, and which are still missing. It is built
//! from the literal tables in [`schema`] and written as a single `.xlsx`
//! file.
//!
//! - [`schema`]: field tables and their data model
//! - [`report`]: lays the tables out as sheets
//! - [`ooxml`]: the XLSX writer (OPC packaging, styles, shared strings)
//! - [`common`]: errors and XML helpers
//!
//! # Example
//!
//! ```no_run
//! use tpe_schema_sheet::report;
//!
//! let path = report::generate(report::DEFAULT_OUTPUT_FILE)?;
//! println!("Spreadsheet created successfully: {}", path.display());
//! # Ok::<(), tpe_schema_sheet::common::Error>(())
//! ```

pub mod common;
pub mod ooxml;
pub mod report;
pub mod schema;

pub use common::{Error, Result};
pub use report::{DEFAULT_OUTPUT_FILE, build_workbook, generate};
