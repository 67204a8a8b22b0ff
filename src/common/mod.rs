//! Utilities shared by the package writer and the spreadsheet writer.

pub mod error;
pub mod xml;

pub use error::{Error, Result};
