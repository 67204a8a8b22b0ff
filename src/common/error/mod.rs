//! Crate-wide error type.
//!
//! Lower layers (the OPC packager) keep their own error enums; everything is
//! folded into [`Error`] at the workbook boundary.

pub mod conversions;
pub mod types;

pub use types::{Error, Result};
