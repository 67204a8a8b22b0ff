//! Package metadata shared by OOXML formats.

pub mod properties;

pub use properties::{DocumentProperties, ExtendedProperties};
