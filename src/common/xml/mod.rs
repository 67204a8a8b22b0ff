//! XML text helpers shared by every generated part.

pub mod escape;

pub use escape::{escape_xml, unescape_xml};
