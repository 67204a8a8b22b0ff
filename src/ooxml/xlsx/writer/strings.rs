/// Shared strings table for XLSX workbooks.
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::common::xml::escape_xml;

/// Mutable shared strings table.
///
/// Excel stores cell strings once in `xl/sharedStrings.xml` and refers to
/// them by index. `count` is the number of references, `uniqueCount` the
/// number of distinct strings.
#[derive(Debug, Default)]
pub struct MutableSharedStrings {
    /// Unique strings in first-seen order
    strings: Vec<String>,
    /// Map from string to index for fast lookup
    string_to_index: HashMap<String, usize>,
    /// Number of references handed out
    total: usize,
}

impl MutableSharedStrings {
    /// Create a new empty shared strings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference to `s` and return its index.
    ///
    /// If the string already exists, returns the existing index.
    pub fn add_string(&mut self, s: &str) -> usize {
        self.total += 1;
        if let Some(&index) = self.string_to_index.get(s) {
            return index;
        }

        let index = self.strings.len();
        self.strings.push(s.to_string());
        self.string_to_index.insert(s.to_string(), index);
        index
    }

    /// Get the number of unique strings.
    pub fn unique_count(&self) -> usize {
        self.strings.len()
    }

    /// Get the number of string references.
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// String at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    /// Serialize the shared strings table to XML.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.strings.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
            self.total,
            self.strings.len()
        )?;

        for s in &self.strings {
            // Leading or trailing whitespace is dropped by Excel otherwise
            if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
                write!(xml, r#"<si><t xml:space="preserve">{}</t></si>"#, escape_xml(s))?;
            } else {
                write!(xml, "<si><t>{}</t></si>", escape_xml(s))?;
            }
        }

        xml.push_str("</sst>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_strings() {
        let mut ss = MutableSharedStrings::new();
        let idx1 = ss.add_string("Hello");
        let idx2 = ss.add_string("World");
        let idx3 = ss.add_string("Hello"); // Duplicate

        assert_eq!(idx1, 0);
        assert_eq!(idx2, 1);
        assert_eq!(idx3, 0);
        assert_eq!(ss.unique_count(), 2);
        assert_eq!(ss.total_count(), 3);
        assert_eq!(ss.get(1), Some("World"));
    }

    #[test]
    fn xml_counts_and_escaping() {
        let mut ss = MutableSharedStrings::new();
        ss.add_string("Books & Podcasts");
        ss.add_string("Books & Podcasts");
        ss.add_string(" padded");

        let xml = ss.to_xml().unwrap();
        assert!(xml.contains(r#"count="3" uniqueCount="2""#));
        assert!(xml.contains("<si><t>Books &amp; Podcasts</t></si>"));
        assert!(xml.contains(r#"<t xml:space="preserve"> padded</t>"#));
    }
}
