//! Document properties for OOXML packages.
//!
//! Core properties live in `docProps/core.xml`, extended (application)
//! properties in `docProps/app.xml`.

use std::fmt::Write as FmtWrite;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::common::xml::escape_xml;

/// Document core properties (metadata).
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Document keywords (comma-separated)
    pub keywords: Option<String>,
    /// Document description
    pub description: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Create a new empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document subject.
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the document creator/author.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set the document keywords.
    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Set the document description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set both the creation and modification timestamps.
    pub fn timestamped(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let text_elements = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
            ("dc:description", &self.description),
        ];
        for (tag, value) in text_elements {
            if let Some(value) = value {
                let _ = write!(xml, "<{tag}>{}</{tag}>", escape_xml(value));
            }
        }

        let date_elements = [("dcterms:created", &self.created), ("dcterms:modified", &self.modified)];
        for (tag, value) in date_elements {
            if let Some(at) = value {
                // W3CDTF with a literal "Z"; Excel rejects numeric offsets here.
                let _ = write!(
                    xml,
                    r#"<{tag} xsi:type="dcterms:W3CDTF">{}</{tag}>"#,
                    at.to_rfc3339_opts(SecondsFormat::Secs, true)
                );
            }
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended properties: the producing application and the sheet titles.
#[derive(Debug, Clone)]
pub struct ExtendedProperties {
    /// Producing application name
    pub application: String,
    /// Worksheet names in tab order
    pub sheet_titles: Vec<String>,
}

impl ExtendedProperties {
    /// Properties for a workbook with the given sheets.
    pub fn for_sheets<I, S>(application: &str, sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            application: application.to_string(),
            sheet_titles: sheets.into_iter().map(Into::into).collect(),
        }
    }

    /// Generate app.xml content.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(512 + self.sheet_titles.len() * 48);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        let _ = write!(
            xml,
            "<Application>{}</Application>",
            escape_xml(&self.application)
        );
        let _ = write!(
            xml,
            r#"<HeadingPairs><vt:vector size="2" baseType="variant"><vt:variant><vt:lpstr>Worksheets</vt:lpstr></vt:variant><vt:variant><vt:i4>{}</vt:i4></vt:variant></vt:vector></HeadingPairs>"#,
            self.sheet_titles.len()
        );
        let _ = write!(
            xml,
            r#"<TitlesOfParts><vt:vector size="{}" baseType="lpstr">"#,
            self.sheet_titles.len()
        );
        for title in &self.sheet_titles {
            let _ = write!(xml, "<vt:lpstr>{}</vt:lpstr>", escape_xml(title));
        }
        xml.push_str("</vt:vector></TitlesOfParts></Properties>");
        xml
    }
}
