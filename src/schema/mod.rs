//! Schema data model for the matching entities.
//!
//! Each entity is described by three fixed lists of fields: those already in
//! the database (`core`), those the matcher reads (`matching`), and those
//! recommended but not yet added (`missing`). The tables themselves live in
//! [`catalog`].

pub mod catalog;

use std::fmt;

pub use catalog::{
    BOOKS, ENTITIES, EVENTS, MATCHING_ALGORITHM_NOTES, PODCASTS, PRIORITY_ADDITIONS,
    STRATEGIC_PARTNERS,
};

/// Column headers shared by every entity sheet.
pub const COLUMN_HEADERS: [&str; 5] = [
    "Field Name",
    "Data Type",
    "Description",
    "Current Status",
    "Notes",
];

/// Whether a field is present in the live schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldStatus {
    Exists,
    Missing,
}

impl FieldStatus {
    /// Label shown in the `Current Status` column.
    pub const fn label(self) -> &'static str {
        match self {
            FieldStatus::Exists => "✓ Exists",
            FieldStatus::Missing => "❌ Missing",
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of an entity sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub data_type: &'static str,
    pub description: &'static str,
    pub status: FieldStatus,
    pub notes: &'static str,
}

impl FieldSpec {
    /// A field already in the schema.
    pub const fn exists(
        name: &'static str,
        data_type: &'static str,
        description: &'static str,
        notes: &'static str,
    ) -> Self {
        Self {
            name,
            data_type,
            description,
            status: FieldStatus::Exists,
            notes,
        }
    }

    /// A recommended field not yet in the schema.
    pub const fn missing(
        name: &'static str,
        data_type: &'static str,
        description: &'static str,
        notes: &'static str,
    ) -> Self {
        Self {
            name,
            data_type,
            description,
            status: FieldStatus::Missing,
            notes,
        }
    }

    /// The five cells of this row, in column order.
    pub fn columns(&self) -> [&'static str; 5] {
        [
            self.name,
            self.data_type,
            self.description,
            self.status.label(),
            self.notes,
        ]
    }
}

/// Section of an entity sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Core,
    Matching,
    Missing,
}

impl Section {
    /// Sections in sheet order.
    pub const ALL: [Section; 3] = [Section::Core, Section::Matching, Section::Missing];

    /// Banner text.
    pub const fn label(self) -> &'static str {
        match self {
            Section::Core => "CORE FIELDS",
            Section::Matching => "MATCHING FIELDS",
            Section::Missing => "MISSING FIELDS (Recommended for Better Matching)",
        }
    }

    /// Banner fill color (RGB hex).
    pub const fn fill_color(self) -> &'static str {
        match self {
            Section::Core => "4472C4",
            Section::Matching => "70AD47",
            Section::Missing => "ED7D31",
        }
    }
}

/// Schema description of one entity.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Sheet title, also the entity name on the summary sheet
    pub title: &'static str,
    pub core: &'static [FieldSpec],
    pub matching: &'static [FieldSpec],
    pub missing: &'static [FieldSpec],
}

impl EntitySchema {
    /// Fields of one section.
    pub fn fields(&self, section: Section) -> &'static [FieldSpec] {
        match section {
            Section::Core => self.core,
            Section::Matching => self.matching,
            Section::Missing => self.missing,
        }
    }

    /// Number of fields in one section.
    pub fn count(&self, section: Section) -> usize {
        self.fields(section).len()
    }

    /// Number of fields across all sections.
    pub fn total_fields(&self) -> usize {
        Section::ALL.iter().map(|&section| self.count(section)).sum()
    }

    /// Title shown in cell A1 of the entity sheet.
    pub fn sheet_heading(&self) -> String {
        format!("{} Entity - Database Schema & Matching Fields", self.title)
    }
}
