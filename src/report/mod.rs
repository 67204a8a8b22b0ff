//! The schema workbook: a summary sheet followed by one sheet per entity.

pub mod entity_sheet;
pub mod palette;
pub mod summary;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use tracing::info;

use crate::common::Result;
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::xlsx::MutableWorkbookData;
use crate::schema::ENTITIES;

pub use entity_sheet::write_entity_sheet;
pub use summary::{SUMMARY_TITLE, write_summary_sheet};

/// File written when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "TPE_Matching_Entities_Schema.xlsx";

/// Name of the first sheet.
pub const SUMMARY_SHEET: &str = "Summary";

/// Build the complete workbook, stamped with `generated_at`.
///
/// Sheet order: Summary, Books, Podcasts, Events, Strategic Partners.
pub fn build_workbook(generated_at: DateTime<Local>) -> Result<MutableWorkbookData> {
    let mut workbook = MutableWorkbookData::new();

    for entity in &ENTITIES {
        let sheet = workbook.add_worksheet(entity.title)?;
        write_entity_sheet(sheet, entity);
    }

    let summary = workbook.insert_worksheet(0, SUMMARY_SHEET)?;
    write_summary_sheet(summary, &ENTITIES, generated_at.naive_local());

    *workbook.properties_mut() = DocumentProperties::new()
        .title(SUMMARY_TITLE)
        .subject("Existing and recommended fields for the matching entities")
        .keywords("schema, matching, books, podcasts, events, partners")
        .timestamped(generated_at.with_timezone(&Utc));

    Ok(workbook)
}

/// Build the workbook with the current local time and write it to `path`.
///
/// Returns the path written.
pub fn generate<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let workbook = build_workbook(Local::now())?;
    workbook.save(path)?;
    info!(
        path = %path.display(),
        sheets = workbook.worksheet_count(),
        "generated schema workbook"
    );
    Ok(path.to_path_buf())
}
