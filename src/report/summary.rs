//! Summary sheet: per-entity field counts and matching notes.

use chrono::NaiveDateTime;
use tracing::debug;

use super::palette;
use crate::ooxml::xlsx::MutableWorksheet;
use crate::schema::{EntitySchema, MATCHING_ALGORITHM_NOTES, PRIORITY_ADDITIONS, Section};

/// Heading in cell A1.
pub const SUMMARY_TITLE: &str = "TPE Matching Entities - Database Schema Summary";

/// Headers of the count table.
pub const SUMMARY_HEADERS: [&str; 4] = [
    "Entity",
    "Core Fields",
    "Matching Fields",
    "Missing Fields",
];

/// Row holding the count table headers.
pub const SUMMARY_HEADER_ROW: u32 = 4;

/// Column widths A..D in characters.
pub const COLUMN_WIDTHS: [f64; 4] = [50.0, 15.0, 15.0, 15.0];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Write the summary sheet. Returns the last row written.
pub fn write_summary_sheet(
    sheet: &mut MutableWorksheet,
    entities: &[EntitySchema],
    generated_at: NaiveDateTime,
) -> u32 {
    sheet.set_cell_value(1, 1, SUMMARY_TITLE);
    sheet.set_cell_format(1, 1, palette::title(16.0));
    sheet.merge_cells(1, 1, 1, SUMMARY_HEADERS.len() as u32);

    for (col, text) in (1..).zip(SUMMARY_HEADERS) {
        sheet.set_cell_value(SUMMARY_HEADER_ROW, col, text);
        sheet.set_cell_format(SUMMARY_HEADER_ROW, col, palette::header());
    }

    let mut row = SUMMARY_HEADER_ROW + 1;
    for entity in entities {
        sheet.set_cell_value(row, 1, entity.title);
        sheet.set_cell_format(row, 1, palette::body_key());
        for (col, section) in (2..).zip(Section::ALL) {
            sheet.set_cell_value(row, col, entity.count(section));
            sheet.set_cell_format(row, col, palette::body());
        }
        row += 1;
    }

    row += 1;
    row = write_note_list(sheet, row, "MATCHING ALGORITHM NOTES:", &MATCHING_ALGORITHM_NOTES);
    row += 1;
    row = write_note_list(sheet, row, "PRIORITY ADDITIONS:", &PRIORITY_ADDITIONS);
    row += 1;

    let stamp = format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT));
    sheet.set_cell_value(row, 1, stamp);

    for (col, width) in (1..).zip(COLUMN_WIDTHS) {
        sheet.set_column_width(col, width);
    }

    debug!(entities = entities.len(), last_row = row, "wrote summary sheet");
    row
}

/// Bold heading followed by one line per item; returns the next free row.
fn write_note_list(
    sheet: &mut MutableWorksheet,
    mut row: u32,
    heading: &str,
    items: &[&str],
) -> u32 {
    sheet.set_cell_value(row, 1, heading);
    sheet.set_cell_format(row, 1, palette::note_heading());
    row += 1;
    for item in items {
        sheet.set_cell_value(row, 1, *item);
        row += 1;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::xlsx::CellValue;
    use crate::schema::ENTITIES;
    use chrono::NaiveDate;

    fn sample() -> (MutableWorksheet, u32) {
        let at = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let mut sheet = MutableWorksheet::new("Summary");
        let last_row = write_summary_sheet(&mut sheet, &ENTITIES, at);
        (sheet, last_row)
    }

    fn text(sheet: &MutableWorksheet, row: u32) -> Option<&str> {
        sheet.cell_value(row, 1).and_then(CellValue::as_str)
    }

    #[test]
    fn layout_rows() {
        let (sheet, last_row) = sample();

        assert_eq!(last_row, 22);
        assert_eq!(text(&sheet, 1), Some(SUMMARY_TITLE));
        assert_eq!(sheet.cell_value(3, 1), None);
        assert_eq!(text(&sheet, 4), Some("Entity"));
        assert_eq!(text(&sheet, 8), Some("Strategic Partners"));
        assert_eq!(sheet.cell_value(9, 1), None);
        assert_eq!(text(&sheet, 10), Some("MATCHING ALGORITHM NOTES:"));
        assert_eq!(text(&sheet, 14), Some(MATCHING_ALGORITHM_NOTES[3]));
        assert_eq!(text(&sheet, 16), Some("PRIORITY ADDITIONS:"));
        assert_eq!(text(&sheet, 20), Some(PRIORITY_ADDITIONS[3]));
        assert_eq!(text(&sheet, 22), Some("Generated: 2026-10-17 09:05"));
        assert_eq!(sheet.merged_ranges(), ["A1:D1"]);
    }

    #[test]
    fn counts_come_from_catalog() {
        let (sheet, _) = sample();
        let row_of = |r: u32| -> Vec<Option<i64>> {
            (2..=4)
                .map(|c| sheet.cell_value(r, c).and_then(CellValue::as_int))
                .collect()
        };

        assert_eq!(row_of(5), [Some(11), Some(4), Some(11)]);
        assert_eq!(row_of(6), [Some(7), Some(2), Some(14)]);
        assert_eq!(row_of(7), [Some(10), Some(1), Some(17)]);
        assert_eq!(row_of(8), [Some(12), Some(6), Some(9)]);
    }

    #[test]
    fn every_entity_row_is_bordered() {
        let (sheet, _) = sample();
        for row in 5..=8 {
            assert_eq!(sheet.cell_format(row, 1), Some(&palette::body_key()));
            assert_eq!(sheet.cell_format(row, 4), Some(&palette::body()));
        }
        assert_eq!(sheet.cell_format(4, 2), Some(&palette::header()));
        assert_eq!(sheet.cell_format(16, 1), Some(&palette::note_heading()));
        assert_eq!(sheet.cell_format(22, 1), None);
    }
}
