//! Entity sheets: one per matching entity.

use tracing::debug;

use super::palette;
use crate::ooxml::xlsx::MutableWorksheet;
use crate::schema::{COLUMN_HEADERS, EntitySchema, Section};

/// Row holding the column headers.
pub const HEADER_ROW: u32 = 3;

/// Rightmost column (E).
const LAST_COLUMN: u32 = COLUMN_HEADERS.len() as u32;

/// Column widths A..E in characters.
pub const COLUMN_WIDTHS: [f64; 5] = [30.0, 20.0, 35.0, 15.0, 40.0];

/// Write the schema tables of `entity` into `sheet`.
///
/// Layout: heading in row 1, column headers in row 3, then the core,
/// matching and missing sections starting at row 5, each opened by a merged
/// banner row and separated by one blank row. Returns the last row written.
pub fn write_entity_sheet(sheet: &mut MutableWorksheet, entity: &EntitySchema) -> u32 {
    sheet.set_cell_value(1, 1, entity.sheet_heading());
    sheet.set_cell_format(1, 1, palette::title(14.0));
    sheet.merge_cells(1, 1, 1, LAST_COLUMN);

    let header = palette::centered_header();
    for (col, text) in (1..).zip(COLUMN_HEADERS) {
        sheet.set_cell_value(HEADER_ROW, col, text);
        sheet.set_cell_format(HEADER_ROW, col, header.clone());
    }

    let mut row = HEADER_ROW + 2;
    for (index, section) in Section::ALL.into_iter().enumerate() {
        if index > 0 {
            row += 1;
        }

        sheet.set_cell_value(row, 1, section.label());
        sheet.set_cell_format(row, 1, palette::banner(section));
        sheet.merge_cells(row, 1, row, LAST_COLUMN);
        row += 1;

        for field in entity.fields(section) {
            for (col, text) in (1..).zip(field.columns()) {
                sheet.set_cell_value(row, col, text);
                let format = if col == 1 {
                    palette::body_key()
                } else {
                    palette::body()
                };
                sheet.set_cell_format(row, col, format);
            }
            row += 1;
        }
    }

    for (col, width) in (1..).zip(COLUMN_WIDTHS) {
        sheet.set_column_width(col, width);
    }

    let last_row = row - 1;
    debug!(sheet = entity.title, last_row, "wrote entity sheet");
    last_row
}
