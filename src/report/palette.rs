//! Cell formats shared by the report sheets.

use crate::ooxml::xlsx::{
    CellAlignment, CellBorder, CellBorderLineStyle, CellFill, CellFont, CellFormat,
};
use crate::schema::Section;

/// Column header fill.
pub const HEADER_FILL: &str = "366092";
/// Font color on filled header and banner cells.
pub const HEADER_FONT_COLOR: &str = "FFFFFF";

fn thin_border() -> CellBorder {
    CellBorder::all(CellBorderLineStyle::Thin)
}

/// Sheet title in cell A1.
pub fn title(size: f64) -> CellFormat {
    CellFormat::new().with_font(CellFont::bold().size(size))
}

/// Column header: bold white on blue, thin border.
pub fn header() -> CellFormat {
    CellFormat::new()
        .with_font(CellFont::bold().size(12.0).color(HEADER_FONT_COLOR))
        .with_fill(CellFill::solid(HEADER_FILL))
        .with_border(thin_border())
}

/// Column header, centred.
pub fn centered_header() -> CellFormat {
    header().with_alignment(CellAlignment::centered())
}

/// Section banner filled with the section color.
pub fn banner(section: Section) -> CellFormat {
    CellFormat::new()
        .with_font(CellFont::bold().size(11.0).color(HEADER_FONT_COLOR))
        .with_fill(CellFill::solid(section.fill_color()))
}

/// Table body cell.
pub fn body() -> CellFormat {
    CellFormat::new().with_border(thin_border())
}

/// First column of a table body row.
pub fn body_key() -> CellFormat {
    body().with_font(CellFont::bold())
}

/// Heading above the summary note lists.
pub fn note_heading() -> CellFormat {
    title(12.0)
}
