//! Excel (.xlsx) workbook writing.
//!
//! - [`cell`]: cell values and A1 references
//! - [`format`]: fonts, fills, borders and alignment for cells
//! - [`writer`]: the mutable workbook model and its serialization
//!
//! ```no_run
//! use tpe_schema_sheet::ooxml::xlsx::MutableWorkbookData;
//!
//! let mut workbook = MutableWorkbookData::new();
//! let sheet = workbook.add_worksheet("Summary")?;
//! sheet.set_cell_value(1, 1, "Hello");
//! workbook.save("hello.xlsx")?;
//! # Ok::<(), tpe_schema_sheet::common::Error>(())
//! ```

pub mod cell;
pub mod format;
pub mod writer;

pub use cell::{CellValue, cell_reference, column_to_letters, range_reference};
pub use format::{
    CellAlignment, CellBorder, CellBorderLineStyle, CellBorderSide, CellFill,
    CellFillPatternType, CellFont, CellFormat, HorizontalAlignment, VerticalAlignment,
};
pub use writer::{MutableSharedStrings, MutableWorkbookData, MutableWorksheet, StylesBuilder};
