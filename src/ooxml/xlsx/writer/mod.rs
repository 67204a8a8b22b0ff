//! Mutable worksheet and workbook writer components for XLSX.

pub mod sheet;
pub mod strings;
pub mod styles;
pub mod workbook;

pub use sheet::{MAX_SHEET_NAME_LEN, MutableWorksheet, validate_sheet_name};
pub use strings::MutableSharedStrings;
pub use styles::StylesBuilder;
pub use workbook::{CellStyleMap, MutableWorkbookData};
