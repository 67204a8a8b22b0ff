/// Mutable worksheet for XLSX writing.
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as FmtWrite;

use super::strings::MutableSharedStrings;
use crate::common::{Error, Result};
use crate::ooxml::xlsx::cell::{CellValue, cell_reference, column_to_letters};
use crate::ooxml::xlsx::format::CellFormat;

/// Maximum sheet name length accepted by Excel.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel forbids in sheet names.
const FORBIDDEN_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Check a sheet name against Excel's naming rules.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("name is empty")
    } else if name.chars().count() > MAX_SHEET_NAME_LEN {
        Some("name is longer than 31 characters")
    } else if name.contains(FORBIDDEN_SHEET_NAME_CHARS) {
        Some("name contains one of [ ] : * ? / \\")
    } else if name.starts_with('\'') || name.ends_with('\'') {
        Some("name starts or ends with an apostrophe")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidSheetName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// A mutable worksheet for writing.
///
/// All public coordinates are 1-based (row 1, column 1 is `A1`); storage is
/// 0-based.
#[derive(Debug)]
pub struct MutableWorksheet {
    /// Worksheet name
    name: String,
    /// Cell data (row, col) -> value
    cells: BTreeMap<(u32, u32), CellValue>,
    /// Cell formatting, independent of values
    cell_formats: BTreeMap<(u32, u32), CellFormat>,
    /// Merged cell ranges (start_row, start_col, end_row, end_col)
    merged_cells: Vec<(u32, u32, u32, u32)>,
    /// Column widths (col -> width in characters)
    column_widths: BTreeMap<u32, f64>,
    /// Whether this worksheet is the selected tab
    is_active: bool,
}

impl MutableWorksheet {
    /// Create a new empty worksheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            cell_formats: BTreeMap::new(),
            merged_cells: Vec::new(),
            column_widths: BTreeMap::new(),
            is_active: false,
        }
    }

    /// Get the worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a cell value.
    ///
    /// # Arguments
    /// * `row` - 1-based row number (1 = first row)
    /// * `col` - 1-based column number (1 = column A)
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, row: u32, col: u32, value: V) {
        debug_assert!(row > 0 && col > 0, "cell coordinates are 1-based");
        self.cells
            .insert((row.saturating_sub(1), col.saturating_sub(1)), value.into());
    }

    /// Set cell formatting. The cell need not have a value.
    pub fn set_cell_format(&mut self, row: u32, col: u32, format: CellFormat) {
        debug_assert!(row > 0 && col > 0, "cell coordinates are 1-based");
        self.cell_formats
            .insert((row.saturating_sub(1), col.saturating_sub(1)), format);
    }

    /// Merge cells in a rectangular range (1-based, inclusive).
    pub fn merge_cells(&mut self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) {
        debug_assert!(start_row > 0 && start_col > 0, "cell coordinates are 1-based");
        debug_assert!(start_row <= end_row && start_col <= end_col);
        self.merged_cells.push((
            start_row.saturating_sub(1),
            start_col.saturating_sub(1),
            end_row.saturating_sub(1),
            end_col.saturating_sub(1),
        ));
    }

    /// Set column width in characters (Excel default is 8.43).
    pub fn set_column_width(&mut self, col: u32, width: f64) {
        debug_assert!(col > 0, "column numbers are 1-based");
        self.column_widths.insert(col.saturating_sub(1), width);
    }

    /// Get a cell value.
    pub fn cell_value(&self, row: u32, col: u32) -> Option<&CellValue> {
        if row == 0 || col == 0 {
            return None;
        }
        self.cells.get(&(row - 1, col - 1))
    }

    /// Get a cell format.
    pub fn cell_format(&self, row: u32, col: u32) -> Option<&CellFormat> {
        if row == 0 || col == 0 {
            return None;
        }
        self.cell_formats.get(&(row - 1, col - 1))
    }

    /// Width of a column, if one was set.
    pub fn column_width(&self, col: u32) -> Option<f64> {
        col.checked_sub(1)
            .and_then(|col| self.column_widths.get(&col).copied())
    }

    /// Merged ranges as A1 references, in insertion order.
    pub fn merged_ranges(&self) -> Vec<String> {
        self.merged_cells
            .iter()
            .map(|&(r1, c1, r2, c2)| {
                format!(
                    "{}:{}",
                    cell_reference(r1 + 1, c1 + 1),
                    cell_reference(r2 + 1, c2 + 1)
                )
            })
            .collect()
    }

    /// Get the number of cells holding a value.
    pub fn cell_count(&self) -> usize {
        self.cells
            .values()
            .filter(|value| !matches!(value, CellValue::Empty))
            .count()
    }

    /// Number of distinct rows holding at least one value.
    pub fn row_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|(_, value)| !matches!(value, CellValue::Empty))
            .map(|(&(row, _), _)| row)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Mark this worksheet as the selected tab.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Check if this worksheet is the selected tab.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Get the used range (min_row, min_col, max_row, max_col), 1-based.
    ///
    /// Formatted empty cells count as used.
    pub fn used_range(&self) -> Option<(u32, u32, u32, u32)> {
        let mut positions = self.cells.keys().chain(self.cell_formats.keys()).peekable();
        positions.peek()?;

        let (mut min_row, mut min_col) = (u32::MAX, u32::MAX);
        let (mut max_row, mut max_col) = (0, 0);
        for &(row, col) in positions {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }

        Some((min_row + 1, min_col + 1, max_row + 1, max_col + 1))
    }

    /// Get cell formats for all cells (0-based keys, used to build styles).
    pub fn cell_formats(&self) -> &BTreeMap<(u32, u32), CellFormat> {
        &self.cell_formats
    }

    /// Serialize the worksheet to XML.
    ///
    /// # Arguments
    /// * `shared_strings` - Shared strings table that receives string cells
    /// * `style_indices` - Map of 0-based cell positions to style indices
    pub fn to_xml(
        &self,
        shared_strings: &mut MutableSharedStrings,
        style_indices: &HashMap<(u32, u32), usize>,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        match self.used_range() {
            Some((min_row, min_col, max_row, max_col)) => write!(
                xml,
                r#"<dimension ref="{}:{}"/>"#,
                cell_reference(min_row, min_col),
                cell_reference(max_row, max_col)
            )?,
            None => xml.push_str(r#"<dimension ref="A1"/>"#),
        }

        xml.push_str("<sheetViews><sheetView workbookViewId=\"0\"");
        if self.is_active {
            xml.push_str(" tabSelected=\"1\"");
        }
        xml.push_str("/></sheetViews>");
        xml.push_str("<sheetFormatPr defaultRowHeight=\"15\"/>");

        self.write_cols(&mut xml)?;

        xml.push_str("<sheetData>");
        self.write_sheet_data(&mut xml, shared_strings, style_indices)?;
        xml.push_str("</sheetData>");

        if !self.merged_cells.is_empty() {
            write!(xml, r#"<mergeCells count="{}">"#, self.merged_cells.len())?;
            for range in self.merged_ranges() {
                write!(xml, r#"<mergeCell ref="{range}"/>"#)?;
            }
            xml.push_str("</mergeCells>");
        }

        xml.push_str(r#"<pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#);
        xml.push_str("</worksheet>");

        Ok(xml)
    }

    fn write_cols(&self, xml: &mut String) -> Result<()> {
        if self.column_widths.is_empty() {
            return Ok(());
        }

        xml.push_str("<cols>");
        for (&col, &width) in &self.column_widths {
            // NOTE: min/max are 1-based
            write!(
                xml,
                r#"<col min="{0}" max="{0}" width="{1}" customWidth="1"/>"#,
                col + 1,
                width
            )?;
        }
        xml.push_str("</cols>");
        Ok(())
    }

    /// Write rows in order; a row holds every cell that has a value or a format.
    fn write_sheet_data(
        &self,
        xml: &mut String,
        shared_strings: &mut MutableSharedStrings,
        style_indices: &HashMap<(u32, u32), usize>,
    ) -> Result<()> {
        let positions: BTreeSet<(u32, u32)> = self
            .cells
            .keys()
            .chain(self.cell_formats.keys())
            .copied()
            .collect();

        let mut current_row = None;
        for (row, col) in positions {
            if current_row != Some(row) {
                if current_row.is_some() {
                    xml.push_str("</row>");
                }
                write!(xml, r#"<row r="{}">"#, row + 1)?;
                current_row = Some(row);
            }

            let cell_ref = format!("{}{}", column_to_letters(col + 1), row + 1);
            let style_index = style_indices.get(&(row, col)).copied();
            let value = self.cells.get(&(row, col)).unwrap_or(&CellValue::Empty);
            write_cell(xml, &cell_ref, value, shared_strings, style_index)?;
        }
        if current_row.is_some() {
            xml.push_str("</row>");
        }

        Ok(())
    }
}

fn write_cell(
    xml: &mut String,
    cell_ref: &str,
    value: &CellValue,
    shared_strings: &mut MutableSharedStrings,
    style_index: Option<usize>,
) -> Result<()> {
    let style_attr = match style_index {
        Some(idx) if idx != 0 => format!(r#" s="{idx}""#),
        _ => String::new(),
    };

    match value {
        CellValue::Empty => {
            if !style_attr.is_empty() {
                write!(xml, r#"<c r="{cell_ref}"{style_attr}/>"#)?;
            }
        },
        CellValue::String(s) => {
            let string_index = shared_strings.add_string(s);
            write!(
                xml,
                r#"<c r="{cell_ref}"{style_attr} t="s"><v>{string_index}</v></c>"#
            )?;
        },
        CellValue::Int(i) => {
            write!(xml, r#"<c r="{cell_ref}"{style_attr}><v>{i}</v></c>"#)?;
        },
        CellValue::Float(f) => {
            write!(xml, r#"<c r="{cell_ref}"{style_attr}><v>{f}</v></c>"#)?;
        },
        CellValue::Bool(b) => {
            write!(
                xml,
                r#"<c r="{cell_ref}"{style_attr} t="b"><v>{}</v></c>"#,
                u8::from(*b)
            )?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::xlsx::format::CellFont;

    fn render(ws: &MutableWorksheet, styles: &HashMap<(u32, u32), usize>) -> String {
        let mut shared_strings = MutableSharedStrings::new();
        ws.to_xml(&mut shared_strings, styles).unwrap()
    }

    #[test]
    fn test_create_worksheet() {
        let ws = MutableWorksheet::new("Sheet1");
        assert_eq!(ws.name(), "Sheet1");
        assert_eq!(ws.cell_count(), 0);
        assert_eq!(ws.used_range(), None);
    }

    #[test]
    fn test_set_cell_value() {
        let mut ws = MutableWorksheet::new("Sheet1");
        ws.set_cell_value(1, 1, "Hello");
        ws.set_cell_value(1, 2, 42i64);
        ws.set_cell_value(3, 1, 3.5);

        assert_eq!(ws.cell_count(), 3);
        assert_eq!(ws.row_count(), 2);
        assert!(matches!(ws.cell_value(1, 1), Some(CellValue::String(_))));
        assert_eq!(ws.cell_value(0, 1), None);
        assert_eq!(ws.used_range(), Some((1, 1, 3, 2)));
    }

    #[test]
    fn formatted_empty_cell_is_written_with_style() {
        let mut ws = MutableWorksheet::new("Sheet1");
        ws.set_cell_value(5, 1, "CORE FIELDS");
        ws.set_cell_format(5, 2, CellFormat::new().with_font(CellFont::bold()));

        let styles = HashMap::from([((4, 1), 3)]);
        let xml = render(&ws, &styles);

        assert!(xml.contains(r#"<row r="5"><c r="A5" t="s"><v>0</v></c><c r="B5" s="3"/></row>"#));
        assert!(xml.contains(r#"<dimension ref="A5:B5"/>"#));
        assert_eq!(ws.row_count(), 1);
    }

    #[test]
    fn merges_and_widths_are_serialized() {
        let mut ws = MutableWorksheet::new("Books");
        ws.set_cell_value(1, 1, "Title");
        ws.merge_cells(1, 1, 1, 5);
        ws.set_column_width(1, 30.0);
        ws.set_column_width(5, 40.0);

        let xml = render(&ws, &HashMap::new());
        assert!(xml.contains(r#"<mergeCells count="1"><mergeCell ref="A1:E1"/></mergeCells>"#));
        assert!(xml.contains(r#"<col min="1" max="1" width="30" customWidth="1"/>"#));
        assert!(xml.contains(r#"<col min="5" max="5" width="40" customWidth="1"/>"#));
        assert!(xml.find("<cols>").unwrap() < xml.find("<sheetData>").unwrap());
        assert!(xml.find("</sheetData>").unwrap() < xml.find("<mergeCells").unwrap());
        assert_eq!(ws.column_width(5), Some(40.0));
    }

    #[test]
    fn active_sheet_is_tab_selected() {
        let mut ws = MutableWorksheet::new("Summary");
        ws.set_active(true);
        assert!(render(&ws, &HashMap::new()).contains(r#"tabSelected="1""#));
    }

    #[test]
    fn sheet_name_rules() {
        assert!(validate_sheet_name("Strategic Partners").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name("   ").is_err());
        assert!(validate_sheet_name("a/b").is_err());
        assert!(validate_sheet_name("'quoted'").is_err());
        assert!(validate_sheet_name(&"x".repeat(31)).is_ok());
        assert!(matches!(
            validate_sheet_name(&"x".repeat(32)),
            Err(Error::InvalidSheetName { .. })
        ));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_plain_names_up_to_31_chars_are_valid(
                name in "[A-Za-z0-9][A-Za-z0-9 _-]{0,29}[A-Za-z0-9]",
            ) {
                prop_assert!(validate_sheet_name(&name).is_ok());
            }

            #[test]
            fn prop_forbidden_char_is_rejected(
                prefix in "[A-Za-z]{1,10}",
                bad in prop::sample::select(FORBIDDEN_SHEET_NAME_CHARS.to_vec()),
                suffix in "[A-Za-z]{0,10}",
            ) {
                let name = format!("{prefix}{bad}{suffix}");
                let is_invalid_name = matches!(
                    validate_sheet_name(&name),
                    Err(Error::InvalidSheetName { .. })
                );
                prop_assert!(is_invalid_name);
            }

            #[test]
            fn prop_cell_reference_is_letters_then_row(
                row in 1u32..1_048_576,
                col in 1u32..16_384,
            ) {
                let reference = cell_reference(row, col);
                let letters = column_to_letters(col);
                prop_assert!(reference.starts_with(&letters));
                prop_assert_eq!(&reference[letters.len()..], row.to_string());
            }
        }
    }
}
