//! Styles.xml generator for XLSX files.
//!
//! Collects the fonts, fills, borders and alignments used by cell formats,
//! deduplicates them, and writes `xl/styles.xml`. Style index 0 is always the
//! unformatted default.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::hash::Hash;

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::xlsx::format::{
    CellAlignment, CellBorder, CellBorderSide, CellFill, CellFillPatternType, CellFont,
    CellFormat, argb,
};

/// One `<xf>` record: indices into the font, fill and border tables.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Xf {
    font_id: usize,
    fill_id: usize,
    border_id: usize,
    alignment: Option<CellAlignment>,
}

/// Builder for generating styles.xml content.
#[derive(Debug)]
pub struct StylesBuilder {
    fonts: Vec<CellFont>,
    font_map: HashMap<CellFont, usize>,
    fills: Vec<CellFill>,
    fill_map: HashMap<CellFill, usize>,
    borders: Vec<CellBorder>,
    border_map: HashMap<CellBorder, usize>,
    cell_formats: Vec<Xf>,
    cell_format_map: HashMap<CellFormat, usize>,
}

/// Look `value` up in `map`, appending it to `table` when missing.
fn intern<T: Clone + Eq + Hash>(
    table: &mut Vec<T>,
    map: &mut HashMap<T, usize>,
    value: &T,
) -> usize {
    if let Some(&index) = map.get(value) {
        return index;
    }
    let index = table.len();
    table.push(value.clone());
    map.insert(value.clone(), index);
    index
}

impl StylesBuilder {
    /// Create a new StylesBuilder with the records Excel requires.
    pub fn new() -> Self {
        let mut builder = Self {
            fonts: Vec::new(),
            font_map: HashMap::new(),
            fills: Vec::new(),
            fill_map: HashMap::new(),
            borders: Vec::new(),
            border_map: HashMap::new(),
            cell_formats: Vec::new(),
            cell_format_map: HashMap::new(),
        };

        intern(&mut builder.fonts, &mut builder.font_map, &CellFont::default());

        // Fills 0 and 1 are reserved: none, then gray125
        for pattern_type in [CellFillPatternType::None, CellFillPatternType::Gray125] {
            let fill = CellFill {
                pattern_type,
                fg_color: None,
                bg_color: None,
            };
            intern(&mut builder.fills, &mut builder.fill_map, &fill);
        }

        intern(&mut builder.borders, &mut builder.border_map, &CellBorder::default());

        builder.cell_formats.push(Xf {
            font_id: 0,
            fill_id: 0,
            border_id: 0,
            alignment: None,
        });
        builder.cell_format_map.insert(CellFormat::default(), 0);

        builder
    }

    /// Add a cell format and return its style index.
    ///
    /// If the format has already been added, returns the existing index.
    pub fn add_cell_format(&mut self, format: &CellFormat) -> usize {
        if let Some(&index) = self.cell_format_map.get(format) {
            return index;
        }

        let font_id = format
            .font
            .as_ref()
            .map_or(0, |font| intern(&mut self.fonts, &mut self.font_map, font));
        let fill_id = format
            .fill
            .as_ref()
            .map_or(0, |fill| intern(&mut self.fills, &mut self.fill_map, fill));
        let border_id = format
            .border
            .as_ref()
            .map_or(0, |border| intern(&mut self.borders, &mut self.border_map, border));

        let index = self.cell_formats.len();
        self.cell_formats.push(Xf {
            font_id,
            fill_id,
            border_id,
            alignment: format.alignment.clone(),
        });
        self.cell_format_map.insert(format.clone(), index);
        index
    }

    /// Number of `<xf>` records, including the default.
    pub fn cell_format_count(&self) -> usize {
        self.cell_formats.len()
    }

    /// Number of distinct fonts.
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Number of distinct fills, including the two reserved ones.
    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// Number of distinct borders.
    pub fn border_count(&self) -> usize {
        self.borders.len()
    }

    /// Generate the complete styles.xml content.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        write!(xml, r#"<fonts count="{}">"#, self.fonts.len())?;
        for font in &self.fonts {
            write_font(&mut xml, font)?;
        }
        xml.push_str("</fonts>");

        write!(xml, r#"<fills count="{}">"#, self.fills.len())?;
        for fill in &self.fills {
            write_fill(&mut xml, fill)?;
        }
        xml.push_str("</fills>");

        write!(xml, r#"<borders count="{}">"#, self.borders.len())?;
        for border in &self.borders {
            write_border(&mut xml, border)?;
        }
        xml.push_str("</borders>");

        xml.push_str(r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#);

        write!(xml, r#"<cellXfs count="{}">"#, self.cell_formats.len())?;
        for xf in &self.cell_formats {
            write!(
                xml,
                r#"<xf numFmtId="0" fontId="{}" fillId="{}" borderId="{}" xfId="0""#,
                xf.font_id, xf.fill_id, xf.border_id
            )?;
            if xf.font_id != 0 {
                xml.push_str(r#" applyFont="1""#);
            }
            if xf.fill_id != 0 {
                xml.push_str(r#" applyFill="1""#);
            }
            if xf.border_id != 0 {
                xml.push_str(r#" applyBorder="1""#);
            }

            match &xf.alignment {
                Some(alignment) => {
                    xml.push_str(r#" applyAlignment="1">"#);
                    write_alignment(&mut xml, alignment)?;
                    xml.push_str("</xf>");
                },
                None => xml.push_str("/>"),
            }
        }
        xml.push_str("</cellXfs>");

        xml.push_str(r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#);
        xml.push_str("</styleSheet>");

        Ok(xml)
    }
}

impl Default for StylesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_font(xml: &mut String, font: &CellFont) -> Result<()> {
    xml.push_str("<font>");

    if font.bold {
        xml.push_str("<b/>");
    }
    if font.italic {
        xml.push_str("<i/>");
    }
    if font.underline {
        xml.push_str("<u/>");
    }

    write!(xml, r#"<sz val="{}"/>"#, font.size.unwrap_or(11.0))?;

    // No theme part is written, so only explicit RGB colors are emitted
    if let Some(ref color) = font.color {
        write!(xml, r#"<color rgb="{}"/>"#, escape_xml(&argb(color)))?;
    }

    let name = font.name.as_deref().unwrap_or("Calibri");
    write!(xml, r#"<name val="{}"/><family val="2"/>"#, escape_xml(name))?;

    xml.push_str("</font>");
    Ok(())
}

fn write_fill(xml: &mut String, fill: &CellFill) -> Result<()> {
    write!(
        xml,
        r#"<fill><patternFill patternType="{}""#,
        fill.pattern_type.as_str()
    )?;

    if fill.fg_color.is_none() && fill.bg_color.is_none() {
        xml.push_str("/></fill>");
        return Ok(());
    }

    xml.push('>');
    if let Some(ref fg_color) = fill.fg_color {
        write!(xml, r#"<fgColor rgb="{}"/>"#, escape_xml(&argb(fg_color)))?;
    }
    if let Some(ref bg_color) = fill.bg_color {
        write!(xml, r#"<bgColor rgb="{}"/>"#, escape_xml(&argb(bg_color)))?;
    }
    xml.push_str("</patternFill></fill>");
    Ok(())
}

fn write_border(xml: &mut String, border: &CellBorder) -> Result<()> {
    xml.push_str("<border>");
    write_border_side(xml, "left", border.left.as_ref())?;
    write_border_side(xml, "right", border.right.as_ref())?;
    write_border_side(xml, "top", border.top.as_ref())?;
    write_border_side(xml, "bottom", border.bottom.as_ref())?;
    xml.push_str("<diagonal/></border>");
    Ok(())
}

fn write_border_side(
    xml: &mut String,
    side: &str,
    border_side: Option<&CellBorderSide>,
) -> Result<()> {
    let Some(bs) = border_side else {
        write!(xml, "<{side}/>")?;
        return Ok(());
    };

    write!(xml, r#"<{side} style="{}">"#, bs.style.as_str())?;
    match bs.color {
        Some(ref color) => write!(xml, r#"<color rgb="{}"/>"#, escape_xml(&argb(color)))?,
        None => xml.push_str(r#"<color indexed="64"/>"#),
    }
    write!(xml, "</{side}>")?;
    Ok(())
}

fn write_alignment(xml: &mut String, alignment: &CellAlignment) -> Result<()> {
    xml.push_str("<alignment");
    if let Some(horizontal) = alignment.horizontal {
        write!(xml, r#" horizontal="{}""#, horizontal.as_str())?;
    }
    if let Some(vertical) = alignment.vertical {
        write!(xml, r#" vertical="{}""#, vertical.as_str())?;
    }
    if alignment.wrap_text {
        xml.push_str(r#" wrapText="1""#);
    }
    xml.push_str("/>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::xlsx::format::CellBorderLineStyle;

    #[test]
    fn test_create_default_styles() {
        let builder = StylesBuilder::new();
        assert_eq!(builder.font_count(), 1);
        assert_eq!(builder.fill_count(), 2);
        assert_eq!(builder.border_count(), 1);
        assert_eq!(builder.cell_format_count(), 1);
    }

    #[test]
    fn test_add_cell_format() {
        let mut builder = StylesBuilder::new();
        let format = CellFormat::new().with_font(CellFont::bold());

        let index = builder.add_cell_format(&format);
        assert_eq!(index, 1);
        assert_eq!(builder.add_cell_format(&format), index);
        assert_eq!(builder.add_cell_format(&CellFormat::default()), 0);
    }

    #[test]
    fn formats_share_component_records() {
        let mut builder = StylesBuilder::new();
        let thin = CellBorder::all(CellBorderLineStyle::Thin);

        let plain = builder.add_cell_format(&CellFormat::new().with_border(thin.clone()));
        let bold = builder.add_cell_format(
            &CellFormat::new()
                .with_font(CellFont::bold())
                .with_border(thin),
        );

        assert_ne!(plain, bold);
        assert_eq!(builder.border_count(), 2);
        assert_eq!(builder.font_count(), 2);
    }

    #[test]
    fn test_generate_xml() {
        let mut builder = StylesBuilder::new();
        let format = CellFormat::new()
            .with_font(CellFont::bold().size(12.0).color("FFFFFF"))
            .with_fill(CellFill::solid("366092"))
            .with_border(CellBorder::all(CellBorderLineStyle::Thin))
            .with_alignment(CellAlignment::centered());
        builder.add_cell_format(&format);

        let xml = builder.to_xml().unwrap();
        assert!(xml.contains(r#"<fills count="3">"#));
        assert!(xml.contains(r#"<patternFill patternType="gray125"/>"#));
        assert!(xml.contains(r#"<fgColor rgb="FF366092"/><bgColor rgb="FF366092"/>"#));
        assert!(xml.contains(r#"<b/><sz val="12"/><color rgb="FFFFFFFF"/>"#));
        assert!(xml.contains(r#"<left style="thin">"#));
        assert!(xml.contains(r#"<alignment horizontal="center"/></xf>"#));
        assert!(xml.contains(r#"<cellXfs count="2">"#));
    }
}
