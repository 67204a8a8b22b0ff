/// Workbook data structure for XLSX.
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use tracing::{debug, info};

use super::sheet::{MutableWorksheet, validate_sheet_name};
use super::strings::MutableSharedStrings;
use super::styles::StylesBuilder;
use crate::common::xml::escape_xml;
use crate::common::{Error, Result};
use crate::ooxml::common::{DocumentProperties, ExtendedProperties};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};

/// Type alias for cell position to style index mapping.
pub type CellStyleMap = HashMap<(u32, u32), usize>;

/// Application name recorded in `docProps/app.xml`.
const APPLICATION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Mutable workbook for writing.
///
/// Sheets are kept in tab order; the first sheet is the active tab.
#[derive(Debug, Default)]
pub struct MutableWorkbookData {
    /// Worksheets in tab order
    worksheets: Vec<MutableWorksheet>,
    /// Core document properties
    properties: DocumentProperties,
}

impl MutableWorkbookData {
    /// Create a new workbook with no worksheets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a worksheet.
    pub fn add_worksheet(&mut self, name: &str) -> Result<&mut MutableWorksheet> {
        let index = self.worksheets.len();
        self.insert_worksheet(index, name)
    }

    /// Insert a worksheet at `index`, shifting later sheets right.
    pub fn insert_worksheet(&mut self, index: usize, name: &str) -> Result<&mut MutableWorksheet> {
        if index > self.worksheets.len() {
            return Err(Error::WorksheetIndexOutOfBounds {
                index,
                count: self.worksheets.len(),
            });
        }
        validate_sheet_name(name)?;
        let lowered = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == lowered)
        {
            return Err(Error::DuplicateSheetName(name.to_string()));
        }

        debug!(sheet = name, index, "adding worksheet");
        self.worksheets.insert(index, MutableWorksheet::new(name));
        for (i, ws) in self.worksheets.iter_mut().enumerate() {
            ws.set_active(i == 0);
        }
        Ok(&mut self.worksheets[index])
    }

    /// Get a worksheet by index.
    pub fn worksheet(&self, index: usize) -> Result<&MutableWorksheet> {
        let count = self.worksheets.len();
        self.worksheets
            .get(index)
            .ok_or(Error::WorksheetIndexOutOfBounds { index, count })
    }

    /// Get a mutable worksheet by index.
    pub fn worksheet_mut(&mut self, index: usize) -> Result<&mut MutableWorksheet> {
        let count = self.worksheets.len();
        self.worksheets
            .get_mut(index)
            .ok_or(Error::WorksheetIndexOutOfBounds { index, count })
    }

    /// Find a worksheet by exact name.
    pub fn worksheet_by_name(&self, name: &str) -> Option<&MutableWorksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get the number of worksheets.
    pub fn worksheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Worksheet names in tab order.
    pub fn worksheet_names(&self) -> Vec<&str> {
        self.worksheets.iter().map(MutableWorksheet::name).collect()
    }

    /// Core document properties.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Mutable access to the core document properties.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Build styles from all worksheets.
    ///
    /// Returns the builder plus one position -> style index map per worksheet.
    pub fn build_styles(&self) -> (StylesBuilder, Vec<CellStyleMap>) {
        let mut builder = StylesBuilder::new();
        let style_maps: Vec<CellStyleMap> = self
            .worksheets
            .iter()
            .map(|ws| {
                ws.cell_formats()
                    .iter()
                    .map(|(pos, format)| (*pos, builder.add_cell_format(format)))
                    .collect()
            })
            .collect();

        (builder, style_maps)
    }

    /// Generate workbook.xml content.
    ///
    /// # Arguments
    /// * `worksheet_rel_ids` - relationship IDs for the worksheets, in tab order
    pub(crate) fn generate_workbook_xml(&self, worksheet_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<workbook xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str(r#"<bookViews><workbookView activeTab="0"/></bookViews>"#);

        xml.push_str("<sheets>");
        for (index, (ws, rel_id)) in self.worksheets.iter().zip(worksheet_rel_ids).enumerate() {
            write!(
                xml,
                r#"<sheet name="{}" sheetId="{}" r:id="{}"/>"#,
                escape_xml(ws.name()),
                index + 1,
                rel_id
            )?;
        }
        xml.push_str("</sheets>");
        xml.push_str("</workbook>");

        Ok(xml)
    }

    /// Assemble the OPC package for this workbook.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let (styles, style_maps) = self.build_styles();
        let mut shared_strings = MutableSharedStrings::new();
        let mut package = OpcPackage::new();

        let mut workbook_part = Part::new(
            PackURI::new("/xl/workbook.xml")?,
            ct::SML_SHEET_MAIN,
            Vec::new(),
        );
        let mut sheet_parts = Vec::with_capacity(self.worksheets.len());
        let mut sheet_rel_ids = Vec::with_capacity(self.worksheets.len());

        for (index, (ws, style_map)) in self.worksheets.iter().zip(&style_maps).enumerate() {
            let target = format!("worksheets/sheet{}.xml", index + 1);
            sheet_rel_ids.push(workbook_part.relate_to(&target, rt::WORKSHEET));

            let xml = ws.to_xml(&mut shared_strings, style_map)?;
            debug!(sheet = ws.name(), rows = ws.row_count(), "serialized worksheet");
            sheet_parts.push(Part::new(
                PackURI::new(format!("/xl/{target}"))?,
                ct::SML_WORKSHEET,
                xml.into_bytes(),
            ));
        }
        workbook_part.relate_to("styles.xml", rt::STYLES);
        workbook_part.relate_to("sharedStrings.xml", rt::SHARED_STRINGS);
        workbook_part.set_blob(self.generate_workbook_xml(&sheet_rel_ids)?.into_bytes());

        package.add_part(workbook_part);
        for part in sheet_parts {
            package.add_part(part);
        }
        package.add_part(Part::new(
            PackURI::new("/xl/styles.xml")?,
            ct::SML_STYLES,
            styles.to_xml()?.into_bytes(),
        ));
        package.add_part(Part::new(
            PackURI::new("/xl/sharedStrings.xml")?,
            ct::SML_SHARED_STRINGS,
            shared_strings.to_xml()?.into_bytes(),
        ));

        let app = ExtendedProperties::for_sheets(APPLICATION, self.worksheet_names());
        package.add_part(Part::new(
            PackURI::new("/docProps/core.xml")?,
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml().into_bytes(),
        ));
        package.add_part(Part::new(
            PackURI::new("/docProps/app.xml")?,
            ct::OFC_EXTENDED_PROPERTIES,
            app.to_xml().into_bytes(),
        ));

        package.relate_to("xl/workbook.xml", rt::OFFICE_DOCUMENT);
        package.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);
        package.relate_to("docProps/app.xml", rt::EXTENDED_PROPERTIES);

        debug!(
            cell_formats = styles.cell_format_count(),
            unique_strings = shared_strings.unique_count(),
            "assembled workbook package"
        );
        Ok(package)
    }

    /// Serialize the workbook to XLSX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Write the workbook to `path` in a single write.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote workbook");
        Ok(())
    }
}
