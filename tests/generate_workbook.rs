//! Reads a generated workbook back from disk and checks its contents.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::Path;

use memchr::memmem;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tpe_schema_sheet::common::xml::unescape_xml;
use tpe_schema_sheet::schema::{ENTITIES, Section};
use tpe_schema_sheet::{DEFAULT_OUTPUT_FILE, Error, generate};

/// One `<c>` element of a worksheet.
#[derive(Debug, Default, Clone)]
struct RawCell {
    kind: Option<String>,
    style: Option<usize>,
    value: Option<String>,
}

struct Workbook {
    bytes: Vec<u8>,
}

impl Workbook {
    fn open(path: &Path) -> Self {
        Self {
            bytes: std::fs::read(path).unwrap(),
        }
    }

    fn part(&self, name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(&self.bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn sheet_names(&self) -> Vec<String> {
        let xml = self.part("xl/workbook.xml");
        let mut reader = Reader::from_str(&xml);
        let mut names = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"sheet" => {
                    names.push(attribute(&e, b"name").unwrap());
                },
                Event::Eof => break,
                _ => {},
            }
        }
        names
    }

    fn shared_strings(&self) -> Vec<String> {
        let xml = self.part("xl/sharedStrings.xml");
        let bytes = xml.as_bytes();
        memmem::find_iter(bytes, b"<si>")
            .map(|start| {
                let item = &xml[start..];
                let end = item.find("</si>").unwrap();
                let item = &item[..end];
                let open = item.find("<t").unwrap();
                let text_start = open + item[open..].find('>').unwrap() + 1;
                let text_end = item.find("</t>").unwrap();
                unescape_xml(&item[text_start..text_end]).into_owned()
            })
            .collect()
    }

    fn cells(&self, sheet_index: usize) -> BTreeMap<String, RawCell> {
        let xml = self.part(&format!("xl/worksheets/sheet{}.xml", sheet_index + 1));
        let mut reader = Reader::from_str(&xml);
        let mut cells = BTreeMap::new();
        let mut current: Option<(String, RawCell)> = None;
        let mut in_value = false;

        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"c" => {
                    current = Some(read_cell_start(&e));
                },
                Event::Empty(e) if e.name().as_ref() == b"c" => {
                    let (reference, cell) = read_cell_start(&e);
                    cells.insert(reference, cell);
                },
                Event::Start(e) if e.name().as_ref() == b"v" => in_value = true,
                Event::Text(t) if in_value => {
                    if let Some((_, cell)) = current.as_mut() {
                        cell.value = Some(String::from_utf8_lossy(&t).into_owned());
                    }
                },
                Event::End(e) if e.name().as_ref() == b"v" => in_value = false,
                Event::End(e) if e.name().as_ref() == b"c" => {
                    if let Some((reference, cell)) = current.take() {
                        cells.insert(reference, cell);
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }
        cells
    }

    /// Resolved text of a string cell.
    fn text(&self, sheet_index: usize, reference: &str) -> Option<String> {
        let strings = self.shared_strings();
        let cells = self.cells(sheet_index);
        let cell = cells.get(reference)?;
        if cell.kind.as_deref() != Some("s") {
            return None;
        }
        let index: usize = cell.value.as_ref()?.parse().ok()?;
        strings.get(index).cloned()
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| attr.unescape_value().unwrap().into_owned())
}

fn read_cell_start(e: &BytesStart<'_>) -> (String, RawCell) {
    let reference = attribute(e, b"r").unwrap();
    let cell = RawCell {
        kind: attribute(e, b"t"),
        style: attribute(e, b"s").map(|s| s.parse().unwrap()),
        value: None,
    };
    (reference, cell)
}

fn row_number(reference: &str) -> u32 {
    reference
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .unwrap()
}

fn generated() -> (tempfile::TempDir, Workbook) {
    let dir = tempfile::tempdir().unwrap();
    let path = generate(dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap();
    let workbook = Workbook::open(&path);
    (dir, workbook)
}

#[test]
fn sheets_are_in_tab_order() {
    let (_dir, workbook) = generated();
    assert_eq!(
        workbook.sheet_names(),
        ["Summary", "Books", "Podcasts", "Events", "Strategic Partners"]
    );

    let content_types = workbook.part("[Content_Types].xml");
    for n in 1..=5 {
        assert!(content_types.contains(&format!("/xl/worksheets/sheet{n}.xml")));
    }
}

#[test]
fn summary_heading_and_counts() {
    let (_dir, workbook) = generated();
    assert_eq!(
        workbook.text(0, "A1").as_deref(),
        Some("TPE Matching Entities - Database Schema Summary")
    );
    assert_eq!(workbook.text(0, "D4").as_deref(), Some("Missing Fields"));

    let cells = workbook.cells(0);
    for (row, entity) in (5..).zip(ENTITIES) {
        assert_eq!(workbook.text(0, &format!("A{row}")).as_deref(), Some(entity.title));
        for (column, section) in ["B", "C", "D"].into_iter().zip(Section::ALL) {
            let cell = &cells[&format!("{column}{row}")];
            assert_eq!(cell.kind, None, "counts are numeric");
            assert_eq!(
                cell.value.as_deref(),
                Some(entity.count(section).to_string().as_str())
            );
        }
    }

    let footer = workbook.text(0, "A22").unwrap();
    assert!(footer.starts_with("Generated: "));
    assert_eq!(footer.len(), "Generated: 2026-01-01 00:00".len());
}

#[test]
fn books_sheet_rows() {
    let (_dir, workbook) = generated();
    let cells = workbook.cells(1);

    let populated_rows: std::collections::BTreeSet<u32> = cells
        .iter()
        .filter(|(_, cell)| cell.value.is_some())
        .map(|(reference, _)| row_number(reference))
        .collect();
    // title, header, three banners, 11 + 4 + 11 fields
    assert_eq!(populated_rows.len(), 31);
    assert_eq!(populated_rows.last(), Some(&35));

    assert_eq!(workbook.text(1, "A35").as_deref(), Some("average_rating"));
    assert_eq!(workbook.text(1, "D6").as_deref(), Some("✓ Exists"));

    let sheet = workbook.part("xl/worksheets/sheet2.xml");
    for range in ["A1:E1", "A5:E5", "A18:E18", "A24:E24"] {
        assert!(sheet.contains(&format!(r#"<mergeCell ref="{range}"/>"#)));
    }
    assert!(sheet.contains(r#"<col min="3" max="3" width="35" customWidth="1"/>"#));
}

#[test]
fn every_entity_sheet_ends_after_its_fields() {
    let (_dir, workbook) = generated();
    for (index, entity) in (1..).zip(ENTITIES) {
        let last_row = workbook
            .cells(index)
            .iter()
            .filter(|(_, cell)| cell.value.is_some())
            .map(|(reference, _)| row_number(reference))
            .max()
            .unwrap();
        let expected = 5 + 3 + entity.total_fields() as u32 + 2 - 1;
        assert_eq!(last_row, expected, "{}", entity.title);
    }
}

#[test]
fn shared_strings_and_styles_are_deduplicated() {
    let (_dir, workbook) = generated();
    let strings = workbook.shared_strings();
    let unique: std::collections::HashSet<&String> = strings.iter().collect();
    assert_eq!(unique.len(), strings.len());
    assert_eq!(strings.iter().filter(|s| *s == "❌ Missing").count(), 1);

    let sst = workbook.part("xl/sharedStrings.xml");
    assert!(sst.contains(&format!(r#"uniqueCount="{}""#, strings.len())));

    // default, three titles, two headers, three banners, body, bold body
    let styles = workbook.part("xl/styles.xml");
    assert!(styles.contains(r#"<cellXfs count="11">"#));
    assert!(styles.contains(r#"<fgColor rgb="FF70AD47"/>"#));

    // banner cells carry a style; the merged-over cells do not exist
    let cells = workbook.cells(1);
    assert!(cells["A5"].style.is_some());
    assert!(!cells.contains_key("B5"));
}

#[test]
fn unwritable_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join(DEFAULT_OUTPUT_FILE);

    let result = generate(&path);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!path.exists());
}
