/// In-memory OPC package.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package being assembled for writing.
///
/// Parts keep insertion order, which is also their order in the ZIP archive.
#[derive(Debug, Default)]
pub struct OpcPackage {
    /// Package-level relationships (`_rels/.rels`)
    rels: Relationships,
    /// Parts in insertion order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part, replacing any existing part with the same partname.
    pub fn add_part(&mut self, part: Part) {
        match self
            .parts
            .iter_mut()
            .find(|existing| existing.partname() == part.partname())
        {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
    }

    /// Add a package-level relationship, returning its rId.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.relate_to(target_ref, reltype)
    }

    /// Get a part by partname.
    pub fn part(&self, partname: &PackURI) -> Option<&Part> {
        self.parts.iter().find(|part| part.partname() == partname)
    }

    /// Package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Number of parts.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}
