//! String-table layout for one rebuild pass.
//!
//! [`Layout`] gathers every name the output file must be able to reference — section
//! names, names reserved for sections the writer will synthesize, note section names,
//! symbol names — packs them with suffix merging, and caches the serialized blobs plus
//! the name→offset maps. Downstream writer stages query sizes first (to place the
//! section header table), then the raw bytes and offsets; all of those queries must
//! agree byte for byte, which is why each table is computed exactly once per pass.
//!
//! Some producers (clang among them) emit a single section serving as both `.strtab`
//! and `.shstrtab`. [`Layout::is_strtab_shared`] detects that configuration; when it
//! holds, the symbol names are folded into the section-name table and the standalone
//! `.strtab` stays empty.

mod strings;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::elf::{Binary, Section, SectionType, Symbol};

/// Computes and caches the string tables for one rebuild of one [`Binary`].
///
/// A `Layout` borrows its binary for the whole pass; the model must not change
/// underneath it, and the borrow checker enforces exactly that. Each table moves from
/// empty to computed at most once — there is no invalidation, a fresh pass gets a
/// fresh `Layout`.
///
/// # Examples
///
/// ```rust
/// use elfscope::prelude::*;
///
/// let mut binary = Binary::new(Header::new(Class::Elf64, Encoding::Little));
/// binary.add_section(Section::new(".text", SectionType::ProgBits));
/// binary.add_symtab_symbol(Symbol::new("main"));
///
/// let mut layout = Layout::new(&binary);
/// assert_eq!(layout.strtab_size(), 6); // "\0main\0"
/// assert_eq!(layout.raw_strtab(), b"\0main\0");
/// ```
pub struct Layout<'a> {
    binary: &'a Binary,

    shstrtab_offsets: HashMap<String, usize>,
    strtab_offsets: HashMap<String, usize>,

    raw_shstrtab: Vec<u8>,
    raw_strtab: Vec<u8>,

    strtab_section: Option<&'a Section>,
    dynsym_index: Option<usize>,
}

impl<'a> Layout<'a> {
    /// Binds a new layout to `binary` with both table caches empty.
    pub fn new(binary: &'a Binary) -> Self {
        Layout {
            binary,
            shstrtab_offsets: HashMap::new(),
            strtab_offsets: HashMap::new(),
            raw_shstrtab: Vec::new(),
            raw_strtab: Vec::new(),
            strtab_section: None,
            dynsym_index: None,
        }
    }

    /// Whether the symbol-name table is physically merged into the section-name table.
    ///
    /// True iff the `SHT_SYMTAB` section's link index and the header's declared
    /// section-name-table index are both valid — strictly greater than 0 (index 0 is
    /// reserved) and less than the section count — and equal.
    pub fn is_strtab_shared(&self) -> bool {
        let Some(symtab) = self.binary.section_by_type(SectionType::SymTab) else {
            return false;
        };

        let strtab_index = symtab.link();
        let shstrtab_index = self.binary.header().section_name_table_index();
        let section_count = self.binary.sections().len();

        strtab_index > 0
            && shstrtab_index > 0
            && strtab_index < section_count
            && shstrtab_index < section_count
            && strtab_index == shstrtab_index
    }

    /// Byte size of the serialized `.strtab`, computing and caching it on first call.
    ///
    /// Returns 0 when the table is shared with `.shstrtab` (its content then lives in
    /// [`Layout::raw_shstrtab`]) and when there are no symbols to name.
    pub fn strtab_size(&mut self) -> usize {
        if !self.raw_strtab.is_empty() {
            return self.raw_strtab.len();
        }

        if self.is_strtab_shared() {
            trace!("symbol names are folded into .shstrtab, .strtab stays empty");
            return 0;
        }

        let binary = self.binary;
        if binary.symtab_symbols().is_empty() {
            return 0;
        }

        let mut raw = vec![0u8];
        let packed = strings::pack_names(
            binary.symtab_symbols().iter().map(Symbol::name),
            raw.len(),
            &mut self.strtab_offsets,
        );
        for name in &packed.retained {
            raw.extend_from_slice(name.as_bytes());
            raw.push(0);
        }
        debug_assert_eq!(raw.len(), packed.next_offset);

        debug!(size = raw.len(), "computed .strtab layout");
        self.raw_strtab = raw;
        self.raw_strtab.len()
    }

    /// Byte size of the serialized `.shstrtab`, computing and caching it on first call.
    ///
    /// The candidate names are every current section name in section order, the
    /// `.symtab`/`.strtab` literals when symbols exist but no section of that name
    /// does yet, and each note's declared section name that is not already a section.
    /// When the tables are shared, the symbol names are appended to the same blob,
    /// continuing the same offsets.
    pub fn shstrtab_size(&mut self) -> usize {
        if !self.raw_shstrtab.is_empty() {
            return self.raw_shstrtab.len();
        }

        let binary = self.binary;
        let mut candidates: Vec<&str> = binary.sections().iter().map(Section::name).collect();

        if !binary.symtab_symbols().is_empty() {
            for reserved in [".symtab", ".strtab"] {
                if binary.section_by_name(reserved).is_none() {
                    trace!(name = reserved, "reserving name for synthesized section");
                    candidates.push(reserved);
                }
            }
        }

        for note in binary.notes() {
            let Some(name) = note.section_name() else {
                continue;
            };
            if !name.is_empty() && binary.section_by_name(name).is_none() {
                trace!(name, "reserving name for note section");
                candidates.push(name);
            }
        }

        let mut raw = vec![0u8];
        let packed = strings::pack_names(candidates, raw.len(), &mut self.shstrtab_offsets);
        for name in &packed.retained {
            raw.extend_from_slice(name.as_bytes());
            raw.push(0);
        }
        debug_assert_eq!(raw.len(), packed.next_offset);

        if !binary.symtab_symbols().is_empty() && self.is_strtab_shared() {
            debug!("shared string table, merging symbol names into .shstrtab");
            let merged = strings::pack_names(
                binary.symtab_symbols().iter().map(Symbol::name),
                packed.next_offset,
                &mut self.shstrtab_offsets,
            );
            for name in &merged.retained {
                raw.extend_from_slice(name.as_bytes());
                raw.push(0);
            }
            debug_assert_eq!(raw.len(), merged.next_offset);
        }

        debug!(size = raw.len(), "computed .shstrtab layout");
        self.raw_shstrtab = raw;
        self.raw_shstrtab.len()
    }

    /// The serialized `.strtab` bytes, empty until the first [`Layout::strtab_size`]
    /// call.
    pub fn raw_strtab(&self) -> &[u8] {
        &self.raw_strtab
    }

    /// The serialized `.shstrtab` bytes, empty until the first
    /// [`Layout::shstrtab_size`] call.
    pub fn raw_shstrtab(&self) -> &[u8] {
        &self.raw_shstrtab
    }

    /// Offsets of the symbol names within their string table.
    ///
    /// When the tables are shared the symbol names live in `.shstrtab`, and this
    /// returns that map, so symbol-patching stages can consult one place either way.
    pub fn strtab_offsets(&self) -> &HashMap<String, usize> {
        if self.is_strtab_shared() {
            &self.shstrtab_offsets
        } else {
            &self.strtab_offsets
        }
    }

    /// Offsets of the section names within `.shstrtab`.
    pub fn shstrtab_offsets(&self) -> &HashMap<String, usize> {
        &self.shstrtab_offsets
    }

    /// Designates the section whose content the writer will fill with
    /// [`Layout::raw_strtab`].
    pub fn set_strtab_section(&mut self, section: &'a Section) {
        self.strtab_section = Some(section);
    }

    /// The designated string-table section, if one was bound.
    pub fn strtab_section(&self) -> Option<&'a Section> {
        self.strtab_section
    }

    /// Overrides the first non-local symbol index recorded for the dynamic symbol
    /// table; consumed by later writer stages.
    pub fn set_dynsym_index(&mut self, index: usize) {
        self.dynsym_index = Some(index);
    }

    /// The dynamic-symbol-index override, if one was set.
    pub fn dynsym_index(&self) -> Option<usize> {
        self.dynsym_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elf::{Class, Encoding, Header};

    fn binary_with_sections(sections: Vec<Section>) -> Binary {
        let mut binary = Binary::new(Header::new(Class::Elf64, Encoding::Little));
        for section in sections {
            binary.add_section(section);
        }
        binary
    }

    #[test]
    fn not_shared_without_symtab_section() {
        let binary = binary_with_sections(vec![Section::new(".text", SectionType::ProgBits)]);
        let layout = Layout::new(&binary);
        assert!(!layout.is_strtab_shared());
    }

    #[test]
    fn not_shared_when_either_index_is_reserved() {
        // link 0 on the symtab
        let mut binary = binary_with_sections(vec![
            Section::new("", SectionType::Null),
            Section::new(".symtab", SectionType::SymTab),
            Section::new(".shstrtab", SectionType::StrTab),
        ]);
        binary.set_section_name_table_index(2);
        assert!(!Layout::new(&binary).is_strtab_shared());

        // declared shstrndx 0
        let binary = binary_with_sections(vec![
            Section::new("", SectionType::Null),
            Section::new(".symtab", SectionType::SymTab).with_link(2),
            Section::new(".shstrtab", SectionType::StrTab),
        ]);
        assert!(!Layout::new(&binary).is_strtab_shared());
    }

    #[test]
    fn not_shared_when_index_out_of_range() {
        let mut binary = binary_with_sections(vec![
            Section::new("", SectionType::Null),
            Section::new(".symtab", SectionType::SymTab).with_link(7),
        ]);
        binary.set_section_name_table_index(7);
        assert!(!Layout::new(&binary).is_strtab_shared());
    }

    #[test]
    fn shared_when_indices_agree() {
        let mut binary = binary_with_sections(vec![
            Section::new("", SectionType::Null),
            Section::new(".symtab", SectionType::SymTab).with_link(2),
            Section::new(".shstrtab", SectionType::StrTab),
        ]);
        binary.set_section_name_table_index(2);
        assert!(Layout::new(&binary).is_strtab_shared());
    }

    #[test]
    fn strtab_empty_without_symbols() {
        let binary = binary_with_sections(vec![Section::new(".text", SectionType::ProgBits)]);
        let mut layout = Layout::new(&binary);
        assert_eq!(layout.strtab_size(), 0);
        assert!(layout.raw_strtab().is_empty());
        assert!(layout.strtab_offsets().is_empty());
    }

    #[test]
    fn binding_setters_hold_state() {
        let binary = binary_with_sections(vec![Section::new(".strtab", SectionType::StrTab)]);
        let mut layout = Layout::new(&binary);
        assert!(layout.strtab_section().is_none());
        assert!(layout.dynsym_index().is_none());

        layout.set_strtab_section(&binary.sections()[0]);
        layout.set_dynsym_index(3);
        assert_eq!(layout.strtab_section().map(Section::name), Some(".strtab"));
        assert_eq!(layout.dynsym_index(), Some(3));
    }
}
