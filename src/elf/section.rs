//! ELF sections and their type/flag words.

use bitflags::bitflags;
use strum::{EnumCount, EnumIter, FromRepr};

/// Section type tags (`sh_type`).
///
/// The numeric values are the `SHT_*` constants from the ELF specification, so the
/// model stays usable by writer stages that serialize section headers without
/// renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr)]
#[repr(u32)]
pub enum SectionType {
    /// Inactive section header (`SHT_NULL`).
    Null = 0,
    /// Program-defined contents (`SHT_PROGBITS`).
    ProgBits = 1,
    /// Symbol table (`SHT_SYMTAB`).
    SymTab = 2,
    /// String table (`SHT_STRTAB`).
    StrTab = 3,
    /// Relocations with explicit addends (`SHT_RELA`).
    Rela = 4,
    /// Symbol hash table (`SHT_HASH`).
    Hash = 5,
    /// Dynamic linking information (`SHT_DYNAMIC`).
    Dynamic = 6,
    /// Vendor or system notes (`SHT_NOTE`).
    Note = 7,
    /// Zero-initialized data occupying no file space (`SHT_NOBITS`).
    NoBits = 8,
    /// Relocations without addends (`SHT_REL`).
    Rel = 9,
    /// Reserved (`SHT_SHLIB`).
    ShLib = 10,
    /// Dynamic linker symbol table (`SHT_DYNSYM`).
    DynSym = 11,
    /// Array of constructors (`SHT_INIT_ARRAY`).
    InitArray = 14,
    /// Array of destructors (`SHT_FINI_ARRAY`).
    FiniArray = 15,
    /// Array of pre-constructors (`SHT_PREINIT_ARRAY`).
    PreInitArray = 16,
    /// Section group (`SHT_GROUP`).
    Group = 17,
    /// Extended section indices (`SHT_SYMTAB_SHNDX`).
    SymTabShndx = 18,
}

bitflags! {
    /// Section attribute flags (`sh_flags`), the `SHF_*` bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SectionFlags: u64 {
        /// Writable during execution (`SHF_WRITE`).
        const WRITE = 0x1;
        /// Occupies memory at run time (`SHF_ALLOC`).
        const ALLOC = 0x2;
        /// Contains executable instructions (`SHF_EXECINSTR`).
        const EXECINSTR = 0x4;
        /// May be merged to eliminate duplicates (`SHF_MERGE`).
        const MERGE = 0x10;
        /// Contains NUL-terminated strings (`SHF_STRINGS`).
        const STRINGS = 0x20;
        /// `sh_info` holds a section index (`SHF_INFO_LINK`).
        const INFO_LINK = 0x40;
        /// Ordering requirement on link output (`SHF_LINK_ORDER`).
        const LINK_ORDER = 0x80;
        /// Member of a section group (`SHF_GROUP`).
        const GROUP = 0x200;
        /// Holds thread-local storage (`SHF_TLS`).
        const TLS = 0x400;
    }
}

/// One section of the object, as read by the rebuild pipeline.
///
/// The `link` field mirrors `sh_link`: a symbol table's link points at the section
/// holding its symbol names. Index 0 is reserved by convention and means "no link".
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    section_type: SectionType,
    flags: SectionFlags,
    link: usize,
    addralign: u64,
    content: Vec<u8>,
}

impl Section {
    /// Creates a section with no flags, no link and empty content.
    pub fn new(name: impl Into<String>, section_type: SectionType) -> Self {
        Section {
            name: name.into(),
            section_type,
            flags: SectionFlags::empty(),
            link: 0,
            addralign: 1,
            content: Vec::new(),
        }
    }

    /// Sets the `sh_link` index.
    #[must_use]
    pub fn with_link(mut self, link: usize) -> Self {
        self.link = link;
        self
    }

    /// Sets the attribute flags.
    #[must_use]
    pub fn with_flags(mut self, flags: SectionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the alignment constraint (`sh_addralign`).
    #[must_use]
    pub fn with_addralign(mut self, addralign: u64) -> Self {
        self.addralign = addralign;
        self
    }

    /// Sets the section content bytes.
    #[must_use]
    pub fn with_content(mut self, content: Vec<u8>) -> Self {
        self.content = content;
        self
    }

    /// The section name, e.g. `.text`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section type tag.
    pub fn section_type(&self) -> SectionType {
        self.section_type
    }

    /// The attribute flags.
    pub fn flags(&self) -> SectionFlags {
        self.flags
    }

    /// The `sh_link` index into the section list, 0 when unlinked.
    pub fn link(&self) -> usize {
        self.link
    }

    /// The alignment constraint.
    pub fn addralign(&self) -> u64 {
        self.addralign
    }

    /// The raw content bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}
