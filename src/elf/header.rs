//! ELF header identification fields.
//!
//! Only the small slice of the ELF header that the rebuild pipeline consumes is modeled
//! here: the file class, the data encoding and the declared section-name-table index
//! (`e_shstrndx`).

/// Machine word width of an ELF object (`EI_CLASS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// 32-bit object (`ELFCLASS32`).
    Elf32,
    /// 64-bit object (`ELFCLASS64`).
    Elf64,
}

/// Byte order of the object's data (`EI_DATA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Two's complement little-endian (`ELFDATA2LSB`).
    Little,
    /// Two's complement big-endian (`ELFDATA2MSB`).
    Big,
}

/// The ELF header fields consumed during a rebuild.
///
/// By ELF convention section index 0 is reserved, so a section-name-table index of 0
/// means "not declared".
#[derive(Debug, Clone)]
pub struct Header {
    class: Class,
    encoding: Encoding,
    section_name_table_index: usize,
}

impl Header {
    /// Creates a header with no declared section-name-table section.
    pub fn new(class: Class, encoding: Encoding) -> Self {
        Header {
            class,
            encoding,
            section_name_table_index: 0,
        }
    }

    /// The file class (`EI_CLASS`).
    pub fn class(&self) -> Class {
        self.class
    }

    /// The data encoding (`EI_DATA`).
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Index of the section holding section names (`e_shstrndx`), 0 if not declared.
    pub fn section_name_table_index(&self) -> usize {
        self.section_name_table_index
    }

    /// Declares which section holds the section names.
    pub fn set_section_name_table_index(&mut self, index: usize) {
        self.section_name_table_index = index;
    }
}
