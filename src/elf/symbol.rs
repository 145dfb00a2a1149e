//! Symbol table entries.

use strum::FromRepr;

/// Symbol binding (`STB_*`, the high nibble of `st_info`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRepr)]
#[repr(u8)]
pub enum SymbolBinding {
    /// Not visible outside the object (`STB_LOCAL`).
    #[default]
    Local = 0,
    /// Visible to all objects being combined (`STB_GLOBAL`).
    Global = 1,
    /// Global with lower precedence (`STB_WEAK`).
    Weak = 2,
}

/// Symbol kind (`STT_*`, the low nibble of `st_info`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRepr)]
#[repr(u8)]
pub enum SymbolKind {
    /// Unspecified (`STT_NOTYPE`).
    #[default]
    NoType = 0,
    /// Data object (`STT_OBJECT`).
    Object = 1,
    /// Function or other executable code (`STT_FUNC`).
    Func = 2,
    /// Associated with a section (`STT_SECTION`).
    Section = 3,
    /// Source file name (`STT_FILE`).
    File = 4,
    /// Uninitialized common block (`STT_COMMON`).
    Common = 5,
    /// Thread-local storage entity (`STT_TLS`).
    Tls = 6,
}

/// One `.symtab` entry.
///
/// Only the name participates in string-table layout; the remaining fields exist so
/// the model round-trips through the surrounding writer stages.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: String,
    value: u64,
    size: u64,
    binding: SymbolBinding,
    kind: SymbolKind,
    section_index: usize,
}

impl Symbol {
    /// Creates a local, untyped symbol with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            value: 0,
            size: 0,
            binding: SymbolBinding::default(),
            kind: SymbolKind::default(),
            section_index: 0,
        }
    }

    /// Sets the symbol value (`st_value`).
    #[must_use]
    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }

    /// Sets the symbol size (`st_size`).
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Sets the binding.
    #[must_use]
    pub fn with_binding(mut self, binding: SymbolBinding) -> Self {
        self.binding = binding;
        self
    }

    /// Sets the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: SymbolKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the index of the section this symbol is defined in (`st_shndx`).
    #[must_use]
    pub fn with_section_index(mut self, index: usize) -> Self {
        self.section_index = index;
        self
    }

    /// The symbol name. Empty for the reserved null symbol and section symbols.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol value (`st_value`).
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The symbol size (`st_size`).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The binding.
    pub fn binding(&self) -> SymbolBinding {
        self.binding
    }

    /// The kind.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// The defining section index (`st_shndx`).
    pub fn section_index(&self) -> usize {
        self.section_index
    }
}
