//! # elfscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! elfscope library. Import it to get quick access to the model and the layout engine.
//!
//! # Example
//!
//! ```rust
//! use elfscope::prelude::*;
//!
//! let binary = Binary::new(Header::new(Class::Elf64, Encoding::Little));
//! let mut layout = Layout::new(&binary);
//! assert_eq!(layout.strtab_size(), 0);
//! ```

/// The main error type for all elfscope operations
pub use crate::Error;

/// The result type used throughout elfscope
pub use crate::Result;

/// The in-memory ELF model
pub use crate::elf::{Binary, Class, Encoding, Header, Note, Section, SectionFlags, SectionType};

/// Symbol table entries and their tags
pub use crate::elf::{Symbol, SymbolBinding, SymbolKind};

/// Read-side view over serialized string-table bytes
pub use crate::elf::StringTable;

/// The string-table layout engine
pub use crate::writer::Layout;
