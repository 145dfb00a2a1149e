// Copyright 2026 elfscope contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # elfscope
//!
//! A library for inspecting and rebuilding ELF object files. This crate provides the
//! in-memory ELF model and the string-table layout engine used when an object file is
//! written back out: it computes the serialized contents of the section-name table
//! (`.shstrtab`) and the symbol-name table (`.strtab`), together with the name→offset
//! maps that downstream writer stages patch into section headers and symbol entries.
//!
//! ## Features
//!
//! - **Suffix-merged string packing** - a name that is a trailing substring of another
//!   stored name reuses the longer name's bytes, the same space optimization GNU
//!   toolchains apply to their string tables
//! - **Binary-exact offset bookkeeping** - every distinct name resolves to exactly one
//!   byte offset, cached for the lifetime of a rebuild pass
//! - **Shared-table handling** - detects binaries whose producer merged `.strtab` into
//!   `.shstrtab` (an optimization used by clang) and folds the symbol names accordingly
//! - **Memory safe** - no `unsafe`, comprehensive error handling on the read-back path
//!
//! ## Quick Start
//!
//! ```rust
//! use elfscope::prelude::*;
//!
//! let mut binary = Binary::new(Header::new(Class::Elf64, Encoding::Little));
//! binary.add_section(Section::new(".text", SectionType::ProgBits));
//! binary.add_symtab_symbol(Symbol::new("main"));
//!
//! let mut layout = Layout::new(&binary);
//! let size = layout.strtab_size();
//! assert_eq!(size, 6); // "\0main\0"
//! assert_eq!(layout.strtab_offsets()["main"], 1);
//! ```
//!
//! ## Architecture
//!
//! `elfscope` is organized into two key modules:
//!
//! - [`elf`] - the in-memory model of an ELF object: [`elf::Binary`], its sections,
//!   symbols and notes, plus the read-side [`elf::StringTable`] view
//! - [`writer`] - the rebuild pipeline slice: [`writer::Layout`] orchestrates string
//!   packing and caches the serialized tables for the surrounding writer stages
//!
//! The model is constructed by external collaborators (a parser, a linker front end);
//! this crate neither reads nor writes files itself.
//!
//! ## Diagnostics
//!
//! The layout engine emits [`tracing`] events at `DEBUG` level while computing tables.
//! With no subscriber installed these are no-ops; install one to observe which tables
//! were computed, whether the shared-table rule applied, and the resulting sizes.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use elfscope::{elf::StringTable, Error};
//!
//! match StringTable::parse(&[0x41]) {
//!     Ok(_) => unreachable!(),
//!     Err(Error::Malformed { message, .. }) => println!("bad table: {message}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
pub mod prelude;

/// The in-memory model of an ELF object file.
pub mod elf;

/// The rebuild pipeline: string-table layout and serialization.
pub mod writer;

/// The result type used throughout elfscope.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;

pub use elf::Binary;
pub use writer::Layout;
