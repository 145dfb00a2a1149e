//! The rebuild pipeline slice: computing what the output file will contain.
//!
//! Writing an ELF object back out happens in stages, and every stage that references a
//! name by offset needs the string tables finalized first. This module owns that step:
//! [`Layout`] computes and caches the serialized `.shstrtab`/`.strtab` contents and the
//! name→offset maps the later stages patch into section headers and symbol entries.

pub mod layout;

pub use layout::Layout;
