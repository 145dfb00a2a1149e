//! Read-side view over serialized string-table bytes.
//!
//! The writer produces string tables as raw blobs; this view goes the other way and
//! resolves a byte offset back to the NUL-terminated name stored there, the lookup the
//! ELF format itself performs for `sh_name` and `st_name` fields.

use std::ffi::CStr;

use crate::{Error, Error::OutOfBounds, Result};

/// A parsed string-table blob.
///
/// By ELF convention every string table starts with a NUL byte, so offset 0 always
/// resolves to the empty string.
///
/// # Examples
///
/// ```rust
/// use elfscope::elf::StringTable;
/// let data = &[0u8, b'm', b'a', b'i', b'n', 0u8];
/// let strtab = StringTable::parse(data).unwrap();
/// assert_eq!(strtab.get(1).unwrap(), "main");
/// assert_eq!(strtab.get(0).unwrap(), "");
/// ```
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Creates a `StringTable` view over a serialized blob.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] for an empty buffer and [`Error::Malformed`] when the
    /// mandatory leading NUL byte is missing.
    pub fn parse(data: &'a [u8]) -> Result<StringTable<'a>> {
        if data.is_empty() {
            return Err(Error::Empty);
        }
        if data[0] != 0 {
            return Err(malformed_error!("string table does not start with a NUL byte"));
        }

        Ok(StringTable { data })
    }

    /// Resolves the NUL-terminated string stored at `offset`.
    ///
    /// Offsets may point into the middle of a longer name; suffix-merged tables rely
    /// on exactly that.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] when `offset` is past the end of the blob, and
    /// [`Error::Malformed`] when the tail is unterminated or not valid UTF-8.
    pub fn get(&self, offset: usize) -> Result<&'a str> {
        if offset >= self.data.len() {
            return Err(OutOfBounds);
        }

        match CStr::from_bytes_until_nul(&self.data[offset..]) {
            Ok(raw) => raw
                .to_str()
                .map_err(|_| malformed_error!("invalid string at offset - {}", offset)),
            Err(_) => Err(malformed_error!("unterminated string at offset - {}", offset)),
        }
    }

    /// The underlying blob.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
