//! String table name resolution.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::error::ElfError;

/// A zero-copy wrapper around the content of a string table section.
///
/// The content is a run of NUL-terminated strings referenced by byte
/// offset. Offset 0 is the reserved "no name" entry.
#[derive(Debug, Clone, Copy)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Creates a new string table from the raw section content.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Returns the raw bytes of the NUL-terminated string at `offset`,
    /// without the terminator.
    ///
    /// Offset 0 always yields an empty name, whatever the table holds.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::NameOutOfBounds`] if `offset` lies outside the
    /// table or no NUL byte follows it before the end of the table.
    pub fn get_bytes(&self, offset: u32) -> Result<&'a [u8], ElfError> {
        if offset == 0 {
            return Ok(&[]);
        }

        let start = offset as usize;
        let mut end = start;
        loop {
            match self.data.get(end) {
                Some(0) => break,
                Some(_) => end += 1,
                None => return Err(ElfError::NameOutOfBounds(offset)),
            }
        }
        Ok(&self.data[start..end])
    }

    /// Looks up the name at `offset`, replacing invalid UTF-8 sequences.
    ///
    /// # Errors
    ///
    /// Same as [`get_bytes`](Self::get_bytes).
    pub fn get(&self, offset: u32) -> Result<Cow<'a, str>, ElfError> {
        self.get_bytes(offset).map(String::from_utf8_lossy)
    }

    /// Size of the table content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the table has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
