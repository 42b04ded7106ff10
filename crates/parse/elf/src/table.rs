//! Fixed-size record tables.
//!
//! The program header table, section header table and symbol tables are all
//! a run of fixed-size records at a known file offset. [`decode_table`]
//! checks the whole run against the buffer once, then decodes each record
//! in file order.

use alloc::vec::Vec;

use crate::error::{ElfError, Table};
use crate::ident::Endian;

/// A fixed-layout record decoded from raw bytes.
pub trait Record: Sized {
    /// On-disk size of one record in bytes.
    const SIZE: usize;

    /// Decode one record from the start of `bytes`.
    ///
    /// The caller must ensure `bytes.len() >= Self::SIZE`.
    fn decode(bytes: &[u8], endian: Endian) -> Self;
}

/// Location of a table as recorded in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLocation {
    /// File offset of the first entry.
    pub offset: u64,
    /// Number of entries.
    pub count: u16,
    /// Distance between consecutive entries.
    pub entry_size: u16,
}

/// Decode every record of a header table.
///
/// Records are returned in file order: index 0 is the first table entry.
/// Entries are read `entry_size` bytes apart, so a file may pad its entries
/// beyond [`Record::SIZE`].
///
/// # Errors
///
/// - [`ElfError::InvalidTableOffset`] if the table starts past the buffer.
/// - [`ElfError::TruncatedTable`] if `offset + count * entry_size` exceeds
///   the buffer (nothing is decoded in that case).
/// - [`ElfError::InvalidEntrySize`] if entries are smaller than the record.
pub fn decode_table<T: Record>(
    data: &[u8],
    endian: Endian,
    loc: TableLocation,
    table: Table,
) -> Result<Vec<T>, ElfError> {
    let offset = usize::try_from(loc.offset)
        .ok()
        .filter(|&off| off <= data.len())
        .ok_or(ElfError::InvalidTableOffset(table))?;

    let count = usize::from(loc.count);
    let entry_size = usize::from(loc.entry_size);
    let end = count
        .checked_mul(entry_size)
        .and_then(|len| offset.checked_add(len))
        .ok_or(ElfError::TruncatedTable(table))?;
    if end > data.len() {
        return Err(ElfError::TruncatedTable(table));
    }

    if count > 0 && entry_size < T::SIZE {
        return Err(ElfError::InvalidEntrySize(table));
    }

    Ok(data[offset..end]
        .chunks_exact(entry_size.max(1))
        .take(count)
        .map(|entry| T::decode(entry, endian))
        .collect())
}

/// Decode a packed run of records filling `bytes`.
///
/// The count is `bytes.len() / T::SIZE`; trailing bytes that do not make up
/// a whole record are ignored.
#[must_use]
pub fn decode_packed<T: Record>(bytes: &[u8], endian: Endian) -> Vec<T> {
    bytes
        .chunks_exact(T::SIZE)
        .map(|entry| T::decode(entry, endian))
        .collect()
}
