//! Decoder error kinds.

use core::fmt;

/// Which header table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The program header (segment) table.
    Program,
    /// The section header table.
    Section,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program => f.write_str("program header table"),
            Self::Section => f.write_str("section header table"),
        }
    }
}

/// Errors that can occur when decoding an ELF64 file.
///
/// Decoding is deterministic over its input, so every error is terminal:
/// retrying on the same bytes always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfError {
    /// Fewer than 16 bytes, not enough for the identification block.
    TooShort,
    /// The file does not start with `\x7fELF`.
    BadMagic,
    /// The class byte is not `ELFCLASS64` (32-bit files are rejected).
    UnsupportedClass(u8),
    /// The data encoding byte is neither `ELFDATA2LSB` nor `ELFDATA2MSB`.
    UnknownByteOrder(u8),
    /// Fewer bytes than a full ELF64 file header.
    TruncatedHeader,
    /// A table starts past the end of the buffer.
    InvalidTableOffset(Table),
    /// A table starts inside the buffer but extends past its end.
    TruncatedTable(Table),
    /// A table's entry size is smaller than the record it must hold.
    InvalidEntrySize(Table),
    /// A program header index is not less than the segment count.
    InvalidSegmentIndex(usize),
    /// A section header index is not less than the section count.
    InvalidSectionIndex(usize),
    /// A segment's file range lies outside the buffer.
    SegmentOutOfBounds(usize),
    /// A section's file range lies outside the buffer.
    SectionOutOfBounds(usize),
    /// A string-table offset, or the terminator it leads to, lies outside the table.
    NameOutOfBounds(u32),
    /// The section is neither `SHT_SYMTAB` nor `SHT_DYNSYM`.
    NotASymbolTable(usize),
}

impl fmt::Display for ElfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "input too short for ELF identification"),
            Self::BadMagic => write!(f, "invalid ELF magic bytes"),
            Self::UnsupportedClass(class) => {
                write!(f, "unsupported ELF class {class} (expected ELFCLASS64)")
            }
            Self::UnknownByteOrder(data) => write!(f, "unknown data encoding {data}"),
            Self::TruncatedHeader => write!(f, "ELF file header truncated"),
            Self::InvalidTableOffset(table) => write!(f, "{table} offset past end of file"),
            Self::TruncatedTable(table) => write!(f, "{table} truncated"),
            Self::InvalidEntrySize(table) => write!(f, "{table} entry size too small"),
            Self::InvalidSegmentIndex(index) => write!(f, "no program header at index {index}"),
            Self::InvalidSectionIndex(index) => write!(f, "no section header at index {index}"),
            Self::SegmentOutOfBounds(index) => {
                write!(f, "segment {index} extends past end of file")
            }
            Self::SectionOutOfBounds(index) => {
                write!(f, "section {index} extends past end of file")
            }
            Self::NameOutOfBounds(offset) => {
                write!(f, "string at offset {offset} runs past its string table")
            }
            Self::NotASymbolTable(index) => write!(f, "section {index} is not a symbol table"),
        }
    }
}

impl core::error::Error for ElfError {}
