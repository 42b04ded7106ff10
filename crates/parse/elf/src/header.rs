//! ELF64 file header parsing.
//!
//! Decodes the fixed 64-byte file header in the byte order discovered by the
//! identification probe. Field values are not validated here; the table
//! decoders bounds-check the offsets they consume.

use crate::error::ElfError;
use crate::ident::{Endian, Identification};

/// Size of an ELF64 file header (64 bytes).
pub const ELF64_EHDR_SIZE: usize = 64;

/// ELF type: no file type.
pub const ET_NONE: u16 = 0;
/// ELF type: relocatable object.
pub const ET_REL: u16 = 1;
/// ELF type: executable.
pub const ET_EXEC: u16 = 2;
/// ELF type: shared object (or PIE).
pub const ET_DYN: u16 = 3;
/// ELF type: core dump.
pub const ET_CORE: u16 = 4;

/// ELF machine: Intel 80386.
pub const EM_386: u16 = 3;
/// ELF machine: x86-64.
pub const EM_X86_64: u16 = 62;
/// ELF machine: `AArch64`.
pub const EM_AARCH64: u16 = 183;
/// ELF machine: RISC-V.
pub const EM_RISCV: u16 = 243;

/// Decoded `e_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// `ET_NONE`.
    None,
    /// `ET_REL`.
    Relocatable,
    /// `ET_EXEC`.
    Executable,
    /// `ET_DYN`.
    SharedObject,
    /// `ET_CORE`.
    Core,
    /// Any other value (OS- or processor-specific), passed through.
    Other(u16),
}

impl From<u16> for FileType {
    fn from(value: u16) -> Self {
        match value {
            ET_NONE => Self::None,
            ET_REL => Self::Relocatable,
            ET_EXEC => Self::Executable,
            ET_DYN => Self::SharedObject,
            ET_CORE => Self::Core,
            other => Self::Other(other),
        }
    }
}

impl core::fmt::Display for FileType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::None => f.write_str("NONE (No file type)"),
            Self::Relocatable => f.write_str("REL (Relocatable file)"),
            Self::Executable => f.write_str("EXEC (Executable file)"),
            Self::SharedObject => f.write_str("DYN (Shared object file)"),
            Self::Core => f.write_str("CORE (Core file)"),
            Self::Other(value) => write!(f, "<unknown>: {value:#x}"),
        }
    }
}

/// Name of an `e_machine` value, if known.
#[must_use]
pub fn machine_name(machine: u16) -> Option<&'static str> {
    match machine {
        0 => Some("None"),
        EM_386 => Some("Intel 80386"),
        EM_X86_64 => Some("Advanced Micro Devices X86-64"),
        EM_AARCH64 => Some("AArch64"),
        EM_RISCV => Some("RISC-V"),
        _ => None,
    }
}

/// Parsed ELF64 file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// The validated identification block.
    pub ident: Identification,
    /// Object file type.
    pub e_type: u16,
    /// Target machine architecture.
    pub e_machine: u16,
    /// Object file version.
    pub e_version: u32,
    /// Virtual address of the entry point.
    pub e_entry: u64,
    /// Offset of the program header table in the file.
    pub e_phoff: u64,
    /// Offset of the section header table in the file.
    pub e_shoff: u64,
    /// Processor-specific flags.
    pub e_flags: u32,
    /// Size of the file header as recorded in the file.
    pub e_ehsize: u16,
    /// Size of each program header entry.
    pub e_phentsize: u16,
    /// Number of program header entries.
    pub e_phnum: u16,
    /// Size of each section header entry.
    pub e_shentsize: u16,
    /// Number of section header entries.
    pub e_shnum: u16,
    /// Section header string table index.
    pub e_shstrndx: u16,
}

impl FileHeader {
    /// Decode the file header from `data` using the probed byte order.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::TruncatedHeader`] if `data` is shorter than a
    /// full 64-byte header.
    pub fn parse(data: &[u8], ident: Identification) -> Result<Self, ElfError> {
        if data.len() < ELF64_EHDR_SIZE {
            return Err(ElfError::TruncatedHeader);
        }

        let e = ident.endian();
        Ok(Self {
            ident,
            e_type: e.read_u16(data, 16),
            e_machine: e.read_u16(data, 18),
            e_version: e.read_u32(data, 20),
            e_entry: e.read_u64(data, 24),
            e_phoff: e.read_u64(data, 32),
            e_shoff: e.read_u64(data, 40),
            e_flags: e.read_u32(data, 48),
            e_ehsize: e.read_u16(data, 52),
            e_phentsize: e.read_u16(data, 54),
            e_phnum: e.read_u16(data, 56),
            e_shentsize: e.read_u16(data, 58),
            e_shnum: e.read_u16(data, 60),
            e_shstrndx: e.read_u16(data, 62),
        })
    }

    /// Byte order of every multi-byte field in the file.
    #[must_use]
    pub fn endian(&self) -> Endian {
        self.ident.endian()
    }

    /// Decoded object file type.
    #[must_use]
    pub fn file_type(&self) -> FileType {
        FileType::from(self.e_type)
    }
}
