//! ELF identification block (`e_ident`) and byte-order probing.
//!
//! The first 16 bytes of every ELF file are byte-order independent. They
//! announce the class (32/64-bit) and the data encoding that every later
//! multi-byte field is stored in.

use crate::error::ElfError;

/// Size of the identification block.
pub const EI_NIDENT: usize = 16;

/// ELF magic bytes: `\x7fELF`.
pub const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Index of the class byte.
pub const EI_CLASS: usize = 4;
/// Index of the data encoding byte.
pub const EI_DATA: usize = 5;
/// Index of the identification version byte.
pub const EI_VERSION: usize = 6;
/// Index of the OS/ABI byte.
pub const EI_OSABI: usize = 7;
/// Index of the ABI version byte.
pub const EI_ABIVERSION: usize = 8;

/// ELF class: 32-bit objects.
pub const ELFCLASS32: u8 = 1;
/// ELF class: 64-bit objects.
pub const ELFCLASS64: u8 = 2;

/// Data encoding: two's complement, little-endian.
pub const ELFDATA2LSB: u8 = 1;
/// Data encoding: two's complement, big-endian.
pub const ELFDATA2MSB: u8 = 2;

/// Current ELF version.
pub const EV_CURRENT: u8 = 1;

/// OS/ABI: UNIX System V.
pub const ELFOSABI_NONE: u8 = 0;
/// OS/ABI: Linux (GNU extensions).
pub const ELFOSABI_LINUX: u8 = 3;
/// OS/ABI: FreeBSD.
pub const ELFOSABI_FREEBSD: u8 = 9;
/// OS/ABI: standalone (embedded) application.
pub const ELFOSABI_STANDALONE: u8 = 255;

/// Byte order of every multi-byte field after the identification block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// `ELFDATA2LSB`.
    Little,
    /// `ELFDATA2MSB`.
    Big,
}

impl Endian {
    /// Read a `u16` from `data` at byte offset `off`.
    ///
    /// # Panics
    ///
    /// Panics if `off + 2 > data.len()`. Callers must bounds-check first.
    #[must_use]
    pub(crate) fn read_u16(self, data: &[u8], off: usize) -> u16 {
        let mut b = [0u8; 2];
        b.copy_from_slice(&data[off..off + 2]);
        match self {
            Self::Little => u16::from_le_bytes(b),
            Self::Big => u16::from_be_bytes(b),
        }
    }

    /// Read a `u32` from `data` at byte offset `off`.
    #[must_use]
    pub(crate) fn read_u32(self, data: &[u8], off: usize) -> u32 {
        let mut b = [0u8; 4];
        b.copy_from_slice(&data[off..off + 4]);
        match self {
            Self::Little => u32::from_le_bytes(b),
            Self::Big => u32::from_be_bytes(b),
        }
    }

    /// Read a `u64` from `data` at byte offset `off`.
    #[must_use]
    pub(crate) fn read_u64(self, data: &[u8], off: usize) -> u64 {
        let mut b = [0u8; 8];
        b.copy_from_slice(&data[off..off + 8]);
        match self {
            Self::Little => u64::from_le_bytes(b),
            Self::Big => u64::from_be_bytes(b),
        }
    }

    /// Human-readable description, in the style of `readelf -h`.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Little => "2's complement, little endian",
            Self::Big => "2's complement, big endian",
        }
    }
}

/// Validated identification block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identification {
    /// Always [`ELF_MAGIC`] once validated.
    pub magic: [u8; 4],
    /// Always [`ELFCLASS64`] once validated.
    pub class: u8,
    /// `ELFDATA2LSB` or `ELFDATA2MSB`.
    pub data: u8,
    /// Identification version (normally [`EV_CURRENT`]); not validated.
    pub version: u8,
    /// Target OS/ABI; not validated.
    pub os_abi: u8,
    /// ABI version; not validated.
    pub abi_version: u8,
}

impl Identification {
    /// Probe the identification block at the start of `data`.
    ///
    /// # Errors
    ///
    /// - [`ElfError::TooShort`] if fewer than 16 bytes are present.
    /// - [`ElfError::BadMagic`] if the signature is wrong.
    /// - [`ElfError::UnsupportedClass`] unless the class is `ELFCLASS64`.
    /// - [`ElfError::UnknownByteOrder`] for an unrecognized data encoding.
    pub fn parse(data: &[u8]) -> Result<Self, ElfError> {
        if data.len() < EI_NIDENT {
            return Err(ElfError::TooShort);
        }

        let mut magic = [0u8; 4];
        magic.copy_from_slice(&data[..4]);
        if magic != ELF_MAGIC {
            return Err(ElfError::BadMagic);
        }

        let class = data[EI_CLASS];
        if class != ELFCLASS64 {
            return Err(ElfError::UnsupportedClass(class));
        }

        let encoding = data[EI_DATA];
        if encoding != ELFDATA2LSB && encoding != ELFDATA2MSB {
            return Err(ElfError::UnknownByteOrder(encoding));
        }

        Ok(Self {
            magic,
            class,
            data: encoding,
            version: data[EI_VERSION],
            os_abi: data[EI_OSABI],
            abi_version: data[EI_ABIVERSION],
        })
    }

    /// Byte order selected by the data encoding byte.
    #[must_use]
    pub fn endian(&self) -> Endian {
        if self.data == ELFDATA2MSB {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// Name of the OS/ABI byte, if known.
    #[must_use]
    pub fn os_abi_name(&self) -> Option<&'static str> {
        match self.os_abi {
            ELFOSABI_NONE => Some("UNIX - System V"),
            ELFOSABI_LINUX => Some("UNIX - GNU"),
            ELFOSABI_FREEBSD => Some("UNIX - FreeBSD"),
            ELFOSABI_STANDALONE => Some("Standalone App"),
            _ => None,
        }
    }
}
