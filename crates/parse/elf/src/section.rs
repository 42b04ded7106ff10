//! ELF64 section headers.

use alloc::string::String;

use crate::ident::Endian;
use crate::table::Record;

/// Size of an ELF64 section header entry (64 bytes).
pub const ELF64_SHDR_SIZE: usize = 64;

/// Section type: inactive entry.
pub const SHT_NULL: u32 = 0;
/// Section type: program-defined contents.
pub const SHT_PROGBITS: u32 = 1;
/// Section type: symbol table.
pub const SHT_SYMTAB: u32 = 2;
/// Section type: string table.
pub const SHT_STRTAB: u32 = 3;
/// Section type: relocation entries with addends.
pub const SHT_RELA: u32 = 4;
/// Section type: symbol hash table.
pub const SHT_HASH: u32 = 5;
/// Section type: dynamic linking information.
pub const SHT_DYNAMIC: u32 = 6;
/// Section type: notes.
pub const SHT_NOTE: u32 = 7;
/// Section type: occupies no file space (`.bss`).
pub const SHT_NOBITS: u32 = 8;
/// Section type: relocation entries without addends.
pub const SHT_REL: u32 = 9;
/// Section type: reserved.
pub const SHT_SHLIB: u32 = 10;
/// Section type: dynamic symbol table.
pub const SHT_DYNSYM: u32 = 11;
/// Section type: array of constructors.
pub const SHT_INIT_ARRAY: u32 = 14;
/// Section type: array of destructors.
pub const SHT_FINI_ARRAY: u32 = 15;
/// Section type: GNU-style hash table.
pub const SHT_GNU_HASH: u32 = 0x6fff_fff6;

/// Section flag: writable data.
pub const SHF_WRITE: u64 = 0x1;
/// Section flag: occupies memory during execution.
pub const SHF_ALLOC: u64 = 0x2;
/// Section flag: executable machine instructions.
pub const SHF_EXECINSTR: u64 = 0x4;
/// Section flag: may be merged to eliminate duplication.
pub const SHF_MERGE: u64 = 0x10;
/// Section flag: contains NUL-terminated strings.
pub const SHF_STRINGS: u64 = 0x20;
/// Section flag: `sh_info` contains a section header table index.
pub const SHF_INFO_LINK: u64 = 0x40;
/// Section flag: holds thread-local data.
pub const SHF_TLS: u64 = 0x400;

/// Special section index: undefined.
pub const SHN_UNDEF: u16 = 0;
/// Special section index: absolute values.
pub const SHN_ABS: u16 = 0xfff1;
/// Special section index: common symbols.
pub const SHN_COMMON: u16 = 0xfff2;

/// Parsed ELF64 section header entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionHeader {
    /// Offset into the section header string table for this section's name.
    pub sh_name: u32,
    /// Section type (`SHT_SYMTAB`, `SHT_STRTAB`, etc.).
    pub sh_type: u32,
    /// Section flags.
    pub sh_flags: u64,
    /// Virtual address of the section in memory (0 for non-loaded sections).
    pub sh_addr: u64,
    /// File offset of the section data.
    pub sh_offset: u64,
    /// Size of the section data in bytes.
    pub sh_size: u64,
    /// Associated section index (e.g., `.strtab` index for `.symtab`).
    pub sh_link: u32,
    /// Extra info (interpretation depends on section type).
    pub sh_info: u32,
    /// Required alignment of the section.
    pub sh_addralign: u64,
    /// Size of each entry (for sections with fixed-size entries).
    pub sh_entsize: u64,
}

impl Record for SectionHeader {
    const SIZE: usize = ELF64_SHDR_SIZE;

    fn decode(b: &[u8], endian: Endian) -> Self {
        Self {
            sh_name: endian.read_u32(b, 0),
            sh_type: endian.read_u32(b, 4),
            sh_flags: endian.read_u64(b, 8),
            sh_addr: endian.read_u64(b, 16),
            sh_offset: endian.read_u64(b, 24),
            sh_size: endian.read_u64(b, 32),
            sh_link: endian.read_u32(b, 40),
            sh_info: endian.read_u32(b, 44),
            sh_addralign: endian.read_u64(b, 48),
            sh_entsize: endian.read_u64(b, 56),
        }
    }
}

impl SectionHeader {
    /// Returns `true` for `SHT_SYMTAB` and `SHT_DYNSYM` sections.
    #[must_use]
    pub fn is_symbol_table(&self) -> bool {
        self.sh_type == SHT_SYMTAB || self.sh_type == SHT_DYNSYM
    }

    /// Flags rendered in `readelf` key letters (`W`, `A`, `X`, `M`, `S`, `I`, `T`).
    #[must_use]
    pub fn flags_string(&self) -> String {
        [
            (SHF_WRITE, 'W'),
            (SHF_ALLOC, 'A'),
            (SHF_EXECINSTR, 'X'),
            (SHF_MERGE, 'M'),
            (SHF_STRINGS, 'S'),
            (SHF_INFO_LINK, 'I'),
            (SHF_TLS, 'T'),
        ]
        .iter()
        .filter(|&&(bit, _)| self.sh_flags & bit != 0)
        .map(|&(_, c)| c)
        .collect()
    }
}

/// Name of a section type, if known.
#[must_use]
pub fn section_type_name(sh_type: u32) -> Option<&'static str> {
    Some(match sh_type {
        SHT_NULL => "NULL",
        SHT_PROGBITS => "PROGBITS",
        SHT_SYMTAB => "SYMTAB",
        SHT_STRTAB => "STRTAB",
        SHT_RELA => "RELA",
        SHT_HASH => "HASH",
        SHT_DYNAMIC => "DYNAMIC",
        SHT_NOTE => "NOTE",
        SHT_NOBITS => "NOBITS",
        SHT_REL => "REL",
        SHT_SHLIB => "SHLIB",
        SHT_DYNSYM => "DYNSYM",
        SHT_INIT_ARRAY => "INIT_ARRAY",
        SHT_FINI_ARRAY => "FINI_ARRAY",
        SHT_GNU_HASH => "GNU_HASH",
        _ => return None,
    })
}
