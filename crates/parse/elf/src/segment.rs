//! ELF64 program headers (segments).

use alloc::string::String;

use crate::ident::Endian;
use crate::table::Record;

/// Size of an ELF64 program header entry (56 bytes).
pub const ELF64_PHDR_SIZE: usize = 56;

/// Program header type: unused entry.
pub const PT_NULL: u32 = 0;
/// Program header type: loadable segment.
pub const PT_LOAD: u32 = 1;
/// Program header type: dynamic linking information.
pub const PT_DYNAMIC: u32 = 2;
/// Program header type: interpreter path.
pub const PT_INTERP: u32 = 3;
/// Program header type: auxiliary information.
pub const PT_NOTE: u32 = 4;
/// Program header type: reserved.
pub const PT_SHLIB: u32 = 5;
/// Program header type: the program header table itself.
pub const PT_PHDR: u32 = 6;
/// Program header type: thread-local storage template.
pub const PT_TLS: u32 = 7;
/// Program header type: GNU `.eh_frame_hdr` location.
pub const PT_GNU_EH_FRAME: u32 = 0x6474_e550;
/// Program header type: GNU stack executability.
pub const PT_GNU_STACK: u32 = 0x6474_e551;
/// Program header type: GNU read-only after relocation.
pub const PT_GNU_RELRO: u32 = 0x6474_e552;
/// Program header type: GNU property notes.
pub const PT_GNU_PROPERTY: u32 = 0x6474_e553;

/// Segment flag: executable.
pub const PF_X: u32 = 0x1;
/// Segment flag: writable.
pub const PF_W: u32 = 0x2;
/// Segment flag: readable.
pub const PF_R: u32 = 0x4;

/// Parsed ELF64 program header entry.
///
/// `p_align` is advisory and is not checked against the addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramHeader {
    /// Segment type (`PT_*`); unknown values pass through.
    pub p_type: u32,
    /// Segment flags (read/write/execute).
    pub p_flags: u32,
    /// Offset of the segment data in the file.
    pub p_offset: u64,
    /// Virtual address of the segment.
    pub p_vaddr: u64,
    /// Physical address of the segment.
    pub p_paddr: u64,
    /// Size of the segment data in the file.
    pub p_filesz: u64,
    /// Size of the segment in memory.
    pub p_memsz: u64,
    /// Alignment of the segment in memory and in the file.
    pub p_align: u64,
}

impl Record for ProgramHeader {
    const SIZE: usize = ELF64_PHDR_SIZE;

    fn decode(b: &[u8], endian: Endian) -> Self {
        Self {
            p_type: endian.read_u32(b, 0),
            p_flags: endian.read_u32(b, 4),
            p_offset: endian.read_u64(b, 8),
            p_vaddr: endian.read_u64(b, 16),
            p_paddr: endian.read_u64(b, 24),
            p_filesz: endian.read_u64(b, 32),
            p_memsz: endian.read_u64(b, 40),
            p_align: endian.read_u64(b, 48),
        }
    }
}

impl ProgramHeader {
    /// Returns `true` for `PT_LOAD` segments.
    #[must_use]
    pub fn is_load(&self) -> bool {
        self.p_type == PT_LOAD
    }

    /// Flags rendered as `RWE`, with blanks for unset bits.
    #[must_use]
    pub fn flags_string(&self) -> String {
        [(PF_R, 'R'), (PF_W, 'W'), (PF_X, 'E')]
            .iter()
            .map(|&(bit, c)| if self.p_flags & bit != 0 { c } else { ' ' })
            .collect()
    }
}

/// Name of a program header type, if known.
#[must_use]
pub fn segment_type_name(p_type: u32) -> Option<&'static str> {
    Some(match p_type {
        PT_NULL => "NULL",
        PT_LOAD => "LOAD",
        PT_DYNAMIC => "DYNAMIC",
        PT_INTERP => "INTERP",
        PT_NOTE => "NOTE",
        PT_SHLIB => "SHLIB",
        PT_PHDR => "PHDR",
        PT_TLS => "TLS",
        PT_GNU_EH_FRAME => "GNU_EH_FRAME",
        PT_GNU_STACK => "GNU_STACK",
        PT_GNU_RELRO => "GNU_RELRO",
        PT_GNU_PROPERTY => "GNU_PROPERTY",
        _ => return None,
    })
}
