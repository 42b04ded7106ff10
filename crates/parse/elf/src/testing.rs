//! Synthetic ELF64 fixtures for tests.
//!
//! [`ElfBuilder`] writes a complete file in either byte order. The layout
//! is: file header, program header table, section contents, then the
//! section header table last (8-byte aligned). Section offsets and sizes
//! are filled in from the supplied content.

use alloc::vec;
use alloc::vec::Vec;

use crate::header::{ELF64_EHDR_SIZE, EM_X86_64, ET_EXEC};
use crate::ident::{ELF_MAGIC, ELFCLASS64, ELFDATA2LSB, ELFDATA2MSB, EV_CURRENT, Endian};
use crate::section::{ELF64_SHDR_SIZE, SectionHeader};
use crate::segment::{ELF64_PHDR_SIZE, ProgramHeader};
use crate::symbol::{ELF64_SYM_SIZE, Symbol};

/// Write a `u16` at `off` in the given byte order.
pub fn put_u16(endian: Endian, buf: &mut [u8], off: usize, value: u16) {
    let bytes = match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    };
    buf[off..off + 2].copy_from_slice(&bytes);
}

/// Write a `u32` at `off` in the given byte order.
pub fn put_u32(endian: Endian, buf: &mut [u8], off: usize, value: u32) {
    let bytes = match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    };
    buf[off..off + 4].copy_from_slice(&bytes);
}

/// Write a `u64` at `off` in the given byte order.
pub fn put_u64(endian: Endian, buf: &mut [u8], off: usize, value: u64) {
    let bytes = match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    };
    buf[off..off + 8].copy_from_slice(&bytes);
}

/// Encode a program header entry.
#[must_use]
pub fn encode_phdr(endian: Endian, phdr: &ProgramHeader) -> [u8; ELF64_PHDR_SIZE] {
    let mut b = [0u8; ELF64_PHDR_SIZE];
    put_u32(endian, &mut b, 0, phdr.p_type);
    put_u32(endian, &mut b, 4, phdr.p_flags);
    put_u64(endian, &mut b, 8, phdr.p_offset);
    put_u64(endian, &mut b, 16, phdr.p_vaddr);
    put_u64(endian, &mut b, 24, phdr.p_paddr);
    put_u64(endian, &mut b, 32, phdr.p_filesz);
    put_u64(endian, &mut b, 40, phdr.p_memsz);
    put_u64(endian, &mut b, 48, phdr.p_align);
    b
}

/// Encode a section header entry.
#[must_use]
pub fn encode_shdr(endian: Endian, shdr: &SectionHeader) -> [u8; ELF64_SHDR_SIZE] {
    let mut b = [0u8; ELF64_SHDR_SIZE];
    put_u32(endian, &mut b, 0, shdr.sh_name);
    put_u32(endian, &mut b, 4, shdr.sh_type);
    put_u64(endian, &mut b, 8, shdr.sh_flags);
    put_u64(endian, &mut b, 16, shdr.sh_addr);
    put_u64(endian, &mut b, 24, shdr.sh_offset);
    put_u64(endian, &mut b, 32, shdr.sh_size);
    put_u32(endian, &mut b, 40, shdr.sh_link);
    put_u32(endian, &mut b, 44, shdr.sh_info);
    put_u64(endian, &mut b, 48, shdr.sh_addralign);
    put_u64(endian, &mut b, 56, shdr.sh_entsize);
    b
}

/// Encode a symbol table entry.
#[must_use]
pub fn encode_symbol(endian: Endian, sym: &Symbol) -> [u8; ELF64_SYM_SIZE] {
    let mut b = [0u8; ELF64_SYM_SIZE];
    put_u32(endian, &mut b, 0, sym.st_name);
    b[4] = sym.st_info;
    b[5] = sym.st_other;
    put_u16(endian, &mut b, 6, sym.st_shndx);
    put_u64(endian, &mut b, 8, sym.st_value);
    put_u64(endian, &mut b, 16, sym.st_size);
    b
}

/// Encode a packed run of symbol entries, suitable as `SHT_SYMTAB` content.
#[must_use]
pub fn symbols_bytes(endian: Endian, symbols: &[Symbol]) -> Vec<u8> {
    symbols
        .iter()
        .flat_map(|sym| encode_symbol(endian, sym))
        .collect()
}

/// A section to be laid out by [`ElfBuilder`].
#[derive(Debug, Clone, Default)]
pub struct SectionSpec {
    /// Name offset into the section-name string table.
    pub sh_name: u32,
    /// Section type.
    pub sh_type: u32,
    /// Section flags.
    pub sh_flags: u64,
    /// Virtual address.
    pub sh_addr: u64,
    /// Linked section index.
    pub sh_link: u32,
    /// Extra info.
    pub sh_info: u32,
    /// Alignment.
    pub sh_addralign: u64,
    /// Entry size.
    pub sh_entsize: u64,
    /// Overrides the recorded `sh_size` (defaults to `data.len()`).
    pub sh_size: Option<u64>,
    /// Section content written into the file.
    pub data: Vec<u8>,
}

impl SectionSpec {
    /// A section with the given name offset, type and content.
    #[must_use]
    pub fn new(sh_name: u32, sh_type: u32, data: Vec<u8>) -> Self {
        Self {
            sh_name,
            sh_type,
            sh_addralign: 1,
            data,
            ..Self::default()
        }
    }
}

/// Builds ELF64 files for tests.
///
/// Defaults: `ET_EXEC`, `EM_X86_64`, entry = 0x401000, no segments, no
/// sections, `e_shstrndx` = 0.
#[derive(Debug, Clone)]
pub struct ElfBuilder {
    endian: Endian,
    e_type: u16,
    e_machine: u16,
    e_entry: u64,
    e_flags: u32,
    os_abi: u8,
    e_shstrndx: u16,
    segments: Vec<ProgramHeader>,
    sections: Vec<SectionSpec>,
}

impl ElfBuilder {
    /// A new builder writing fields in `endian` byte order.
    #[must_use]
    pub fn new(endian: Endian) -> Self {
        Self {
            endian,
            e_type: ET_EXEC,
            e_machine: EM_X86_64,
            e_entry: 0x0040_1000,
            e_flags: 0,
            os_abi: 0,
            e_shstrndx: 0,
            segments: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Sets `e_type`.
    pub fn file_type(&mut self, e_type: u16) -> &mut Self {
        self.e_type = e_type;
        self
    }

    /// Sets `e_machine`.
    pub fn machine(&mut self, e_machine: u16) -> &mut Self {
        self.e_machine = e_machine;
        self
    }

    /// Sets `e_entry`.
    pub fn entry(&mut self, e_entry: u64) -> &mut Self {
        self.e_entry = e_entry;
        self
    }

    /// Sets `e_flags`.
    pub fn flags(&mut self, e_flags: u32) -> &mut Self {
        self.e_flags = e_flags;
        self
    }

    /// Sets the OS/ABI identification byte.
    pub fn os_abi(&mut self, os_abi: u8) -> &mut Self {
        self.os_abi = os_abi;
        self
    }

    /// Sets `e_shstrndx`.
    pub fn shstrndx(&mut self, index: u16) -> &mut Self {
        self.e_shstrndx = index;
        self
    }

    /// Appends a program header, written verbatim.
    pub fn segment(&mut self, phdr: ProgramHeader) -> &mut Self {
        self.segments.push(phdr);
        self
    }

    /// Appends a section and returns its index.
    ///
    /// # Panics
    ///
    /// Panics past 65535 sections.
    pub fn section(&mut self, spec: SectionSpec) -> u16 {
        let index = u16::try_from(self.sections.len()).expect("too many sections");
        self.sections.push(spec);
        index
    }

    /// Serializes the file.
    ///
    /// # Panics
    ///
    /// Panics if the tables exceed the `u16` counts of the ELF header.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "small fixtures")]
    pub fn build(&self) -> Vec<u8> {
        let e = self.endian;
        let phoff = ELF64_EHDR_SIZE;
        let mut buf = vec![0u8; phoff + self.segments.len() * ELF64_PHDR_SIZE];

        // Identification
        buf[..4].copy_from_slice(&ELF_MAGIC);
        buf[4] = ELFCLASS64;
        buf[5] = match e {
            Endian::Little => ELFDATA2LSB,
            Endian::Big => ELFDATA2MSB,
        };
        buf[6] = EV_CURRENT;
        buf[7] = self.os_abi;

        // File header
        put_u16(e, &mut buf, 16, self.e_type);
        put_u16(e, &mut buf, 18, self.e_machine);
        put_u32(e, &mut buf, 20, u32::from(EV_CURRENT));
        put_u64(e, &mut buf, 24, self.e_entry);
        put_u64(e, &mut buf, 32, phoff as u64);
        put_u32(e, &mut buf, 48, self.e_flags);
        put_u16(e, &mut buf, 52, ELF64_EHDR_SIZE as u16);
        put_u16(e, &mut buf, 54, ELF64_PHDR_SIZE as u16);
        let phnum = u16::try_from(self.segments.len()).expect("phnum");
        let shnum = u16::try_from(self.sections.len()).expect("shnum");
        put_u16(e, &mut buf, 56, phnum);
        put_u16(e, &mut buf, 58, ELF64_SHDR_SIZE as u16);
        put_u16(e, &mut buf, 60, shnum);
        put_u16(e, &mut buf, 62, self.e_shstrndx);

        for (i, phdr) in self.segments.iter().enumerate() {
            let off = phoff + i * ELF64_PHDR_SIZE;
            buf[off..off + ELF64_PHDR_SIZE].copy_from_slice(&encode_phdr(e, phdr));
        }

        // Section contents
        let mut headers = Vec::with_capacity(self.sections.len());
        for spec in &self.sections {
            let offset = buf.len() as u64;
            buf.extend_from_slice(&spec.data);
            headers.push(SectionHeader {
                sh_name: spec.sh_name,
                sh_type: spec.sh_type,
                sh_flags: spec.sh_flags,
                sh_addr: spec.sh_addr,
                sh_offset: offset,
                sh_size: spec.sh_size.unwrap_or(spec.data.len() as u64),
                sh_link: spec.sh_link,
                sh_info: spec.sh_info,
                sh_addralign: spec.sh_addralign,
                sh_entsize: spec.sh_entsize,
            });
        }

        // Section header table, last
        if !headers.is_empty() {
            buf.resize(buf.len().next_multiple_of(8), 0);
            let shoff = buf.len() as u64;
            put_u64(e, &mut buf, 40, shoff);
            for shdr in &headers {
                buf.extend_from_slice(&encode_shdr(e, shdr));
            }
        }

        buf
    }
}
