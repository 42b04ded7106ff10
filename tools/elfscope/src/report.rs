//! Report assembly.
//!
//! Collects everything the printed report needs from a decoded file into a
//! plain data model. Building is all-or-nothing: the first decoder error
//! aborts the whole report, so nothing is ever printed for a file that
//! fails part-way through.

use elfscope_elf::section::{SHN_ABS, SHN_COMMON};
use elfscope_elf::{
    ElfError, ElfFile, ProgramHeader, SHN_UNDEF, SectionHeader, Symbol, machine_name,
    section_type_name, segment_type_name, symbol_bind_name, symbol_type_name,
    symbol_visibility_name,
};
use serde::Serialize;

use crate::cli::Parts;

/// The complete report for one file.
#[derive(Debug, Serialize)]
pub struct Report {
    /// File header summary.
    pub header: HeaderSummary,
    /// Program headers in table order, when selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SegmentRow>>,
    /// Section headers in table order (index 0 omitted), when selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionRow>>,
    /// Every symbol-bearing section in table order, when selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_tables: Option<Vec<SymbolTableRow>>,
}

/// Identification block and file header fields.
#[derive(Debug, Serialize)]
pub struct HeaderSummary {
    pub class: &'static str,
    pub data: &'static str,
    pub version: u8,
    pub os_abi: String,
    pub abi_version: u8,
    pub file_type: String,
    pub machine: String,
    pub entry: u64,
    pub phoff: u64,
    pub shoff: u64,
    pub flags: u32,
    pub ehsize: u16,
    pub phentsize: u16,
    pub phnum: u16,
    pub shentsize: u16,
    pub shnum: u16,
    pub shstrndx: u16,
}

/// One program header.
#[derive(Debug, Serialize)]
pub struct SegmentRow {
    pub index: usize,
    pub kind: String,
    pub flags: String,
    pub offset: u64,
    pub vaddr: u64,
    pub paddr: u64,
    pub filesz: u64,
    pub memsz: u64,
    pub align: u64,
}

/// One section header with its resolved name.
#[derive(Debug, Serialize)]
pub struct SectionRow {
    pub index: usize,
    pub name: String,
    pub kind: String,
    pub flags: String,
    pub addr: u64,
    pub offset: u64,
    pub size: u64,
    pub link: u32,
    pub info: u32,
    pub addralign: u64,
    pub entsize: u64,
}

/// One symbol table section.
#[derive(Debug, Serialize)]
pub struct SymbolTableRow {
    pub section: usize,
    pub name: String,
    pub entries: usize,
    pub symbols: Vec<SymbolRow>,
}

/// One symbol with its resolved name.
#[derive(Debug, Serialize)]
pub struct SymbolRow {
    pub index: usize,
    pub name: String,
    pub value: u64,
    pub size: u64,
    pub kind: String,
    pub bind: String,
    pub visibility: String,
    pub shndx: String,
}

impl Report {
    /// Build the report for `elf`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ElfError`] hit while resolving section names or
    /// decoding symbol tables.
    pub fn build<D: AsRef<[u8]>>(
        elf: &ElfFile<D>,
        parts: Parts,
        demangle: bool,
    ) -> Result<Self, ElfError> {
        let header = summarize_header(elf);

        let segments: Option<Vec<SegmentRow>> = parts.segments.then(|| {
            elf.segments()
                .iter()
                .enumerate()
                .map(|(index, phdr)| segment_row(index, phdr))
                .collect()
        });

        let sections = if parts.sections {
            let rows = elf
                .sections()
                .iter()
                .enumerate()
                .skip(1)
                .map(|(index, shdr)| {
                    elf.section_name(index)
                        .map(|name| section_row(index, name.into_owned(), shdr))
                })
                .collect::<Result<Vec<_>, ElfError>>()?;
            Some(rows)
        } else {
            None
        };

        let symbol_tables = if parts.symbols {
            let tables = elf
                .symbol_table_indices()
                .map(|index| symbol_table_row(elf, index, demangle))
                .collect::<Result<Vec<_>, ElfError>>()?;
            Some(tables)
        } else {
            None
        };

        log::debug!(
            "report: {} segments, {} sections, {} symbol tables",
            segments.as_ref().map_or(0, Vec::len),
            sections.as_ref().map_or(0, Vec::len),
            symbol_tables.as_ref().map_or(0, Vec::len),
        );

        Ok(Self {
            header,
            segments,
            sections,
            symbol_tables,
        })
    }
}

fn summarize_header<D: AsRef<[u8]>>(elf: &ElfFile<D>) -> HeaderSummary {
    let hdr = elf.header();
    let ident = elf.identification();
    HeaderSummary {
        class: "ELF64",
        data: elf.endian().describe(),
        version: ident.version,
        os_abi: ident
            .os_abi_name()
            .map_or_else(|| format!("<unknown: {:#x}>", ident.os_abi), str::to_owned),
        abi_version: ident.abi_version,
        file_type: hdr.file_type().to_string(),
        machine: name_or_hex(machine_name(hdr.e_machine), hdr.e_machine),
        entry: hdr.e_entry,
        phoff: hdr.e_phoff,
        shoff: hdr.e_shoff,
        flags: hdr.e_flags,
        ehsize: hdr.e_ehsize,
        phentsize: hdr.e_phentsize,
        phnum: hdr.e_phnum,
        shentsize: hdr.e_shentsize,
        shnum: hdr.e_shnum,
        shstrndx: hdr.e_shstrndx,
    }
}

fn segment_row(index: usize, phdr: &ProgramHeader) -> SegmentRow {
    SegmentRow {
        index,
        kind: name_or_hex(segment_type_name(phdr.p_type), phdr.p_type),
        flags: phdr.flags_string(),
        offset: phdr.p_offset,
        vaddr: phdr.p_vaddr,
        paddr: phdr.p_paddr,
        filesz: phdr.p_filesz,
        memsz: phdr.p_memsz,
        align: phdr.p_align,
    }
}

fn section_row(index: usize, name: String, shdr: &SectionHeader) -> SectionRow {
    SectionRow {
        index,
        name,
        kind: name_or_hex(section_type_name(shdr.sh_type), shdr.sh_type),
        flags: shdr.flags_string(),
        addr: shdr.sh_addr,
        offset: shdr.sh_offset,
        size: shdr.sh_size,
        link: shdr.sh_link,
        info: shdr.sh_info,
        addralign: shdr.sh_addralign,
        entsize: shdr.sh_entsize,
    }
}

fn symbol_table_row<D: AsRef<[u8]>>(
    elf: &ElfFile<D>,
    index: usize,
    demangle: bool,
) -> Result<SymbolTableRow, ElfError> {
    let name = elf.section_name(index)?.into_owned();
    let table = elf.symbols(index)?;
    let symbols = table
        .iter()
        .enumerate()
        .map(|(i, (sym, sym_name))| symbol_row(i, sym, sym_name, demangle))
        .collect();
    Ok(SymbolTableRow {
        section: index,
        name,
        entries: table.len(),
        symbols,
    })
}

fn symbol_row(index: usize, sym: &Symbol, name: &str, demangle: bool) -> SymbolRow {
    let name = if demangle {
        format!("{:#}", rustc_demangle::demangle(name))
    } else {
        name.to_owned()
    };
    SymbolRow {
        index,
        name,
        value: sym.st_value,
        size: sym.st_size,
        kind: name_or_hex(symbol_type_name(sym.sym_type()), sym.sym_type()),
        bind: name_or_hex(symbol_bind_name(sym.sym_bind()), sym.sym_bind()),
        visibility: name_or_hex(symbol_visibility_name(sym.visibility()), sym.visibility()),
        shndx: section_index_name(sym.st_shndx),
    }
}

/// `UND`, `ABS`, `COM`, or the decimal index.
fn section_index_name(shndx: u16) -> String {
    match shndx {
        SHN_UNDEF => "UND".to_owned(),
        SHN_ABS => "ABS".to_owned(),
        SHN_COMMON => "COM".to_owned(),
        other => other.to_string(),
    }
}

fn name_or_hex(name: Option<&str>, raw: impl std::fmt::LowerHex) -> String {
    name.map_or_else(|| format!("{raw:#x}"), str::to_owned)
}
