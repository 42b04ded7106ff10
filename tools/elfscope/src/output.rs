//! Text rendering for a built [`Report`].
//!
//! The layout is deterministic and follows table index order. Section 0
//! never appears in the section listing.

use std::fmt;

use crate::report::{HeaderSummary, Report, SectionRow, SegmentRow, SymbolTableRow};

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &self.header)?;
        if let Some(segments) = &self.segments {
            writeln!(f)?;
            write_segments(f, segments)?;
        }
        if let Some(sections) = &self.sections {
            writeln!(f)?;
            write_sections(f, usize::from(self.header.shnum), sections)?;
        }
        if let Some(tables) = &self.symbol_tables {
            for table in tables {
                writeln!(f)?;
                write_symbols(f, table)?;
            }
        }
        Ok(())
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, h: &HeaderSummary) -> fmt::Result {
    writeln!(f, "ELF Header:")?;
    writeln!(f, "  Class:                             {}", h.class)?;
    writeln!(f, "  Data:                              {}", h.data)?;
    writeln!(f, "  Version:                           {}", h.version)?;
    writeln!(f, "  OS/ABI:                            {}", h.os_abi)?;
    writeln!(f, "  ABI Version:                       {}", h.abi_version)?;
    writeln!(f, "  Type:                              {}", h.file_type)?;
    writeln!(f, "  Machine:                           {}", h.machine)?;
    writeln!(f, "  Entry point address:               {:#x}", h.entry)?;
    writeln!(
        f,
        "  Start of program headers:          {} (bytes into file)",
        h.phoff
    )?;
    writeln!(
        f,
        "  Start of section headers:          {} (bytes into file)",
        h.shoff
    )?;
    writeln!(f, "  Flags:                             {:#x}", h.flags)?;
    writeln!(
        f,
        "  Size of this header:               {} (bytes)",
        h.ehsize
    )?;
    writeln!(
        f,
        "  Size of program headers:           {} (bytes)",
        h.phentsize
    )?;
    writeln!(f, "  Number of program headers:         {}", h.phnum)?;
    writeln!(
        f,
        "  Size of section headers:           {} (bytes)",
        h.shentsize
    )?;
    writeln!(f, "  Number of section headers:         {}", h.shnum)?;
    writeln!(f, "  Section header string table index: {}", h.shstrndx)
}

fn write_segments(f: &mut fmt::Formatter<'_>, segments: &[SegmentRow]) -> fmt::Result {
    writeln!(f, "Program Headers ({}):", segments.len())?;
    writeln!(
        f,
        "  [Nr] {:<14} {:<5} {:<18} {:<18} {:<18} {:<18} {:<18} Align",
        "Type", "Flags", "Offset", "VirtAddr", "PhysAddr", "FileSiz", "MemSiz"
    )?;
    for s in segments {
        writeln!(
            f,
            "  [{:>2}] {:<14} {:<5} {:#018x} {:#018x} {:#018x} {:#018x} {:#018x} {:#x}",
            s.index, s.kind, s.flags, s.offset, s.vaddr, s.paddr, s.filesz, s.memsz, s.align
        )?;
    }
    Ok(())
}

fn write_sections(
    f: &mut fmt::Formatter<'_>,
    count: usize,
    sections: &[SectionRow],
) -> fmt::Result {
    writeln!(f, "Section Headers ({count}):")?;
    writeln!(
        f,
        "  [Nr] {:<18} {:<12} {:<5} {:<18} {:<18} {:<18} {:>4} {:>4} {:>5} EntSize",
        "Name", "Type", "Flags", "Address", "Offset", "Size", "Link", "Info", "Align"
    )?;
    for s in sections {
        writeln!(
            f,
            "  [{:>2}] {:<18} {:<12} {:<5} {:#018x} {:#018x} {:#018x} {:>4} {:>4} {:>5} {:#x}",
            s.index,
            s.name,
            s.kind,
            s.flags,
            s.addr,
            s.offset,
            s.size,
            s.link,
            s.info,
            s.addralign,
            s.entsize
        )?;
    }
    Ok(())
}

fn write_symbols(f: &mut fmt::Formatter<'_>, table: &SymbolTableRow) -> fmt::Result {
    writeln!(
        f,
        "Symbol table '{}' contains {} entries:",
        table.name, table.entries
    )?;
    writeln!(
        f,
        "   Num: {:<18} {:>5} {:<7} {:<6} {:<9} {:>3} Name",
        "Value", "Size", "Type", "Bind", "Vis", "Ndx"
    )?;
    for s in &table.symbols {
        writeln!(
            f,
            "{:>6}: {:016x}   {:>5} {:<7} {:<6} {:<9} {:>3} {}",
            s.index, s.value, s.size, s.kind, s.bind, s.visibility, s.shndx, s.name
        )?;
    }
    Ok(())
}
