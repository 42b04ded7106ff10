//! The decoded ELF64 file.
//!
//! Provides [`ElfFile`] as the main entry point. Parsing runs the whole
//! pipeline up front (identification, header, program header table, section
//! header table); string and symbol tables are resolved on demand through
//! the section content accessor.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::{ElfError, Table};
use crate::header::FileHeader;
use crate::ident::{Endian, Identification};
use crate::section::SectionHeader;
use crate::segment::ProgramHeader;
use crate::strtab::StringTable;
use crate::symbol::{Symbol, SymbolTable};
use crate::table::{TableLocation, decode_packed, decode_table};

/// A parsed ELF64 file.
///
/// Owns the raw image (any `D: AsRef<[u8]>`, e.g. `Vec<u8>` or `&[u8]`)
/// together with copies of the header and both header tables. Nothing is
/// mutated after [`parse`](Self::parse) returns.
#[derive(Debug, Clone)]
pub struct ElfFile<D = Vec<u8>> {
    data: D,
    header: FileHeader,
    segments: Vec<ProgramHeader>,
    sections: Vec<SectionHeader>,
}

impl<D: AsRef<[u8]>> ElfFile<D> {
    /// Parse an ELF64 file from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ElfError`] raised by identification, the header
    /// decoder or either table decoder. No partial file is produced.
    pub fn parse(data: D) -> Result<Self, ElfError> {
        let bytes = data.as_ref();

        let ident = Identification::parse(bytes)?;
        log::debug!(
            "elf: identification ok ({:?}, os/abi {})",
            ident.endian(),
            ident.os_abi
        );

        let header = FileHeader::parse(bytes, ident)?;
        log::debug!(
            "elf: header type={:#x} machine={:#x} phnum={} shnum={}",
            header.e_type,
            header.e_machine,
            header.e_phnum,
            header.e_shnum
        );

        let endian = header.endian();
        let segments = decode_table(
            bytes,
            endian,
            TableLocation {
                offset: header.e_phoff,
                count: header.e_phnum,
                entry_size: header.e_phentsize,
            },
            Table::Program,
        )?;
        log::debug!("elf: decoded {} program headers", segments.len());

        let sections = decode_table(
            bytes,
            endian,
            TableLocation {
                offset: header.e_shoff,
                count: header.e_shnum,
                entry_size: header.e_shentsize,
            },
            Table::Section,
        )?;
        log::debug!("elf: decoded {} section headers", sections.len());

        Ok(Self {
            data,
            header,
            segments,
            sections,
        })
    }

    /// Returns the underlying raw ELF data.
    #[must_use]
    pub fn raw_data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Returns the parsed file header.
    #[must_use]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Returns the validated identification block.
    #[must_use]
    pub fn identification(&self) -> &Identification {
        &self.header.ident
    }

    /// Byte order of the file.
    #[must_use]
    pub fn endian(&self) -> Endian {
        self.header.endian()
    }

    /// Returns the virtual address of the entry point.
    #[must_use]
    pub fn entry_point(&self) -> u64 {
        self.header.e_entry
    }

    /// All program headers, in table order.
    #[must_use]
    pub fn segments(&self) -> &[ProgramHeader] {
        &self.segments
    }

    /// All section headers, in table order (index 0 is the null section
    /// in well-formed files).
    #[must_use]
    pub fn sections(&self) -> &[SectionHeader] {
        &self.sections
    }

    /// Returns the program header at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::InvalidSegmentIndex`] unless `index < segments().len()`.
    pub fn program_header(&self, index: usize) -> Result<&ProgramHeader, ElfError> {
        self.segments
            .get(index)
            .ok_or(ElfError::InvalidSegmentIndex(index))
    }

    /// Returns the section header at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::InvalidSectionIndex`] unless `index < sections().len()`.
    pub fn section_header(&self, index: usize) -> Result<&SectionHeader, ElfError> {
        self.sections
            .get(index)
            .ok_or(ElfError::InvalidSectionIndex(index))
    }

    /// Returns the raw content `[sh_offset, sh_offset + sh_size)` of a section.
    ///
    /// This is the only path through which section bytes are read.
    ///
    /// # Errors
    ///
    /// - [`ElfError::InvalidSectionIndex`] if `index` is out of range.
    /// - [`ElfError::SectionOutOfBounds`] if the range lies past the buffer.
    pub fn section_data(&self, index: usize) -> Result<&[u8], ElfError> {
        let shdr = self.section_header(index)?;
        file_range(self.raw_data(), shdr.sh_offset, shdr.sh_size)
            .ok_or(ElfError::SectionOutOfBounds(index))
    }

    /// Returns the file-backed content `[p_offset, p_offset + p_filesz)` of a segment.
    ///
    /// # Errors
    ///
    /// - [`ElfError::InvalidSegmentIndex`] if `index` is out of range.
    /// - [`ElfError::SegmentOutOfBounds`] if the range lies past the buffer.
    pub fn segment_data(&self, index: usize) -> Result<&[u8], ElfError> {
        let phdr = self.program_header(index)?;
        file_range(self.raw_data(), phdr.p_offset, phdr.p_filesz)
            .ok_or(ElfError::SegmentOutOfBounds(index))
    }

    /// Wraps the content of section `index` as a string table.
    ///
    /// The section type is not checked.
    ///
    /// # Errors
    ///
    /// Same as [`section_data`](Self::section_data).
    pub fn string_table(&self, index: usize) -> Result<StringTable<'_>, ElfError> {
        self.section_data(index).map(StringTable::new)
    }

    /// Resolves the name of section `index` through the section header
    /// string table (`e_shstrndx`).
    ///
    /// # Errors
    ///
    /// - [`ElfError::InvalidSectionIndex`] if `index` or `e_shstrndx` is out of range.
    /// - [`ElfError::SectionOutOfBounds`] if the string table lies past the buffer.
    /// - [`ElfError::NameOutOfBounds`] if the name runs past the string table.
    pub fn section_name(&self, index: usize) -> Result<Cow<'_, str>, ElfError> {
        let shdr = self.section_header(index)?;
        if shdr.sh_name == 0 {
            return Ok(Cow::Borrowed(""));
        }
        let shstrtab = self.string_table(usize::from(self.header.e_shstrndx))?;
        shstrtab.get(shdr.sh_name)
    }

    /// Finds the first section with the given name, with its index.
    ///
    /// Sections whose names cannot be resolved are skipped.
    #[must_use]
    pub fn find_section_by_name(&self, name: &str) -> Option<(usize, &SectionHeader)> {
        self.sections
            .iter()
            .enumerate()
            .find(|&(index, _)| self.section_name(index).is_ok_and(|n| n == name))
    }

    /// Finds the first section with the given type, with its index.
    #[must_use]
    pub fn find_section_by_type(&self, sh_type: u32) -> Option<(usize, &SectionHeader)> {
        self.sections
            .iter()
            .enumerate()
            .find(|(_, s)| s.sh_type == sh_type)
    }

    /// Indices of every `SHT_SYMTAB` and `SHT_DYNSYM` section, in table order.
    pub fn symbol_table_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_symbol_table())
            .map(|(index, _)| index)
    }

    /// Decodes the symbol table in section `index` and resolves every name
    /// through its linked string table (`sh_link`).
    ///
    /// The entry count is `sh_size / 24`; a trailing partial entry is ignored.
    ///
    /// # Errors
    ///
    /// - [`ElfError::InvalidSectionIndex`] if `index` or `sh_link` is out of range.
    /// - [`ElfError::NotASymbolTable`] unless the section is `SHT_SYMTAB` or `SHT_DYNSYM`.
    /// - [`ElfError::SectionOutOfBounds`] if either section lies past the buffer.
    /// - [`ElfError::NameOutOfBounds`] if any symbol name runs past the string table.
    pub fn symbols(&self, index: usize) -> Result<SymbolTable<'_>, ElfError> {
        let shdr = self.section_header(index)?;
        if !shdr.is_symbol_table() {
            return Err(ElfError::NotASymbolTable(index));
        }

        let content = self.section_data(index)?;
        let link = shdr.sh_link as usize;
        let strtab = self.string_table(link)?;

        let symbols: Vec<Symbol> = decode_packed(content, self.endian());
        let names = symbols
            .iter()
            .map(|sym| strtab.get(sym.st_name))
            .collect::<Result<Vec<_>, _>>()?;
        log::trace!(
            "elf: section {index}: {} symbols resolved via string table {link}",
            symbols.len()
        );

        Ok(SymbolTable {
            section: index,
            strtab: link,
            symbols,
            names,
        })
    }
}

/// Returns `data[offset..offset + size]` if the whole range is inside `data`.
fn file_range(data: &[u8], offset: u64, size: u64) -> Option<&[u8]> {
    let start = usize::try_from(offset).ok()?;
    let len = usize::try_from(size).ok()?;
    let end = start.checked_add(len)?;
    data.get(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::ELF64_EHDR_SIZE;
    use crate::ident::ELFOSABI_LINUX;
    use crate::section::{SHT_DYNSYM, SHT_NOBITS, SHT_NULL, SHT_PROGBITS, SHT_STRTAB, SHT_SYMTAB};
    use crate::segment::{PF_R, PF_X, PT_LOAD, PT_NOTE};
    use crate::symbol::{STB_GLOBAL, STT_FUNC, STT_OBJECT};
    use crate::testing::{ElfBuilder, SectionSpec, put_u16, put_u64, symbols_bytes};

    /// Sections: NULL, .strtab, .symtab, .shstrtab, .text.
    fn make_elf_with_symtab(endian: Endian) -> Vec<u8> {
        let mut b = ElfBuilder::new(endian);
        b.segment(ProgramHeader {
            p_type: PT_LOAD,
            p_flags: PF_R | PF_X,
            p_offset: 0,
            p_vaddr: 0x40_0000,
            p_paddr: 0x40_0000,
            p_filesz: ELF64_EHDR_SIZE as u64,
            p_memsz: 0x1000,
            p_align: 0x1000,
        });

        b.section(SectionSpec::new(0, SHT_NULL, Vec::new()));
        let strtab = SectionSpec::new(1, SHT_STRTAB, b"\0hello\0world\0".to_vec());
        b.section(strtab);
        let syms = symbols_bytes(
            endian,
            &[
                Symbol::default(),
                Symbol {
                    st_name: 1,
                    st_info: (STB_GLOBAL << 4) | STT_FUNC,
                    st_shndx: 4,
                    st_value: 0x1000,
                    st_size: 0x42,
                    ..Symbol::default()
                },
                Symbol {
                    st_name: 7,
                    st_info: (STB_GLOBAL << 4) | STT_OBJECT,
                    st_shndx: 4,
                    st_value: 0x2000,
                    st_size: 8,
                    ..Symbol::default()
                },
            ],
        );
        let mut symtab = SectionSpec::new(9, SHT_SYMTAB, syms);
        symtab.sh_link = 1;
        symtab.sh_entsize = 24;
        b.section(symtab);
        let shstrtab = b.section(SectionSpec::new(
            17,
            SHT_STRTAB,
            b"\0.strtab\0.symtab\0.shstrtab\0.text\0".to_vec(),
        ));
        b.section(SectionSpec::new(27, SHT_PROGBITS, vec![0x90; 16]));
        b.shstrndx(shstrtab);
        b.build()
    }

    /// Section header table offset as written by the builder.
    fn shoff(buf: &[u8], endian: Endian) -> usize {
        usize::try_from(endian.read_u64(buf, 40)).unwrap()
    }

    #[test]
    fn parse_valid_elf_file() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        assert_eq!(elf.entry_point(), 0x0040_1000);
        assert_eq!(elf.segments().len(), 1);
        assert_eq!(elf.sections().len(), 5);
        assert_eq!(elf.raw_data().len(), buf.len());
    }

    #[test]
    fn owns_its_buffer() {
        let elf = ElfFile::parse(make_elf_with_symtab(Endian::Little)).expect("valid ELF");
        assert_eq!(elf.section_name(2).as_deref(), Ok(".symtab"));
    }

    #[test]
    fn identification_accessors() {
        let mut b = ElfBuilder::new(Endian::Big);
        b.os_abi(ELFOSABI_LINUX);
        let elf = ElfFile::parse(b.build()).expect("valid ELF");
        assert_eq!(elf.endian(), Endian::Big);
        assert_eq!(elf.identification().os_abi, ELFOSABI_LINUX);
        assert_eq!(elf.identification().os_abi_name(), Some("UNIX - GNU"));
    }

    #[test]
    fn header_only_file() {
        let buf = ElfBuilder::new(Endian::Little).build();
        let elf = ElfFile::parse(buf).expect("valid ELF");
        assert!(elf.segments().is_empty());
        assert!(elf.sections().is_empty());
        assert_eq!(elf.symbol_table_indices().count(), 0);
    }

    #[test]
    fn segments_in_file_order() {
        let mut b = ElfBuilder::new(Endian::Little);
        let types = [PT_LOAD, PT_NOTE, 0x6fff_0000, PT_LOAD];
        for (i, p_type) in types.into_iter().enumerate() {
            b.segment(ProgramHeader {
                p_type,
                p_vaddr: 0x1000 * i as u64,
                ..ProgramHeader::default()
            });
        }
        let elf = ElfFile::parse(b.build()).expect("valid ELF");
        let decoded: Vec<_> = elf.segments().iter().map(|s| s.p_type).collect();
        assert_eq!(decoded, types);
        assert_eq!(elf.program_header(2).map(|p| p.p_vaddr), Ok(0x2000));
    }

    #[test]
    fn program_header_index_is_strict() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        assert!(elf.program_header(0).is_ok());
        assert_eq!(elf.program_header(1), Err(ElfError::InvalidSegmentIndex(1)));
    }

    #[test]
    fn section_header_index_is_strict() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        assert!(elf.section_header(4).is_ok());
        assert_eq!(elf.section_header(5), Err(ElfError::InvalidSectionIndex(5)));
        assert_eq!(elf.section_data(5), Err(ElfError::InvalidSectionIndex(5)));
    }

    #[test]
    fn section_names() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        let names: Vec<_> = (0..elf.sections().len())
            .map(|i| elf.section_name(i).expect("resolvable").into_owned())
            .collect();
        assert_eq!(names, ["", ".strtab", ".symtab", ".shstrtab", ".text"]);
    }

    #[test]
    fn section_data_bounds_check() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        assert_eq!(elf.section_data(1), Ok(&b"\0hello\0world\0"[..]));
        assert_eq!(elf.section_data(0), Ok(&[][..]));
    }

    #[test]
    fn section_past_end_of_file() {
        let mut buf = make_elf_with_symtab(Endian::Little);
        let shdr4 = shoff(&buf, Endian::Little) + 4 * 64;
        let len = buf.len() as u64;

        // sh_size one byte too large for the file.
        let offset = Endian::Little.read_u64(&buf, shdr4 + 24);
        put_u64(Endian::Little, &mut buf, shdr4 + 32, len - offset + 1);
        let elf = ElfFile::parse(&buf[..]).expect("headers still valid");
        assert_eq!(elf.section_data(4), Err(ElfError::SectionOutOfBounds(4)));

        // sh_offset past end, and an overflowing range.
        put_u64(Endian::Little, &mut buf, shdr4 + 24, len + 1);
        put_u64(Endian::Little, &mut buf, shdr4 + 32, 0);
        let elf = ElfFile::parse(&buf[..]).expect("headers still valid");
        assert_eq!(elf.section_data(4), Err(ElfError::SectionOutOfBounds(4)));

        put_u64(Endian::Little, &mut buf, shdr4 + 24, u64::MAX);
        put_u64(Endian::Little, &mut buf, shdr4 + 32, 2);
        let elf = ElfFile::parse(&buf[..]).expect("headers still valid");
        assert_eq!(elf.section_data(4), Err(ElfError::SectionOutOfBounds(4)));
    }

    #[test]
    fn nobits_is_not_special_cased() {
        let mut b = ElfBuilder::new(Endian::Little);
        let mut bss = SectionSpec::new(0, SHT_NOBITS, Vec::new());
        bss.sh_size = Some(0x10_0000);
        b.section(bss);
        let elf = ElfFile::parse(b.build()).expect("valid ELF");
        assert_eq!(elf.section_data(0), Err(ElfError::SectionOutOfBounds(0)));
    }

    #[test]
    fn segment_data() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        let data = elf.segment_data(0).expect("in bounds");
        assert_eq!(data, &buf[..ELF64_EHDR_SIZE]);
        assert_eq!(elf.segment_data(1), Err(ElfError::InvalidSegmentIndex(1)));
    }

    #[test]
    fn segment_past_end_of_file() {
        let mut b = ElfBuilder::new(Endian::Little);
        b.segment(ProgramHeader {
            p_type: PT_LOAD,
            p_offset: 0x10,
            p_filesz: 0x10_0000,
            ..ProgramHeader::default()
        });
        let elf = ElfFile::parse(b.build()).expect("table itself is in bounds");
        assert_eq!(elf.segment_data(0), Err(ElfError::SegmentOutOfBounds(0)));
    }

    #[test]
    fn section_table_one_byte_short() {
        let buf = make_elf_with_symtab(Endian::Little);
        // The section header table is the last thing the builder writes.
        assert_eq!(shoff(&buf, Endian::Little) + 5 * 64, buf.len());
        assert_eq!(
            ElfFile::parse(&buf[..buf.len() - 1]).map(|_| ()),
            Err(ElfError::TruncatedTable(Table::Section))
        );
    }

    #[test]
    fn program_table_past_end() {
        let mut buf = make_elf_with_symtab(Endian::Little);
        let len = buf.len() as u64;
        put_u64(Endian::Little, &mut buf, 32, len + 1);
        assert_eq!(
            ElfFile::parse(&buf[..]).map(|_| ()),
            Err(ElfError::InvalidTableOffset(Table::Program))
        );
    }

    #[test]
    fn section_entry_size_too_small() {
        let mut buf = make_elf_with_symtab(Endian::Little);
        put_u16(Endian::Little, &mut buf, 58, 40);
        assert_eq!(
            ElfFile::parse(&buf[..]).map(|_| ()),
            Err(ElfError::InvalidEntrySize(Table::Section))
        );
    }

    #[test]
    fn find_sections() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");

        let (index, symtab) = elf.find_section_by_name(".symtab").expect("present");
        assert_eq!(index, 2);
        assert_eq!(symtab.sh_type, SHT_SYMTAB);
        assert!(elf.find_section_by_name(".debug_info").is_none());

        let (strtab, _) = elf.find_section_by_type(SHT_STRTAB).expect("present");
        assert_eq!(strtab, 1);
        assert!(elf.find_section_by_type(SHT_DYNSYM).is_none());
        assert_eq!(elf.symbol_table_indices().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn symbol_parsing() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        let table = elf.symbols(2).expect("valid symtab");

        assert_eq!(table.section, 2);
        assert_eq!(table.strtab, 1);
        assert_eq!(table.len(), 3);
        assert_eq!(table.names, ["", "hello", "world"]);

        let hello = table.find("hello").expect("present");
        assert_eq!(hello.st_value, 0x1000);
        assert_eq!(hello.st_size, 0x42);
        assert_eq!(hello.sym_type(), STT_FUNC);
        assert_eq!(hello.sym_bind(), STB_GLOBAL);
    }

    #[test]
    fn big_endian_file_matches_little_endian() {
        let le_buf = make_elf_with_symtab(Endian::Little);
        let be_buf = make_elf_with_symtab(Endian::Big);
        assert_ne!(le_buf, be_buf);

        let le = ElfFile::parse(&le_buf[..]).expect("valid LE ELF");
        let be = ElfFile::parse(&be_buf[..]).expect("valid BE ELF");
        assert_eq!(be.endian(), Endian::Big);

        let mut le_header = *le.header();
        le_header.ident = be.header().ident;
        assert_eq!(&le_header, be.header());
        assert_eq!(le.segments(), be.segments());
        assert_eq!(le.sections(), be.sections());
        assert_eq!(le.symbols(2), be.symbols(2));
    }

    #[test]
    fn not_a_symbol_table() {
        let buf = make_elf_with_symtab(Endian::Little);
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        assert_eq!(elf.symbols(1).err(), Some(ElfError::NotASymbolTable(1)));
        assert_eq!(
            elf.symbols(9).err(),
            Some(ElfError::InvalidSectionIndex(9))
        );
    }

    #[test]
    fn symtab_with_bad_link() {
        let mut buf = make_elf_with_symtab(Endian::Little);
        let shdr2 = shoff(&buf, Endian::Little) + 2 * 64;
        buf[shdr2 + 40..shdr2 + 44].copy_from_slice(&5u32.to_le_bytes());
        let elf = ElfFile::parse(&buf[..]).expect("valid ELF");
        assert_eq!(
            elf.symbols(2).err(),
            Some(ElfError::InvalidSectionIndex(5))
        );
    }

    #[test]
    fn symbol_name_out_of_bounds_propagates() {
        let mut b = ElfBuilder::new(Endian::Little);
        b.section(SectionSpec::new(0, SHT_NULL, Vec::new()));
        b.section(SectionSpec::new(0, SHT_STRTAB, b"\0abc".to_vec()));
        let syms = symbols_bytes(
            Endian::Little,
            &[Symbol {
                st_name: 1,
                ..Symbol::default()
            }],
        );
        let mut symtab = SectionSpec::new(0, SHT_DYNSYM, syms);
        symtab.sh_link = 1;
        b.section(symtab);
        let elf = ElfFile::parse(b.build()).expect("valid ELF");
        assert_eq!(elf.symbols(2).err(), Some(ElfError::NameOutOfBounds(1)));
    }

    #[test]
    fn symbol_count_truncates_partial_entry() {
        let mut b = ElfBuilder::new(Endian::Little);
        b.section(SectionSpec::new(0, SHT_STRTAB, b"\0a\0".to_vec()));
        let mut syms = symbols_bytes(
            Endian::Little,
            &[
                Symbol::default(),
                Symbol {
                    st_name: 1,
                    ..Symbol::default()
                },
            ],
        );
        syms.extend_from_slice(&[0xee; 23]);
        let mut symtab = SectionSpec::new(0, SHT_SYMTAB, syms);
        symtab.sh_link = 0;
        b.section(symtab);
        let elf = ElfFile::parse(b.build()).expect("valid ELF");
        let table = elf.symbols(1).expect("trailing bytes ignored");
        assert_eq!(table.len(), 2);
        assert_eq!(table.names, ["", "a"]);
    }

    #[test]
    fn minimal_file_end_to_end() {
        let mut b = ElfBuilder::new(Endian::Little);
        b.segment(ProgramHeader {
            p_type: PT_LOAD,
            p_flags: PF_R,
            p_filesz: ELF64_EHDR_SIZE as u64,
            p_memsz: ELF64_EHDR_SIZE as u64,
            ..ProgramHeader::default()
        });
        // Section 0 doubles as the section-name table.
        let names = b"\0.strtab\0.symtab\0foo\0".to_vec();
        let strtab = b.section(SectionSpec::new(1, SHT_STRTAB, names));
        let syms = symbols_bytes(
            Endian::Little,
            &[Symbol {
                st_name: 17,
                st_info: (STB_GLOBAL << 4) | STT_FUNC,
                st_shndx: 0,
                st_value: 0x40_1000,
                st_size: 12,
                ..Symbol::default()
            }],
        );
        let mut symtab = SectionSpec::new(9, SHT_SYMTAB, syms);
        symtab.sh_link = u32::from(strtab);
        let symtab = b.section(symtab);
        b.shstrndx(strtab);

        let elf = ElfFile::parse(b.build()).expect("valid ELF");
        assert_eq!(elf.segments().len(), 1);
        assert_eq!(elf.sections().len(), 2);
        assert_eq!(elf.section_name(0).as_deref(), Ok(".strtab"));
        assert_eq!(elf.section_name(1).as_deref(), Ok(".symtab"));

        let table = elf.symbols(usize::from(symtab)).expect("valid symtab");
        assert_eq!(table.names, ["foo"]);
        assert_eq!(table.symbols[0].st_value, 0x40_1000);
        assert_eq!(table.symbols[0].st_size, 12);
    }
}
