//! Bounds-checked ELF64 decoder.
//!
//! Interprets a raw byte buffer as an ELF64 object file: the identification
//! block, the file header, the program and section header tables, string
//! tables and symbol tables. Every multi-byte field is decoded in the byte
//! order announced by the identification block, and every read is checked
//! against the buffer before it happens. No unsafe code.
//!
//! # Usage
//!
//! ```
//! use elfscope_elf::{ElfError, ElfFile};
//!
//! fn dump(data: Vec<u8>) -> Result<(), ElfError> {
//!     let elf = ElfFile::parse(data)?;
//!     println!("entry = {:#x}", elf.header().e_entry);
//!     for index in elf.symbol_table_indices() {
//!         let table = elf.symbols(index)?;
//!         for (sym, name) in table.iter() {
//!             println!("{:#018x} {name}", sym.st_value);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod file;
pub mod header;
pub mod ident;
pub mod section;
pub mod segment;
pub mod strtab;
pub mod symbol;
mod table;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{ElfError, Table};
pub use file::ElfFile;
pub use header::{ELF64_EHDR_SIZE, FileHeader, FileType, machine_name};
pub use ident::{EI_NIDENT, Endian, Identification};
pub use section::{
    SHF_ALLOC, SHF_EXECINSTR, SHF_WRITE, SHN_ABS, SHN_COMMON, SHN_UNDEF, SHT_DYNSYM, SHT_NOBITS,
    SHT_NULL, SHT_PROGBITS, SHT_STRTAB, SHT_SYMTAB, SectionHeader, section_type_name,
};
pub use segment::{PF_R, PF_W, PF_X, PT_LOAD, ProgramHeader, segment_type_name};
pub use strtab::StringTable;
pub use symbol::{
    STB_GLOBAL, STB_LOCAL, STB_WEAK, STT_FUNC, STT_NOTYPE, STT_OBJECT, Symbol, SymbolTable,
    symbol_bind_name, symbol_type_name, symbol_visibility_name,
};
