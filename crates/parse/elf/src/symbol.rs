//! ELF64 symbol table entries.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::ident::Endian;
use crate::table::Record;

/// Size of an ELF64 symbol entry (24 bytes).
pub const ELF64_SYM_SIZE: usize = 24;

/// Symbol type: unspecified.
pub const STT_NOTYPE: u8 = 0;
/// Symbol type: data object.
pub const STT_OBJECT: u8 = 1;
/// Symbol type: function.
pub const STT_FUNC: u8 = 2;
/// Symbol type: section.
pub const STT_SECTION: u8 = 3;
/// Symbol type: source file name.
pub const STT_FILE: u8 = 4;
/// Symbol type: uninitialized common block.
pub const STT_COMMON: u8 = 5;
/// Symbol type: thread-local storage.
pub const STT_TLS: u8 = 6;
/// Symbol type: GNU indirect function.
pub const STT_GNU_IFUNC: u8 = 10;

/// Symbol binding: local.
pub const STB_LOCAL: u8 = 0;
/// Symbol binding: global.
pub const STB_GLOBAL: u8 = 1;
/// Symbol binding: weak.
pub const STB_WEAK: u8 = 2;
/// Symbol binding: GNU unique.
pub const STB_GNU_UNIQUE: u8 = 10;

/// Symbol visibility: default.
pub const STV_DEFAULT: u8 = 0;
/// Symbol visibility: internal.
pub const STV_INTERNAL: u8 = 1;
/// Symbol visibility: hidden.
pub const STV_HIDDEN: u8 = 2;
/// Symbol visibility: protected.
pub const STV_PROTECTED: u8 = 3;

/// Parsed ELF64 symbol table entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Symbol {
    /// Offset into the associated string table for this symbol's name.
    pub st_name: u32,
    /// Symbol type and binding packed into one byte.
    pub st_info: u8,
    /// Symbol visibility in the low two bits.
    pub st_other: u8,
    /// Section index this symbol is defined in.
    pub st_shndx: u16,
    /// Symbol value (address for defined symbols).
    pub st_value: u64,
    /// Symbol size in bytes.
    pub st_size: u64,
}

impl Record for Symbol {
    const SIZE: usize = ELF64_SYM_SIZE;

    fn decode(b: &[u8], endian: Endian) -> Self {
        Self {
            st_name: endian.read_u32(b, 0),
            st_info: b[4],
            st_other: b[5],
            st_shndx: endian.read_u16(b, 6),
            st_value: endian.read_u64(b, 8),
            st_size: endian.read_u64(b, 16),
        }
    }
}

impl Symbol {
    /// Returns the symbol type (lower 4 bits of `st_info`).
    #[must_use]
    pub fn sym_type(&self) -> u8 {
        self.st_info & 0xf
    }

    /// Returns the symbol binding (upper 4 bits of `st_info`).
    #[must_use]
    pub fn sym_bind(&self) -> u8 {
        self.st_info >> 4
    }

    /// Returns the symbol visibility (lower 2 bits of `st_other`).
    #[must_use]
    pub fn visibility(&self) -> u8 {
        self.st_other & 0x3
    }
}

/// Name of a symbol type, if known.
#[must_use]
pub fn symbol_type_name(sym_type: u8) -> Option<&'static str> {
    Some(match sym_type {
        STT_NOTYPE => "NOTYPE",
        STT_OBJECT => "OBJECT",
        STT_FUNC => "FUNC",
        STT_SECTION => "SECTION",
        STT_FILE => "FILE",
        STT_COMMON => "COMMON",
        STT_TLS => "TLS",
        STT_GNU_IFUNC => "IFUNC",
        _ => return None,
    })
}

/// Name of a symbol binding, if known.
#[must_use]
pub fn symbol_bind_name(bind: u8) -> Option<&'static str> {
    Some(match bind {
        STB_LOCAL => "LOCAL",
        STB_GLOBAL => "GLOBAL",
        STB_WEAK => "WEAK",
        STB_GNU_UNIQUE => "UNIQUE",
        _ => return None,
    })
}

/// Name of a symbol visibility.
#[must_use]
pub fn symbol_visibility_name(visibility: u8) -> Option<&'static str> {
    Some(match visibility {
        STV_DEFAULT => "DEFAULT",
        STV_INTERNAL => "INTERNAL",
        STV_HIDDEN => "HIDDEN",
        STV_PROTECTED => "PROTECTED",
        _ => return None,
    })
}

/// A decoded symbol table with every name resolved.
///
/// `symbols[i]` is named by `names[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable<'a> {
    /// Index of the symbol table section.
    pub section: usize,
    /// Index of the linked string table section.
    pub strtab: usize,
    /// Symbol records in table order.
    pub symbols: Vec<Symbol>,
    /// Resolved names, index-aligned with `symbols`.
    pub names: Vec<Cow<'a, str>>,
}

impl SymbolTable<'_> {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates `(symbol, name)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &str)> {
        self.symbols
            .iter()
            .zip(self.names.iter().map(AsRef::as_ref))
    }

    /// Finds the first symbol with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.iter().find(|&(_, n)| n == name).map(|(sym, _)| sym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::encode_symbol;

    #[test]
    fn decode_every_field() {
        let sym = Symbol {
            st_name: 9,
            st_info: (STB_GLOBAL << 4) | STT_FUNC,
            st_other: STV_HIDDEN,
            st_shndx: 2,
            st_value: 0x1000,
            st_size: 0x42,
        };
        for endian in [Endian::Little, Endian::Big] {
            let bytes = encode_symbol(endian, &sym);
            assert_eq!(Symbol::decode(&bytes, endian), sym);
        }
    }

    #[test]
    fn info_and_other_unpacking() {
        let sym = Symbol {
            st_info: 0x12,
            st_other: 0xfe, // upper bits are not visibility
            ..Symbol::default()
        };
        assert_eq!(sym.sym_type(), STT_FUNC);
        assert_eq!(sym.sym_bind(), STB_GLOBAL);
        assert_eq!(sym.visibility(), STV_HIDDEN);
        assert_eq!(symbol_type_name(sym.sym_type()), Some("FUNC"));
        assert_eq!(symbol_bind_name(sym.sym_bind()), Some("GLOBAL"));
        assert_eq!(symbol_visibility_name(sym.visibility()), Some("HIDDEN"));
        assert_eq!(symbol_type_name(0xd), None);
    }

    #[test]
    fn table_iteration_is_index_aligned() {
        let table = SymbolTable {
            section: 2,
            strtab: 1,
            symbols: vec![
                Symbol::default(),
                Symbol {
                    st_value: 0x10,
                    ..Symbol::default()
                },
            ],
            names: vec![Cow::Borrowed(""), Cow::Borrowed("main")],
        };
        assert_eq!(table.len(), 2);
        let pairs: Vec<_> = table.iter().map(|(s, n)| (s.st_value, n)).collect();
        assert_eq!(pairs, [(0, ""), (0x10, "main")]);
        assert_eq!(table.find("main").map(|s| s.st_value), Some(0x10));
        assert!(table.find("missing").is_none());
    }
}
