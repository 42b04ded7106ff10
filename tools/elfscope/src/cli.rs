//! Command-line interface definitions for elfscope.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

/// Print the headers, tables and symbols of an ELF64 file.
#[derive(Parser)]
#[command(name = "elfscope", version, about)]
pub struct Cli {
    /// ELF64 file to inspect.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(flatten)]
    pub select: Selection,

    /// Demangle symbol names.
    #[arg(short = 'C', long)]
    pub demangle: bool,

    /// Only log errors.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log decoder progress (repeat for trace output).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Part selection flags. Naming none selects every part.
#[derive(Args, Clone, Copy, Debug)]
pub struct Selection {
    /// Print the program headers (segments).
    #[arg(short = 'l', long)]
    pub segments: bool,

    /// Print the section headers.
    #[arg(short = 'S', long)]
    pub sections: bool,

    /// Print every symbol table.
    #[arg(short = 's', long)]
    pub symbols: bool,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable tables.
    Text,
    /// A single JSON document.
    Json,
}

/// Which parts of the report to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parts {
    /// File header and program headers.
    pub segments: bool,
    /// Section headers.
    pub sections: bool,
    /// Symbol tables.
    pub symbols: bool,
}

impl Parts {
    /// Everything.
    pub const ALL: Self = Self {
        segments: true,
        sections: true,
        symbols: true,
    };
}

impl Cli {
    /// The selected report parts; all of them when none is named.
    pub fn parts(&self) -> Parts {
        let Selection {
            segments,
            sections,
            symbols,
        } = self.select;
        if !(segments || sections || symbols) {
            return Parts::ALL;
        }
        Parts {
            segments,
            sections,
            symbols,
        }
    }
}
