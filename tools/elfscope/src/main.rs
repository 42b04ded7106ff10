//! elfscope: inspect ELF64 files.
//!
//! Pipeline: read file → decode headers and tables → build report →
//!           print as text or JSON.

mod cli;
mod logger;
mod output;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use elfscope_elf::ElfFile;

use crate::cli::{Cli, Format};
use crate::report::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);

    let data = std::fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    log::info!("read {} bytes from {}", data.len(), cli.file.display());

    let elf = ElfFile::parse(data)?;
    let report = Report::build(&elf, cli.parts(), cli.demangle)?;

    let mut out = std::io::stdout().lock();
    match emit(&mut out, &report, cli.format) {
        // A closed reader (`elfscope a.out | head`) ends the output early.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.map_err(Into::into),
    }
}

/// Writes the finished report in the chosen format.
fn emit(out: &mut impl Write, report: &Report, format: Format) -> io::Result<()> {
    match format {
        Format::Text => write!(out, "{report}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
