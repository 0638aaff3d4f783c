use std::path::{Path, PathBuf};

use clap::Parser;

pub const DEFAULT_FILE: &str = "musicTermsDataProd.json";
pub const DEFAULT_INDENT: u8 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "term-examples",
    version,
    about = "Fill in example pieces (English and Chinese) for a music-term catalog"
)]
pub struct Cli {
    /// Catalog file: a JSON array of term records
    #[arg(env = "TERM_EXAMPLES_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Write the enriched catalog here instead of overwriting FILE
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level in the written file
    #[arg(
        long,
        default_value_t = DEFAULT_INDENT,
        value_parser = clap::value_parser!(u8).range(0..=16)
    )]
    pub indent: u8,

    /// Report what would change without writing anything
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail if any record is missing up-to-date examples; writes nothing
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
    Check,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Write
        }
    }

    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.file)
    }
}
