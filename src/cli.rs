use crate::engine::{ExtractConfig, PageRange};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Rebuild a document outline from its printed table of contents.
#[derive(Debug, Parser)]
#[command(name = "autotoc", version)]
pub struct Args {
    /// PDF, or plain text with form feeds between pages
    pub input: PathBuf,

    /// First page of the contents (1-based)
    #[arg(long, short = 'b')]
    pub begin: usize,

    /// Last page of the contents (inclusive)
    #[arg(long, short = 'e')]
    pub end: usize,

    /// Added to every page number; defaults to the page after `--end`
    #[arg(long, short = 'o', allow_negative_numbers = true)]
    pub offset: Option<i64>,

    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl From<Args> for ExtractConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            range: PageRange::new(args.begin, args.end),
            offset: args.offset,
            format: args.format,
            output: args.output,
        }
    }
}
