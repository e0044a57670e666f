use clap::Args;
use std::path::PathBuf;

/// How the table is chosen: by name, inline, or from a file
#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Named table from the configuration (see `rhakimi tables`)
    #[arg(short = 't', long, value_name = "NAME", conflicts_with_all = ["chars", "table_file"])]
    pub table: Option<String>,

    /// Use these characters as the table
    #[arg(short = 'c', long, value_name = "SYMBOLS", conflicts_with = "table_file")]
    pub chars: Option<String>,

    /// Read the table characters from a file (`~` is expanded)
    #[arg(long, value_name = "PATH")]
    pub table_file: Option<String>,
}

/// Arguments for encoding text
#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding text
#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the sample round trip
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Text to round-trip
    #[arg(long, default_value = "Hello")]
    pub text: String,
}

/// Arguments for listing tables
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
