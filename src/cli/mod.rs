mod args;
mod config;
mod global;
mod handlers;
mod logging;
pub mod report;

use clap::{Parser, Subcommand};
use rhakimi::TableRegistry;

use args::{DecodeArgs, DemoArgs, EncodeArgs, TablesArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "rhakimi")]
#[command(version)]
#[command(
    about = "Reversible table codec: write any text using only the characters you choose",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode text into table symbols
    Encode(EncodeArgs),
    /// Decode table symbols back into text
    Decode(DecodeArgs),
    /// Round-trip a sample text and print each stage
    Demo(DemoArgs),
    /// List the configured tables
    Tables(TablesArgs),
}

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    logging::setup_logging(&cli.global, report::should_use_color(cli.global.no_color));

    // Load tables configuration with user overrides
    let config = TableRegistry::load_with_overrides()?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Demo(args) => handlers::demo::handle(args, &config),
        Commands::Tables(args) => handlers::tables::handle(args, &config),
    }
}
