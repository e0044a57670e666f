mod cli;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    let no_color = cli.global.no_color;

    if let Err(err) = cli::run(cli) {
        cli::report::print_error(err.as_ref(), no_color);
        std::process::exit(1);
    }
}
