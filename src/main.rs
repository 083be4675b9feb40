//! CLI entry point for the emoji mosaic generator

use clap::Parser;
use moji::io::cli::Cli;

fn main() -> moji::Result<()> {
    let cli = Cli::parse();
    moji::io::logging::init(cli.log_level());
    cli.run()
}
