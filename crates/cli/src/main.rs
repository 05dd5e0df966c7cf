use std::io;

use clap::Parser;
use stockroom_cli::Cli;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init_with_default("warn");

    let cli = Cli::parse();
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    stockroom_cli::run(&cli, &mut input, &mut out)
}
