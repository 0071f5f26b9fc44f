use anyhow::Result;
use biblio::cli::{Cli, init_tracing};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}
