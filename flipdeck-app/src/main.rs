mod cli;
pub mod tui;

use anyhow::Result;
use clap::Parser;

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flipdeck_core=info".parse()?)
                .add_directive("flipdeck_json=info".parse()?),
        )
        .init();

    let args = Cli::parse();
    run_cli(args)
}
