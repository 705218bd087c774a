use anyhow::Result;
use brocat_cli::{Cli, init_tracing, run};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;
    run(cli).await
}
