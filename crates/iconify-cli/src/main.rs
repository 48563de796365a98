//! `iconify-mcp` binary entry point.

use clap::Parser;
use iconify_cli::{CliArgs, IconifyCli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let cli = IconifyCli::from_args("iconify-mcp", &args)?;
    cli.run(args).await?;
    Ok(())
}
