//! LCA CLI - snapshot reference data and print dashboard pages.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lca-cli",
    version,
    about = "Electricity life-cycle assessment data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: lca_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the variables may come from the environment
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Ok(path) = dotenv {
        log::info!("loaded {}", path.display());
    }
    let cli = Cli::parse();
    lca_cmd::run(cli.command).await
}
