//! spacex-cli - query launch records and serve the dashboard locally.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "spacex-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: spacex_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    spacex_cmd::run(cli.command).await
}
