use clap::Parser;
use staff_form::cli::{Cli, run};
use staff_form::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; flags and real env vars still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logger(&cli.config.log_level, cli.config.log_json)?;
    tracing::info!(api_url = %cli.config.api_url, "Staff form starting");

    run(cli).await
}
