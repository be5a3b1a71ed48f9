use clap::{Parser, Subcommand};
use dotenvy::dotenv;

pub mod app;

#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve,
    /// Reset the schema state and insert the demo dataset
    Seed,
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Serve => app::serve::main().await,
        Commands::Seed => app::seed::main(),
    }
}
