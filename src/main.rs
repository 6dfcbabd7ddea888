use anyhow::Result;
use clap::{Parser, Subcommand};

/// homepage - a small server-rendered site
#[derive(Parser)]
#[command(name = "homepage")]
#[command(about = "Serve the home, about and contact pages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = homepage::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    homepage::observability::init_observability(
        "homepage",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => homepage::server::serve(config, host, port).await,
    }
}
