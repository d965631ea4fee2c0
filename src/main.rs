//! ibmctl - main entry point

use clap::Parser;
use log::{debug, info};

use ibmctl::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ibmctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli);

    if let Err(e) = ibmctl::run(&cli, |name| std::env::var(name).ok()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
