// src/main.rs

use anyhow::Result;
use clap::Parser;
use slncat::cli::Cli;
use slncat::config::ConfigBuilder;
use slncat::errors::Error;
use slncat::run;
use slncat::signal::setup_signal_handler;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let default_directive = if cfg!(debug_assertions) {
        "slncat=debug"
    } else {
        "slncat=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse()?),
        )
        .init();

    log::info!("Starting slncat v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        // Configuration problems are reported, not treated as failures.
        Err(e) if e.is_config_error() => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    // --- Execution ---
    let mut stdout = std::io::stdout().lock();
    let result = run(&config, &token, &mut stdout);

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
