// src/main.rs

use anyhow::Result;
use clap::Parser;
use projtext::cli::Cli;
use projtext::config::{settings, ConfigBuilder};
use projtext::errors::Error;
use projtext::output::{sink, summary};
use projtext::signal::setup_signal_handler;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "projtext=debug".parse().unwrap()
                } else {
                    "projtext=info".parse().unwrap()
                },
            ),
        )
        .init();

    log::debug!("Starting projtext v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let persisted = match settings::load() {
        Ok(persisted) => persisted,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = match ConfigBuilder::from_cli_and_settings(cli, persisted).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let token = setup_signal_handler()?;

    let outcome = match projtext::export(&config, &token) {
        Ok(outcome) => outcome,
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // The sinks are independent: a failure in one is reported and must not
    // stop the other.
    let mut sink_failed = false;
    let mut export_file = None;
    if config.create_file {
        match sink::write_export_file(&config.root, &outcome.export) {
            Ok(name) => export_file = Some(name),
            Err(e) => {
                eprintln!("Error: {}", e);
                sink_failed = true;
            }
        }
    }

    #[cfg(feature = "clipboard")]
    if config.copy_to_clipboard {
        if let Err(e) = sink::copy_to_clipboard(&outcome.export) {
            eprintln!("Error: {}", e);
            sink_failed = true;
        }
    }

    println!("{}", summary::format_summary(&outcome, export_file.as_deref()));

    if sink_failed {
        std::process::exit(1);
    }
    Ok(())
}
