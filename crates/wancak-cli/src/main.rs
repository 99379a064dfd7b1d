//! Wancak CLI — entry point.

use clap::{CommandFactory, Parser};

use wancak::Wancak;
use wancak_cli::cli::{execute, Cli, Commands};
use wancak_cli::output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "wancak", &mut std::io::stdout());
        return Ok(());
    }

    let result = async {
        let config = cli.client_config(|key| std::env::var(key).ok());
        tracing::debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "client config");
        let client = Wancak::new(&config)?;
        execute(&cli.command, &client).await
    }
    .await;

    match result {
        Ok(value) => {
            println!("{}", output::render(&value, cli.compact));
            Ok(())
        }
        Err(e) => {
            if cli.json_errors {
                println!("{}", output::render(&output::error_json(&e), cli.compact));
            } else {
                eprintln!("Error: {e:#}");
            }
            std::process::exit(1);
        }
    }
}
