//! Argument definitions and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use serde_json::{json, Value};

use wancak::{ClientConfig, Fetcher, Section, Wancak};

#[derive(Parser, Debug)]
#[command(
    name = "wancak",
    about = "Wancak — scrape 1cak.com listings and posts as JSON",
    version,
    after_help = "Pass the `next` value of a listing as --page to fetch the following page."
)]
pub struct Cli {
    /// Site root (also read from WANCAK_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds (also read from WANCAK_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Report failures as a JSON object on stdout.
    #[arg(long, global = true)]
    pub json_errors: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Posts of a section (lol, trend, recent, legendary)
    Section {
        /// Section slug
        name: String,
        /// Cursor from a previous page's `next`
        #[arg(long)]
        page: Option<String>,
    },
    /// Search posts by keyword
    Search {
        /// Search keywords
        query: String,
        /// Cursor from a previous page's `next`
        #[arg(long)]
        page: Option<String>,
    },
    /// A single post by id (random when omitted)
    Post {
        /// Post id
        id: Option<String>,
    },
    /// A random post
    Random,
    /// List the available sections
    Sections,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}

impl Cli {
    /// Flags win over the environment, the environment over defaults.
    pub fn client_config(&self, env: impl Fn(&str) -> Option<String>) -> ClientConfig {
        let mut config = ClientConfig::default().with_env(env);
        if let Some(base_url) = &self.base_url {
            config = config.base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.timeout_ms(timeout);
        }
        config
    }
}

/// Run a scraping command and return its JSON output.
///
/// `Completions` writes to stdout directly and is handled by the binary.
pub async fn execute<F: Fetcher>(command: &Commands, client: &Wancak<F>) -> Result<Value> {
    let value = match command {
        Commands::Section { name, page } => {
            serde_json::to_value(client.section_posts(name, page.as_deref()).await?)?
        }
        Commands::Search { query, page } => {
            serde_json::to_value(client.search(query, page.as_deref()).await?)?
        }
        Commands::Post { id } => {
            serde_json::to_value(client.post(id.as_deref().unwrap_or("")).await?)?
        }
        Commands::Random => serde_json::to_value(client.random_post().await?)?,
        Commands::Sections => sections_json(),
        Commands::Completions { .. } => {
            anyhow::bail!("completions are generated by the binary, not executed")
        }
    };
    Ok(value)
}

pub fn sections_json() -> Value {
    Value::Array(
        Section::ALL
            .iter()
            .map(|s| json!({ "slug": s.slug(), "label": s.label() }))
            .collect(),
    )
}
