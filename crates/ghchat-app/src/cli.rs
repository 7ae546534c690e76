use clap::{Parser, Subcommand};

/// CLI arguments for ghchat
#[derive(Parser)]
#[command(name = "ghchat")]
#[command(about = "Chat console for the GitHub Models inference API")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Bearer token for the inference API (fine-grained GitHub token
    /// with Models: Read)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Model identifier to select at startup (added to the registry
    /// if not already present)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// System prompt prepended to every outbound payload
    #[arg(long, value_name = "TEXT")]
    pub system: Option<String>,

    /// Override the inference endpoint URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a prefilled GitHub fine-grained token settings URL
    Token {
        /// Token name
        #[arg(long, default_value = "GitHub model")]
        name: String,
        /// Token description
        #[arg(long, default_value = "")]
        description: String,
        /// Expiration in days
        #[arg(long, default_value = "30")]
        expiration: String,
        /// Resource owner organization (omitted when empty)
        #[arg(long, default_value = "")]
        organization: String,
        /// Copy the generated URL to the system clipboard
        #[arg(long)]
        copy: bool,
    },
}
