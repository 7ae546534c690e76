use anyhow::Result;
use clap::Parser;

mod app;
mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();

    // The token helper is a standalone surface; it shares no state
    // with the chat console.
    if let Some(Commands::Token {
        name,
        description,
        expiration,
        organization,
        copy,
    }) = cli.command.take()
    {
        let form = ghchat_token::TokenForm {
            name,
            description,
            expiration,
            organization,
        };
        return app::run_token_command(form, copy);
    }

    app::run_repl_mode(&cli).await
}
