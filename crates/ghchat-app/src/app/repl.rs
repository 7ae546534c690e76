use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use ghchat_chat::{ChatSession, TurnOutcome};
use ghchat_token::TokenForm;

use crate::cli::Cli;

/// Run interactive REPL mode
pub async fn run_repl_mode(cli: &Cli) -> Result<()> {
    println!("{}", "GitHub Models chat console".bright_cyan().bold());
    println!(
        "{}",
        "Type 'exit' or 'quit' to leave, '/help' for commands\n".bright_black()
    );

    let token = cli.token.clone().unwrap_or_default();
    if token.is_empty() {
        println!(
            "{}",
            "No token configured - submissions stay blocked until one is set.".yellow()
        );
        println!(
            "{}",
            "Pass --token, set GITHUB_TOKEN, or build one with 'ghchat token'.\n".bright_black()
        );
    }

    let mut session = ChatSession::new(token);
    session.verbose = cli.verbose;
    if let Some(url) = &cli.api_url {
        session.api_url = url.clone();
    }
    if let Some(system) = &cli.system {
        session.system_prompt = system.clone();
    }
    if let Some(model) = &cli.model {
        session.registry.add(model);
        session.registry.select(model.trim());
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        let model_indicator = format!(
            "[{}]",
            session.registry.selected().unwrap_or("no model")
        )
        .bright_magenta();
        let readline = rl.readline(&format!("{} {} ", model_indicator, "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();

                if line.is_empty() {
                    continue;
                }

                if line == "exit" || line == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                if line.starts_with('/') {
                    handle_command(&mut session, &line);
                    continue;
                }

                rl.add_history_entry(&line)?;

                match session.submit(&line).await {
                    TurnOutcome::Reply { content, usage } => {
                        let model_label = format!(
                            "[{}]",
                            session.registry.selected().unwrap_or_default()
                        )
                        .bright_magenta();
                        println!(
                            "\n{} {} {}\n",
                            model_label,
                            "Assistant:".bright_blue().bold(),
                            content
                        );
                        if let Some(usage) = usage {
                            println!(
                                "{} Prompt: {} | Completion: {} | Total: {}\n",
                                "📊".bright_black(),
                                usage.prompt_tokens.to_string().bright_black(),
                                usage.completion_tokens.to_string().bright_black(),
                                usage.total_tokens.to_string().bright_black()
                            );
                        }
                    }
                    TurnOutcome::NoReply => {
                        eprintln!(
                            "{} No assistant reply for this turn; inspect it with /json.\n",
                            "⚠️".yellow()
                        );
                    }
                    // Missing precondition; stays silent per the
                    // submission contract
                    TurnOutcome::Blocked => {}
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

fn handle_command(session: &mut ChatSession, line: &str) {
    if line == "/help" {
        println!("{} Commands:", "💡".bright_cyan());
        println!("  /models            - list registered models");
        println!("  /add <model>       - add a model identifier");
        println!("  /remove <model>    - remove a model identifier");
        println!("  /use <model>       - select the model for requests");
        println!("  /system [text]     - show or set the system prompt");
        println!("  /system clear      - clear the system prompt");
        println!("  /system set <text> - set the prompt verbatim (even 'clear')");
        println!("  /json              - show last request/response JSON");
        println!("  /token-url         - show a prefilled token settings URL");
        println!("  /help              - show this help");
        return;
    }

    if line == "/models" {
        if session.registry.is_empty() {
            println!("{} No models registered", "ℹ️".bright_blue());
            return;
        }
        println!("{} Registered models:", "ℹ️".bright_blue());
        for model in session.registry.models() {
            let marker = if session.registry.selected() == Some(model.as_str()) {
                "*".bright_green()
            } else {
                " ".normal()
            };
            println!("  {} {}", marker, model);
        }
        return;
    }

    if let Some(id) = line.strip_prefix("/add ") {
        if session.registry.add(id) {
            println!("{} Added model: {}", "✓".bright_green(), id.trim());
        } else {
            println!("{} Model already registered (or empty name)", "ℹ️".bright_blue());
        }
        return;
    }

    if let Some(id) = line.strip_prefix("/remove ") {
        let id = id.trim();
        // Keeping one model around is a UI policy, not a registry rule
        if session.registry.len() <= 1 && session.registry.contains(id) {
            println!("{} Refusing to remove the last model", "⚠️".yellow());
            return;
        }
        if session.registry.remove(id) {
            println!("{} Removed model: {}", "✓".bright_green(), id);
            if let Some(selected) = session.registry.selected() {
                println!("{} Selected model is now: {}", "ℹ️".bright_blue(), selected);
            }
        } else {
            println!("{} No such model: {}", "⚠️".yellow(), id);
        }
        return;
    }

    if let Some(id) = line.strip_prefix("/use ") {
        let id = id.trim();
        if session.registry.select(id) {
            println!("{} Using model: {}", "✓".bright_green(), id);
        } else {
            println!("{} No such model: {} (add it first with /add)", "⚠️".yellow(), id);
        }
        return;
    }

    if line == "/system" {
        if session.system_prompt.trim().is_empty() {
            println!("{} No system prompt set", "ℹ️".bright_blue());
        } else {
            println!("{} System prompt: {}", "ℹ️".bright_blue(), session.system_prompt);
        }
        return;
    }

    // Verbatim setter, for prompts that collide with the subcommands
    // (a literal prompt of "clear")
    if let Some(text) = line.strip_prefix("/system set ") {
        session.system_prompt = text.trim().to_string();
        println!("{} System prompt set", "✓".bright_green());
        return;
    }

    if line == "/system clear" {
        session.system_prompt.clear();
        println!("{} System prompt cleared", "✓".bright_green());
        return;
    }

    if let Some(text) = line.strip_prefix("/system ") {
        session.system_prompt = text.trim().to_string();
        println!("{} System prompt set", "✓".bright_green());
        return;
    }

    if line == "/json" {
        match session.request_json() {
            Some(json) => println!("{}\n{}", "Request:".bright_yellow(), json),
            None => println!("{} No request issued yet", "ℹ️".bright_blue()),
        }
        match session.response_json() {
            Some(json) => println!("{}\n{}", "Response:".bright_yellow(), json),
            None => println!("{} No response received yet", "ℹ️".bright_blue()),
        }
        return;
    }

    if line == "/token-url" {
        let form = TokenForm {
            name: "GitHub model".to_string(),
            expiration: "30".to_string(),
            ..Default::default()
        };
        println!("{}", form.build_url());
        println!(
            "{}",
            "Run 'ghchat token --help' to customize the fields.".bright_black()
        );
        return;
    }

    println!("{} Unknown command: {} (try /help)", "⚠️".yellow(), line);
}
