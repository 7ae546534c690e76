use anyhow::Result;
use colored::Colorize;

use ghchat_token::TokenForm;

/// Print (and optionally copy) the prefilled token settings URL.
///
/// The generated secret is never seen by this program; the user copies
/// it back by hand into the chat console's token configuration.
pub fn run_token_command(form: TokenForm, copy: bool) -> Result<()> {
    let url = form.build_url();
    println!("{}", url);
    println!(
        "{}",
        "On the settings page, set Account permissions -> Models to Read.".bright_black()
    );

    if copy {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
            Ok(()) => println!("{} Copied URL to clipboard", "✓".bright_green()),
            Err(e) => eprintln!("{} Failed to copy to clipboard: {}", "⚠️".yellow(), e),
        }
    }

    Ok(())
}
