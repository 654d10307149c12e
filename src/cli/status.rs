//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::session::TokenStore;

/// Run the status command to display configuration and login status
pub fn run(opts: &GlobalOptions, ctx: &CommandContext) -> Result<()> {
    println!("{}\n", "condoctl Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!("API URL: {}", ctx.config.api_url().cyan());
    println!();

    match ctx.store.get()? {
        Some(token) => {
            println!("{} Token stored ({})", "✓".green(), token.masked());
        }
        None => {
            println!("{} No token stored", "✗".red());
            println!("  → Run 'condoctl login' to authenticate");
        }
    }
    println!(
        "{} Token file: {}",
        "○".dimmed(),
        ctx.store.path().display()
    );
    println!(
        "{} Missing-token header: {}",
        "○".dimmed(),
        ctx.missing_token
    );
    println!();

    Ok(())
}
