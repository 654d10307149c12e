//! condoctl - command-line client for the Condominium Management API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::{Cli, CommandContext, Commands, ConfigCommands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "condoctl=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Version => {
            println!("condoctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
        Commands::Endpoints => cli::endpoints::run(opts.format),
        Commands::Config(ConfigCommands::Set { key, value }) => {
            cli::config::set(&opts, key, &value)
        }
        command => {
            let ctx = CommandContext::new(&opts)?;
            match command {
                Commands::Login {
                    username,
                    password,
                    no_save,
                } => cli::login::run(&ctx, username, password, no_save).await,
                Commands::Get { endpoint } => cli::get::run(&ctx, &endpoint).await,
                Commands::Check {
                    paths,
                    only,
                    concurrency,
                } => cli::check::run(&ctx, &paths, only, concurrency).await,
                Commands::Cors { origins, endpoint } => {
                    cli::cors::run(&ctx, &origins, &endpoint).await
                }
                Commands::Status => cli::status::run(&opts, &ctx),
                Commands::Config(ConfigCommands::Show) => cli::config::show(&opts, &ctx),
                Commands::Version
                | Commands::Completion { .. }
                | Commands::Endpoints
                | Commands::Config(ConfigCommands::Set { .. }) => Ok(()),
            }
        }
    }
}
