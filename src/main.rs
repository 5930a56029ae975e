use anyhow::Error;
use clap::{CommandFactory, Parser};

use args::{Args, SubCommands};

mod args;
mod clients;
mod commands;
mod models;
mod prompts;
mod repos;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "tinystep=info".to_string()))
        .init();
    let args = Args::parse();
    match args.subcmd {
        Some(SubCommands::Decompose(cmd)) => commands::decompose::run(&cmd).await?,
        Some(SubCommands::Simplify(cmd)) => commands::simplify::run(&cmd).await?,
        Some(SubCommands::Config(cmd)) => commands::config::run(&cmd)?,
        None => {
            Args::command().print_help()?;
        }
    };
    Ok(())
}
