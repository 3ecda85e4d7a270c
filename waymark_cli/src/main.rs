use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tracing::debug;

use crate::{
    generate::GenerateSubcommands, info::InfoArgs, prepare::PrepareArgs, route::RouteArgs,
};

mod config;
mod generate;
mod info;
mod parsers;
mod prepare;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,

    /// JSON file with routing settings, flags take precedence
    #[arg(short, long, global = true, env = "WAYMARK_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
    /// Computes landmarks for a stored graph
    Prepare {
        #[command(flatten)]
        args: PrepareArgs,
    },
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    Info {
        #[command(flatten)]
        args: InfoArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let env_file = dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if let Some(env_file) = env_file {
        debug!("Loaded environment from {}", env_file.display());
    }

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        Some(Commands::Prepare { args }) => prepare::run(args, config)?,
        Some(Commands::Route { args }) => route::run(args, config)?,
        Some(Commands::Info { args }) => info::run(args)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
