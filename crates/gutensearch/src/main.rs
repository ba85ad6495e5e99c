use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    dispatch(cli.command)
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Authors { author, ids } => cli::authors::run(&author, ids),
        Commands::Fetch { ids_file, store } => {
            cli::fetch::run(ids_file.as_deref(), store.as_deref())
        }
        Commands::Index { store, db } => cli::index::run(store.as_deref(), db.as_deref()),
        Commands::Query { query_file, db } => cli::query::run(&query_file, db.as_deref()),
    }
}
