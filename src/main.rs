mod cli;
mod error;
mod fetch;
mod filters;
mod fmt;
mod grouping;
mod models;
mod session;
mod settings;
mod sheet;
mod state;
mod store;
mod views;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            creator_id,
            va_id,
            timezone,
            assignments_url,
            va_tasks_url,
            hub_url,
        } => cli::init::run(creator_id, va_id, timezone, assignments_url, va_tasks_url, hub_url),
        Commands::Assignments {
            id,
            creator_id,
            yesterday,
            date,
            file,
        } => cli::assignments::run(id, creator_id, yesterday, date, file),
        Commands::Tasks {
            id,
            account,
            creator,
            date,
            file,
        } => cli::tasks::run(id, account, creator, date, file),
        Commands::Hub { id, file } => cli::hub::run(id, file),
        Commands::Upcoming { id, date, file } => cli::upcoming::run(id, date, file),
        Commands::Film {
            position,
            undo,
            id,
            file,
        } => cli::mark::film(position, undo, id, file),
        Commands::Post {
            position,
            undo,
            id,
            file,
        } => cli::mark::post(position, undo, id, file),
        Commands::Complete { id } => cli::mark::complete(id),
        Commands::Read { position, id, file } => cli::mark::read(position, id, file),
        Commands::Status => cli::status::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "opshub", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
