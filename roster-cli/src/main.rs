//! Roster CLI - query user rosters from your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env, Target};

mod commands;
mod output;

use commands::{demo, filter, join, query, status};

/// Roster - query user rosters from your terminal
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    /// User file (.json or .csv). JSON may also be piped on stdin.
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a summary of the roster
    Status,

    /// List first names in reverse alphabetical order
    Names,

    /// List users by age (oldest first), then first name
    Sort,

    /// List every distinct privilege, in order of first appearance
    Privileges,

    /// Find a user older than the given age
    Find {
        /// Age the user must be strictly older than
        #[arg(long)]
        older_than: u32,
    },

    /// Group users by how many privileges they hold
    GroupByCount,

    /// Show the average age (-1 for an empty roster)
    Average,

    /// Show the most frequent last name shared by at least two users
    MostFrequent,

    /// List users matching every filter (e.g. --where age>30 --where privilege=read)
    Filter {
        /// Filter expression: age>N, age<N, age=N, first_name=X, last_name=X,
        /// privilege=P, privileges>=N
        #[arg(long = "where", value_name = "EXPR")]
        filters: Vec<String>,
    },

    /// Join one field of every user into a single line
    Join {
        /// Text placed between values (defaults to the configured delimiter)
        #[arg(short, long)]
        delimiter: Option<String>,
        /// Field to join: first_name, last_name, full_name, age
        #[arg(long, default_value = "first_name")]
        field: String,
    },

    /// Group users by each privilege they hold
    GroupByPrivilege,

    /// Count users per last name
    CountLastNames,

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },
}

fn init_logging() {
    Builder::from_env(Env::new().filter_or("ROSTER_LOG", "warn"))
        .target(Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = cli.file.as_deref();
    let json = cli.json;

    match cli.command {
        Commands::Status => status::run(file, json),
        Commands::Names => query::names(file, json),
        Commands::Sort => query::sort(file, json),
        Commands::Privileges => query::privileges(file, json),
        Commands::Find { older_than } => query::find(file, older_than, json),
        Commands::GroupByCount => query::group_by_count(file, json),
        Commands::Average => query::average(file, json),
        Commands::MostFrequent => query::most_frequent(file, json),
        Commands::Filter { filters } => filter::run(file, &filters, json),
        Commands::Join { delimiter, field } => join::run(file, delimiter.as_deref(), &field, json),
        Commands::GroupByPrivilege => query::group_by_privilege(file, json),
        Commands::CountLastNames => query::count_last_names(file, json),
        Commands::Demo { command } => demo::run(command),
    }
}
