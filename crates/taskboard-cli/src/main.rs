/*
[INPUT]:  CLI arguments, board file on disk
[OUTPUT]: Mutated board file and rendered lanes
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or rendering
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskboard_cli::{CommandError, Commands};
use taskboard_core::{Lane, Registry};
use taskboard_store::{BoardStore, StoreError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    version,
    about = "Three-lane task board with flat-file persistence"
)]
struct Cli {
    /// Board file; defaults to the platform data directory
    #[arg(long = "board", value_name = "PATH")]
    board_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task to the pending lane
    Add { name: String },
    /// Rename a pending task
    Edit { index: usize, name: String },
    /// Move a pending task to in progress
    Start { index: usize },
    /// Set progress (0-100) on an in-progress task
    Progress { index: usize, value: String },
    /// Complete an in-progress task
    Done { index: usize },
    /// Sort the pending lane by name
    Sort,
    /// Empty the completed lane
    ClearDone,
    /// Print all three lanes
    Show,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let path = match args.board_path {
        Some(path) => path,
        None => BoardStore::default_path().context("resolve default board path")?,
    };
    let mut commands = Commands::new(BoardStore::new(path));

    // A board that has never been saved starts empty; every other load
    // failure is surfaced to the user.
    match commands.load() {
        Ok(()) => {}
        Err(CommandError::Store(StoreError::Io(err)))
            if err.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!("no board file yet, starting empty");
        }
        Err(err) => return Err(err).context("load board"),
    }

    run_command(&mut commands, args.command)
}

fn run_command(commands: &mut Commands, command: Command) -> Result<()> {
    match command {
        Command::Add { name } => {
            commands.add_task(&name).context("add task")?;
            commands.save().context("save board")?;
        }
        Command::Edit { index, name } => {
            commands.edit_task(index, &name).context("edit task")?;
            commands.save().context("save board")?;
        }
        Command::Start { index } => {
            commands
                .move_to_in_progress(index)
                .context("move task to in progress")?;
            commands.save().context("save board")?;
        }
        Command::Progress { index, value } => {
            commands.set_progress(index, &value).context("set progress")?;
            commands.save().context("save board")?;
        }
        Command::Done { index } => {
            commands.complete_task(index).context("complete task")?;
            commands.save().context("save board")?;
        }
        Command::Sort => {
            commands.sort_tasks();
            commands.save().context("save board")?;
        }
        Command::ClearDone => {
            commands.clear_completed();
            commands.save().context("save board")?;
        }
        Command::Show => render_board(commands.registry()),
    }
    Ok(())
}

fn render_board(registry: &Registry) {
    let lanes = [
        (Lane::Pending, registry.pending()),
        (Lane::InProgress, registry.in_progress()),
        (Lane::Completed, registry.completed()),
    ];
    for (lane, tasks) in lanes {
        println!("{lane}:");
        if tasks.is_empty() {
            println!("  (none)");
            continue;
        }
        for (index, task) in tasks.iter().enumerate() {
            println!("  [{index}] {task}");
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
