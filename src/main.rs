use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tasklog::input::validate_description;
use tasklog::{Config, Outcome, Session, TaskStore, TextRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklog")]
#[command(about = "TaskLog - log and delete to-do items from the terminal")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config_dir>/tasklog/tasklog.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,

    /// Add one task per argument and print the resulting list
    Add {
        /// Task descriptions
        #[arg(required = true)]
        descriptions: Vec<String>,

        /// Print the list as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Setup tracing; stderr keeps the rendered list on stdout clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&config),
        Commands::Add { descriptions, json } => run_add(&config, &descriptions, json),
    }
}

fn text_renderer(config: &Config) -> TextRenderer<io::Stdout> {
    TextRenderer::new(io::stdout())
        .with_timestamp_format(config.timestamp_format.clone())
        .with_color(config.color)
}

fn run_shell(config: &Config) -> Result<()> {
    let mut store = TaskStore::new();
    store.subscribe(text_renderer(config));

    let mut session = Session::new(store, io::stderr());
    session.start();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        eprint!("{}", session.prompt(&config.prompt));
        io::stderr().flush().context("Failed to flush prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read input")?,
            None => break,
        };

        if session.handle_line(&line)? == Outcome::Quit {
            break;
        }
    }

    Ok(())
}

fn run_add(config: &Config, descriptions: &[String], json: bool) -> Result<()> {
    let mut store = TaskStore::new();

    for raw in descriptions {
        let description = validate_description(raw)?;
        store.add(description);
    }

    if json {
        let out = serde_json::to_string_pretty(&store.list()).context("Failed to serialize tasks")?;
        println!("{}", out);
    } else {
        store.subscribe(text_renderer(config));
        store.refresh();
    }

    Ok(())
}
