// Line-driven session: the input boundary between a user and the store

use crate::input::{parse_task_id, validate_description};
use crate::store::TaskStore;
use eyre::{Context, Result, eyre};
use std::io::Write;
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  log            open the entry prompt; the next line becomes a task
  add <text>     log a task directly
  delete <id>    remove a task (alias: rm)
  list           redraw the task list
  help           show this message
  quit           leave (alias: exit)
In the entry prompt, type .close to cancel.";

/// Command typed while the entry prompt is closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Log,
    Add(String),
    Delete(String),
    List,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word {
            "log" => Ok(Command::Log),
            "add" => Ok(Command::Add(rest.to_string())),
            "delete" | "rm" => Ok(Command::Delete(rest.to_string())),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err(eyre!("Empty command, type 'help' for usage")),
            other => Err(eyre!("Unknown command '{}', type 'help' for usage", other)),
        }
    }
}

/// What the driver loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Routes input lines into store operations
///
/// Boundary rejections (blank descriptions, bad ids, unknown commands) are
/// written to `messages` and never reach the store. The only errors returned
/// from [`Session::handle_line`] are failures to write those messages.
pub struct Session<W: Write> {
    store: TaskStore,
    messages: W,
    entry_open: bool,
}

impl<W: Write> Session<W> {
    pub fn new(store: TaskStore, messages: W) -> Self {
        Self {
            store,
            messages,
            entry_open: false,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn messages(&self) -> &W {
        &self.messages
    }

    /// Whether the entry prompt (the "modal") is currently open
    pub fn is_entry_open(&self) -> bool {
        self.entry_open
    }

    /// Prompt to show for the current mode
    pub fn prompt<'a>(&self, command_prompt: &'a str) -> &'a str {
        if self.entry_open { "task> " } else { command_prompt }
    }

    /// Draw the initial list
    pub fn start(&mut self) {
        self.store.refresh();
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        if self.entry_open {
            return self.handle_entry(line);
        }

        let command = match Command::parse(line) {
            Ok(c) => c,
            Err(e) => {
                self.reject(&e)?;
                return Ok(Outcome::Continue);
            }
        };
        debug!(?command, "handle_line: dispatching");

        match command {
            Command::Log => {
                self.entry_open = true;
                writeln!(self.messages, "Describe the task (.close to cancel)").context("Failed to write message")?;
            }
            Command::Add(text) => {
                self.submit(&text)?;
            }
            Command::Delete(raw) => match parse_task_id(&raw) {
                Ok(id) => {
                    if !self.store.delete(id) {
                        debug!(id, "No task with that id");
                    }
                }
                Err(e) => self.reject(&e)?,
            },
            Command::List => self.store.refresh(),
            Command::Help => {
                writeln!(self.messages, "{}", HELP).context("Failed to write message")?;
            }
            Command::Quit => return Ok(Outcome::Quit),
        }

        Ok(Outcome::Continue)
    }

    fn handle_entry(&mut self, line: &str) -> Result<Outcome> {
        if line.trim() == ".close" {
            self.entry_open = false;
            return Ok(Outcome::Continue);
        }

        // A rejected description leaves the prompt open for another try
        if self.submit(line)? {
            self.entry_open = false;
        }
        Ok(Outcome::Continue)
    }

    /// Validate and add; returns whether a task was added
    fn submit(&mut self, raw: &str) -> Result<bool> {
        match validate_description(raw) {
            Ok(description) => {
                let task = self.store.add(description);
                info!(id = task.id(), "Task logged");
                Ok(true)
            }
            Err(e) => {
                self.reject(&e)?;
                Ok(false)
            }
        }
    }

    fn reject(&mut self, error: &eyre::Report) -> Result<()> {
        writeln!(self.messages, "error: {}", error).context("Failed to write message")?;
        Ok(())
    }
}
