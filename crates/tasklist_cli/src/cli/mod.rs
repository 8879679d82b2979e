use clap::Parser;
use std::io::BufRead;
use tasklist_core::error::AppError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Add a new task; text comes from the trailing words or standard input
    #[arg(long)]
    pub add: bool,

    /// Mark the task at position N as completed
    #[arg(long, value_name = "N")]
    pub complete: Option<usize>,

    /// Delete the task at position N
    #[arg(long, value_name = "N")]
    pub del: Option<usize>,

    /// Print the task table
    #[arg(long)]
    pub list: bool,

    /// Trailing words forming the task text for --add
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

/// One command per invocation, decoded once from the parsed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Complete(usize),
    Delete(usize),
    List,
}

impl Cli {
    /// Flags are honored in a fixed priority order: add, complete, del,
    /// list. A position of 0 behaves as "flag not given" and falls through
    /// to the next flag.
    pub fn command(&self) -> Option<Command> {
        if self.add {
            return Some(Command::Add(self.words.clone()));
        }
        if let Some(position) = self.complete.filter(|position| *position > 0) {
            return Some(Command::Complete(position));
        }
        if let Some(position) = self.del.filter(|position| *position > 0) {
            return Some(Command::Delete(position));
        }
        if self.list {
            return Some(Command::List);
        }
        None
    }
}

/// Resolves the task text for `--add`: the trailing words joined without a
/// separator, or a single line read from `reader` when no words were given.
/// Empty resulting text is rejected.
pub fn read_task_text<R: BufRead>(words: &[String], mut reader: R) -> Result<String, AppError> {
    let text = if words.is_empty() {
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|err| AppError::io(err.to_string()))?;
        line.trim_end_matches(['\r', '\n']).to_string()
    } else {
        words.concat()
    };

    if text.is_empty() {
        return Err(AppError::invalid_input("task cannot be empty"));
    }

    Ok(text)
}
