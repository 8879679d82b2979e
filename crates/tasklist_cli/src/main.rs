use clap::Parser;
use clap::error::ErrorKind;
use std::io;
use std::path::Path;
use tasklist_cli::cli::{Cli, Command, read_task_text};
use tasklist_cli::render::{Palette, render_table};
use tasklist_core::error::AppError;
use tasklist_core::storage::json_store;
use tasklist_core::task_list::TaskList;

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

/// Applies the single decoded command. Mutations are confirmed on stdout
/// only after the save succeeds, so the user never sees a success message
/// for a change that did not reach disk.
fn run_command(command: Command, path: &Path, mut list: TaskList) -> Result<(), AppError> {
    match command {
        Command::Add(words) => {
            let stdin = io::stdin();
            let text = read_task_text(&words, stdin.lock())?;
            let task = list.add(&text)?;
            json_store::save(path, &list)?;
            println!("Added task: {}", task.description);
        }
        Command::Complete(position) => {
            let task = list.complete(position)?;
            json_store::save(path, &list)?;
            println!("Completed task {}: {}", position, task.description);
        }
        Command::Delete(position) => {
            let task = list.delete(position)?;
            json_store::save(path, &list)?;
            println!("Deleted task {}: {}", position, task.description);
        }
        Command::List => {
            print!("{}", render_table(&list, &Palette::colored()));
        }
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                return;
            }
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    let Some(command) = cli.command() else {
        // Note: exit code 0, not an error.
        eprintln!("invalid command");
        return;
    };

    let path = json_store::store_path();

    // A failed load is reported but does not abort; the command runs against
    // an empty list.
    let list = match json_store::load(&path) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            TaskList::new()
        }
    };

    if let Err(err) = run_command(command, &path, list) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
