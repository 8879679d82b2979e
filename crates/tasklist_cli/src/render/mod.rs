use tabled::builder::Builder;
use tabled::settings::object::{Cell, Rows};
use tabled::settings::{Alignment, Span, Style};
use tasklist_core::task_list::TaskList;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

const DISPLAY_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[day] [month repr:short] [year] [hour]:[minute]");

/// ANSI colors for the listing. Purely visual; an empty code means "leave
/// the text alone".
#[derive(Debug, Clone)]
pub struct Palette {
    pub done: &'static str,
    pub pending: &'static str,
    pub footer: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn colored() -> Self {
        Self {
            done: "\x1b[32m",
            pending: "\x1b[34m",
            footer: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }

    pub fn plain() -> Self {
        Self {
            done: "",
            pending: "",
            footer: "",
            reset: "",
        }
    }

    fn paint(&self, code: &'static str, text: &str) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", code, text, self.reset)
        }
    }
}

/// Formats the task list as a bordered table with 1-based row numbers and a
/// footer summarizing the pending count. Pure formatting, no state effect.
pub fn render_table(list: &TaskList, palette: &Palette) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Task", "Done?", "Created At", "Completed At"]);

    for (offset, task) in list.iter().enumerate() {
        let (text, done) = if task.done {
            (
                palette.paint(palette.done, &format!("\u{2705} {}", task.description)),
                palette.paint(palette.done, "yes"),
            )
        } else {
            (
                palette.paint(palette.pending, &task.description),
                palette.paint(palette.pending, "no"),
            )
        };

        builder.push_record([
            (offset + 1).to_string(),
            text,
            done,
            display_timestamp(&task.created_at),
            task.completed_at
                .as_deref()
                .map(display_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    let footer_row = list.len() + 1;
    let footer = format!("you have {} pending todos", list.count_pending());
    builder.push_record([palette.paint(palette.footer, &footer)]);

    let mut table = builder.build();
    table.with(Style::modern());
    table.modify(Rows::first(), Alignment::center());
    table.modify(Cell::new(footer_row, 0), Span::column(5));
    table.modify(Cell::new(footer_row, 0), Alignment::center());

    table.to_string()
}

fn display_timestamp(raw: &str) -> String {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|stamp| stamp.format(DISPLAY_FORMAT).ok())
        .unwrap_or_else(|| raw.to_string())
}
