//! # Rendering Module
//!
//! Plain bordered tables for query results, plus colored status messages.
//!
//! ```text
//! +============+============+
//! | student_id | first_name |
//! +============+============+
//! | 1          | Ada        |
//! +============+============+
//! ```
//!
//! Column widths are measured with `unicode-width`, so wide characters keep
//! the borders aligned.

use colored::Colorize;
use rollcall::api::{CmdMessage, MessageLevel};
use rollcall::model::Student;
use unicode_width::UnicodeWidthStr;

/// Printed instead of a table when there is nothing to show.
pub const NO_ROWS: &str = "(no rows)";

/// One table row: column names in display order, each with an optional value.
/// A `None` value renders as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    cells: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: Option<String>) -> Self {
        self.cells.push((column.into(), value));
        self
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(column, _)| column.as_str())
    }

    /// Value of `column`, `None` when null or absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .and_then(|(_, value)| value.as_deref())
    }
}

impl From<&Student> for Record {
    fn from(student: &Student) -> Self {
        Record::new()
            .with("student_id", Some(student.student_id.to_string()))
            .with("first_name", Some(student.first_name.clone()))
            .with("last_name", Some(student.last_name.clone()))
            .with("email", Some(student.email.clone()))
            .with(
                "enrollment_date",
                student.enrollment_date.map(|d| d.to_string()),
            )
    }
}

/// The students table, rendered from a listing.
pub fn render_students(students: &[Student]) -> String {
    let records: Vec<Record> = students.iter().map(Record::from).collect();
    render_table(&records)
}

/// One line per message. With `use_color` off the text is left unstyled.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let line = if use_color {
            match message.level {
                MessageLevel::Info => message.content.dimmed().to_string(),
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
            }
        } else {
            message.content.clone()
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render records as a bordered table.
///
/// The column set comes from the first record. Every line ends with a
/// newline; an empty slice yields only the [`NO_ROWS`] line.
pub fn render_table(records: &[Record]) -> String {
    let Some(first) = records.first() else {
        return format!("{}\n", NO_ROWS);
    };

    let headers: Vec<&str> = first.columns().collect();
    let widths: Vec<usize> = headers
        .iter()
        .map(|header| {
            records
                .iter()
                .map(|r| r.get(header).map_or(0, UnicodeWidthStr::width))
                .fold(header.width(), usize::max)
        })
        .collect();

    let border = border_line(&widths, '=');
    let mut out = String::new();

    out.push_str(&border);
    out.push_str(&row_line(headers.iter().map(|h| Some(*h)), &widths));
    out.push_str(&border);
    for record in records {
        out.push_str(&row_line(headers.iter().map(|h| record.get(h)), &widths));
    }
    out.push_str(&border);
    out
}

fn border_line(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("+{}+\n", segments.join("+"))
}

fn row_line<'a>(cells: impl Iterator<Item = Option<&'a str>>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| pad_right(cell.unwrap_or(""), *width))
        .collect();
    format!("| {} |\n", padded.join(" | "))
}

fn pad_right(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(fill))
}
