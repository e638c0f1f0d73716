use crate::model::{Student, StudentId};

pub mod add;
pub mod delete;
pub mod list;
pub mod update_email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a single command.
///
/// Only the fields relevant to the command are populated: `students` for
/// listings, `inserted_id` for inserts, `affected_rows` for updates and
/// deletes.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub students: Vec<Student>,
    pub inserted_id: Option<StudentId>,
    pub affected_rows: Option<u64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }

    pub fn with_inserted_id(mut self, id: StudentId) -> Self {
        self.inserted_id = Some(id);
        self
    }

    pub fn with_affected_rows(mut self, rows: u64) -> Self {
        self.affected_rows = Some(rows);
        self
    }
}

/// Status message for row-count results: success when a row changed,
/// a warning when the id matched nothing.
pub(crate) fn row_count_message(verb: &str, id: StudentId, rows: u64) -> Vec<CmdMessage> {
    let mut messages = Vec::with_capacity(2);
    if rows == 0 {
        messages.push(CmdMessage::warning(format!("Rows {}: 0", verb)));
        messages.push(CmdMessage::info(format!("No student with student_id={}", id)));
    } else {
        messages.push(CmdMessage::success(format!("Rows {}: {}", verb, rows)));
    }
    messages
}
