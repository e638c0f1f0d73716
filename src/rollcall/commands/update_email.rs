use crate::commands::{row_count_message, CmdResult};
use crate::error::Result;
use crate::model::{require_non_empty, StudentId};
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &mut S, id: StudentId, email: &str) -> Result<CmdResult> {
    require_non_empty("email", email)?;

    let rows = store.update_email(id, email)?;
    let mut result = CmdResult::default().with_affected_rows(rows);
    for message in row_count_message("updated", id, rows) {
        result.add_message(message);
    }
    Ok(result)
}
