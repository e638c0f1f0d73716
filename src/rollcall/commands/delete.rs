use crate::commands::{row_count_message, CmdResult};
use crate::error::Result;
use crate::model::StudentId;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &mut S, id: StudentId) -> Result<CmdResult> {
    let rows = store.delete_student(id)?;
    let mut result = CmdResult::default().with_affected_rows(rows);
    for message in row_count_message("deleted", id, rows) {
        result.add_message(message);
    }
    Ok(result)
}
