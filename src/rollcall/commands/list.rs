use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &mut S) -> Result<CmdResult> {
    let students = store.list_students()?;
    Ok(CmdResult::default().with_students(students))
}
