use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{require_non_empty, NewStudent};
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &mut S, student: NewStudent) -> Result<CmdResult> {
    // Fields are public, so a payload may not have gone through NewStudent::new
    require_non_empty("first name", &student.first_name)?;
    require_non_empty("last name", &student.last_name)?;
    require_non_empty("email", &student.email)?;

    let id = store.insert_student(&student)?;
    let mut result = CmdResult::default().with_inserted_id(id);
    result.add_message(CmdMessage::success(format!("Inserted student_id={}", id)));
    Ok(result)
}
