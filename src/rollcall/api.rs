//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! student operations.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! It never prints or exits. Business logic lives in the commands and
//! persistence in the store.
//!
//! `StudentApi<S: StudentStore>` is generic over the storage backend:
//! - Production: `StudentApi<PgStore>`
//! - Testing: `StudentApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{parse_enrollment_date, NewStudent, StudentId};
use crate::store::StudentStore;

/// The main API facade for student operations.
pub struct StudentApi<S: StudentStore> {
    store: S,
}

impl<S: StudentStore> StudentApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_students(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn add_student(&mut self, student: NewStudent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, student)
    }

    /// Insert from raw strings, parsing the optional `YYYY-MM-DD` date.
    pub fn add_student_from_parts(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        enrollment_date: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let date = enrollment_date.map(parse_enrollment_date).transpose()?;
        let student = NewStudent::new(first_name, last_name, email, date)?;
        self.add_student(student)
    }

    pub fn update_email(&mut self, id: StudentId, email: &str) -> Result<commands::CmdResult> {
        commands::update_email::run(&mut self.store, id, email)
    }

    pub fn delete_student(&mut self, id: StudentId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;
    use crate::store::memory::InMemoryStore;

    fn api() -> StudentApi<InMemoryStore> {
        StudentApi::new(InMemoryStore::new())
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        let added = api
            .add_student_from_parts("Ada", "Lovelace", "ada@example.com", Some("2023-09-03"))
            .unwrap();
        assert_eq!(added.inserted_id, Some(1));

        let listed = api.list_students().unwrap();
        assert_eq!(listed.students.len(), 1);
        assert_eq!(
            listed.students[0].enrollment_date.map(|d| d.to_string()),
            Some("2023-09-03".to_string())
        );
    }

    #[test]
    fn malformed_date_never_reaches_the_store() {
        let mut api = api();
        let err = api
            .add_student_from_parts("Ada", "Lovelace", "ada@example.com", Some("09/03/2023"))
            .unwrap_err();
        assert!(matches!(err, RollcallError::Validation(_)));
        assert!(api.store().is_empty());
    }

    #[test]
    fn update_and_delete_dispatch() {
        let mut api = api();
        api.add_student_from_parts("Ada", "Lovelace", "ada@example.com", None)
            .unwrap();

        assert_eq!(api.update_email(1, "countess@example.com").unwrap().affected_rows, Some(1));
        assert_eq!(api.delete_student(1).unwrap().affected_rows, Some(1));
        assert!(api.list_students().unwrap().students.is_empty());
    }
}
