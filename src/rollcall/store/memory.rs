use super::StudentStore;
use crate::error::{Result, RollcallError};
use crate::model::{NewStudent, Student, StudentId};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    students: BTreeMap<StudentId, Student>,
    next_id: StudentId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn ensure_email_free(&self, email: &str, except: Option<StudentId>) -> Result<()> {
        let taken = self
            .students
            .values()
            .any(|s| s.email == email && Some(s.student_id) != except);
        if taken {
            return Err(RollcallError::Store(format!(
                "duplicate key value violates unique constraint \"students_email_key\" (Key (email)=({}) already exists.)",
                email
            )));
        }
        Ok(())
    }
}

impl StudentStore for InMemoryStore {
    fn list_students(&mut self) -> Result<Vec<Student>> {
        Ok(self.students.values().cloned().collect())
    }

    fn insert_student(&mut self, student: &NewStudent) -> Result<StudentId> {
        // Like a sequence, a failed insert still consumes an id
        let id = self.next_id;
        self.next_id += 1;
        self.ensure_email_free(&student.email, None)?;
        self.students.insert(id, student.clone().into_student(id));
        Ok(id)
    }

    fn update_email(&mut self, id: StudentId, email: &str) -> Result<u64> {
        if !self.students.contains_key(&id) {
            return Ok(0);
        }
        self.ensure_email_free(email, Some(id))?;
        if let Some(student) = self.students.get_mut(&id) {
            student.email = email.to_string();
        }
        Ok(1)
    }

    fn delete_student(&mut self, id: StudentId) -> Result<u64> {
        Ok(self.students.remove(&id).map_or(0, |_| 1))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A store pre-populated with a few students, ids 1..=3.
    pub fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (first, last, email) in [
            ("Ada", "Lovelace", "ada@example.com"),
            ("Alan", "Turing", "alan@example.com"),
            ("Grace", "Hopper", "grace@example.com"),
        ] {
            let student = NewStudent::new(first, last, email, None).unwrap();
            store.insert_student(&student).unwrap();
        }
        store
    }
}
