//! # Storage Layer
//!
//! The [`StudentStore`] trait is the only way the command layer reaches the
//! students table.
//!
//! ## Implementations
//!
//! - [`pg::PgStore`]: Production PostgreSQL storage
//!   - One connection per operation, closed when the operation returns
//!   - Mutations run in an explicit transaction (commit or rollback)
//!   - Every statement uses bound parameters
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Same ordering, id and uniqueness contract as the table
//!   - No persistence
//!
//! ## Contract
//!
//! - `list_students` returns rows ordered by ascending `student_id`.
//! - `insert_student` returns the id the store assigned. Ids only grow.
//! - `update_email` and `delete_student` return the number of affected rows,
//!   `0` when the id does not exist.
//! - A duplicate email fails with [`RollcallError::Store`](crate::error::RollcallError::Store)
//!   and leaves the table unchanged.

use crate::error::Result;
use crate::model::{NewStudent, Student, StudentId};

pub mod memory;
pub mod pg;

/// Abstract interface for the students table.
pub trait StudentStore {
    /// All students, ascending by id
    fn list_students(&mut self) -> Result<Vec<Student>>;

    /// Insert a student and return the assigned id
    fn insert_student(&mut self, student: &NewStudent) -> Result<StudentId>;

    /// Replace the email of one student, returning affected rows
    fn update_email(&mut self, id: StudentId, email: &str) -> Result<u64>;

    /// Delete one student, returning affected rows
    fn delete_student(&mut self, id: StudentId) -> Result<u64>;
}
