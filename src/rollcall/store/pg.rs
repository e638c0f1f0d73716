use super::StudentStore;
use crate::config::ConnectionConfig;
use crate::error::{Result, RollcallError};
use crate::model::{NewStudent, Student, StudentId};
use postgres::{Client, NoTls, Row, Transaction};
use tracing::{debug, warn};

pub const DEFAULT_TABLE: &str = "students";

/// SQL text for one table. Only the table identifier is spliced in; every
/// value goes through a bind parameter.
#[derive(Debug, Clone)]
struct Statements {
    select_all: String,
    insert: String,
    update_email: String,
    delete: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            select_all: format!(
                "SELECT student_id, first_name, last_name, email, enrollment_date \
                 FROM {table} ORDER BY student_id"
            ),
            insert: format!(
                "INSERT INTO {table} (first_name, last_name, email, enrollment_date) \
                 VALUES ($1, $2, $3, $4) RETURNING student_id"
            ),
            update_email: format!("UPDATE {table} SET email = $1 WHERE student_id = $2"),
            delete: format!("DELETE FROM {table} WHERE student_id = $1"),
        }
    }
}

/// PostgreSQL-backed student storage.
///
/// Holds only the connection parameters. Each operation opens its own
/// connection, which is closed when the operation returns, on success or
/// error.
#[derive(Debug, Clone)]
pub struct PgStore {
    config: ConnectionConfig,
    table: String,
    statements: Statements,
}

impl PgStore {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            table: DEFAULT_TABLE.to_string(),
            statements: Statements::for_table(DEFAULT_TABLE),
        }
    }

    /// Target a different table with the same columns (`schema.table` allowed).
    pub fn with_table(mut self, table: &str) -> Result<Self> {
        validate_table_name(table)?;
        self.table = table.to_string();
        self.statements = Statements::for_table(table);
        Ok(self)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn connect(&self) -> Result<Client> {
        debug!(
            host = %self.config.host,
            port = self.config.port,
            dbname = %self.config.dbname,
            "opening connection"
        );
        Ok(self.config.pg_config().connect(NoTls)?)
    }

    /// Run one mutating statement in its own transaction.
    ///
    /// Commits when `op` succeeds, rolls back explicitly when it fails.
    fn mutate<T, F>(&self, label: &'static str, op: F) -> Result<T>
    where
        F: FnOnce(&mut Transaction<'_>) -> std::result::Result<T, postgres::Error>,
    {
        let mut client = self.connect()?;
        let mut tx = client.transaction()?;
        match op(&mut tx) {
            Ok(value) => {
                tx.commit()?;
                debug!(op = label, table = %self.table, "committed");
                Ok(value)
            }
            Err(err) => {
                match tx.rollback() {
                    Ok(()) => debug!(op = label, table = %self.table, "rolled back"),
                    Err(rollback_err) => {
                        warn!(op = label, error = %rollback_err, "rollback failed")
                    }
                }
                Err(err.into())
            }
        }
    }
}

impl StudentStore for PgStore {
    fn list_students(&mut self) -> Result<Vec<Student>> {
        let mut client = self.connect()?;
        let rows = client.query(self.statements.select_all.as_str(), &[])?;
        debug!(table = %self.table, rows = rows.len(), "listed students");
        rows.iter().map(student_from_row).collect()
    }

    fn insert_student(&mut self, student: &NewStudent) -> Result<StudentId> {
        let sql = self.statements.insert.as_str();
        self.mutate("insert", |tx| {
            let row = tx.query_one(
                sql,
                &[
                    &student.first_name,
                    &student.last_name,
                    &student.email,
                    &student.enrollment_date,
                ],
            )?;
            row.try_get::<_, StudentId>(0)
        })
    }

    fn update_email(&mut self, id: StudentId, email: &str) -> Result<u64> {
        let sql = self.statements.update_email.as_str();
        self.mutate("update_email", |tx| tx.execute(sql, &[&email, &id]))
    }

    fn delete_student(&mut self, id: StudentId) -> Result<u64> {
        let sql = self.statements.delete.as_str();
        self.mutate("delete", |tx| tx.execute(sql, &[&id]))
    }
}

fn student_from_row(row: &Row) -> Result<Student> {
    Ok(Student {
        student_id: row.try_get("student_id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        enrollment_date: row.try_get("enrollment_date")?,
    })
}

fn validate_table_name(table: &str) -> Result<()> {
    let valid_part = |part: &str| {
        let mut chars = part.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    };
    let parts: Vec<&str> = table.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|p| valid_part(p)) {
        return Err(RollcallError::Config(format!(
            "invalid table name '{}'",
            table
        )));
    }
    Ok(())
}
