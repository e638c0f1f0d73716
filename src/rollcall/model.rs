use crate::error::{Result, RollcallError};
use chrono::NaiveDate;

/// Primary key of the `students` table (`SERIAL`).
pub type StudentId = i32;

/// Accepted format for enrollment dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row of the `students` table, as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Option<NaiveDate>,
}

/// Client-supplied fields for an insert. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Option<NaiveDate>,
}

impl NewStudent {
    /// Builds an insert payload, rejecting empty names and emails.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        enrollment_date: Option<NaiveDate>,
    ) -> Result<Self> {
        let student = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            enrollment_date,
        };
        require_non_empty("first name", &student.first_name)?;
        require_non_empty("last name", &student.last_name)?;
        require_non_empty("email", &student.email)?;
        Ok(student)
    }

    pub fn into_student(self, student_id: StudentId) -> Student {
        Student {
            student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            enrollment_date: self.enrollment_date,
        }
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RollcallError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Only the zero-padded shape is accepted: no sign, no surrounding
/// whitespace, no single-digit month or day.
pub fn parse_enrollment_date(input: &str) -> Result<NaiveDate> {
    let invalid = || {
        RollcallError::Validation(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            input
        ))
    };
    if !has_iso_date_shape(input) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

fn has_iso_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_enrollment_date("2023-09-03").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 9, 3).unwrap());
    }

    #[test]
    fn rejects_other_date_shapes() {
        for bad in [
            "03/09/2023",
            "2023-13-01",
            "2023-02-30",
            "yesterday",
            "",
            "2023-9-3",
            "+2023-09-03",
            " 2023-09-03",
            "2023-09-03 ",
            "02023-09-03",
            "2023/09/03",
        ] {
            assert!(
                matches!(parse_enrollment_date(bad), Err(RollcallError::Validation(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn new_student_requires_names_and_email() {
        assert!(NewStudent::new("Ada", "Lovelace", "ada@example.com", None).is_ok());
        assert!(NewStudent::new("", "Lovelace", "ada@example.com", None).is_err());
        assert!(NewStudent::new("Ada", "  ", "ada@example.com", None).is_err());
        assert!(NewStudent::new("Ada", "Lovelace", "", None).is_err());
    }

    #[test]
    fn into_student_keeps_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15);
        let student = NewStudent::new("Ada", "Lovelace", "ada@example.com", date)
            .unwrap()
            .into_student(7);
        assert_eq!(student.student_id, 7);
        assert_eq!(student.email, "ada@example.com");
        assert_eq!(student.enrollment_date, date);
    }
}
