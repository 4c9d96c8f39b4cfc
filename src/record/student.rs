//! Student record

use std::fmt;

use super::Date;

/// Maximum length of a surname or name, in characters
pub const MAX_NAME_LEN: usize = 49;

/// Number of grades every record carries
pub const GRADE_COUNT: usize = 3;

/// Exactly three grades, in entry order
pub type Grades = [u8; GRADE_COUNT];

/// A single student record
///
/// Created fully formed and never changed afterwards; the store only ever
/// hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    surname: String,
    name: String,
    birth_date: Date,
    grades: Grades,
}

impl Student {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        birth_date: Date,
        grades: Grades,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            birth_date,
            grades,
        }
    }

    /// Sort and search key
    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> Date {
        self.birth_date
    }

    pub fn grades(&self) -> Grades {
        self.grades
    }

    /// Age in whole years on `reference`
    pub fn age_at(&self, reference: &Date) -> i32 {
        self.birth_date.age_at(reference)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [g1, g2, g3] = self.grades;
        write!(
            f,
            "{} {} | {} | Grades: ({}, {}, {})",
            self.surname, self.name, self.birth_date, g1, g2, g3
        )
    }
}
