//! Qualifying predicates
//!
//! Boolean tests over a record's grades or age, and the retention policies
//! built on them. The store itself knows nothing about these; callers pass
//! `RetentionPolicy::rejects` to `RecordStore::delete_where`.

use std::fmt;

use crate::record::{Date, Student};

/// Any of the record's grades is in `set`
pub fn has_grade_in(record: &Student, set: &[u8]) -> bool {
    record.grades().iter().any(|g| set.contains(g))
}

/// Every grade is at least `min`
pub fn all_grades_at_least(record: &Student, min: u8) -> bool {
    record.grades().iter().all(|&g| g >= min)
}

/// The record's age on `reference` is at least `threshold`
pub fn age_at_least(record: &Student, reference: &Date, threshold: i32) -> bool {
    record.age_at(reference) >= threshold
}

/// Which records survive a filtering pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep records with at least one grade in the set
    AnyGradeIn(Vec<u8>),

    /// Keep records whose every grade reaches the minimum
    AllGradesAtLeast(u8),

    /// Keep records younger than `years` on `reference`
    YoungerThan { reference: Date, years: i32 },
}

impl RetentionPolicy {
    /// Keep anyone with a 4 or a 5
    pub fn high_grade() -> Self {
        RetentionPolicy::AnyGradeIn(vec![4, 5])
    }

    /// Keep only those with no grade below 4
    pub fn all_high_grades() -> Self {
        RetentionPolicy::AllGradesAtLeast(4)
    }

    pub fn younger_than(reference: Date, years: i32) -> Self {
        RetentionPolicy::YoungerThan { reference, years }
    }

    /// Whether `record` survives this policy
    pub fn keeps(&self, record: &Student) -> bool {
        match self {
            RetentionPolicy::AnyGradeIn(set) => has_grade_in(record, set),
            RetentionPolicy::AllGradesAtLeast(min) => all_grades_at_least(record, *min),
            RetentionPolicy::YoungerThan { reference, years } => {
                !age_at_least(record, reference, *years)
            }
        }
    }

    /// Deletion predicate for `RecordStore::delete_where`
    pub fn rejects(&self, record: &Student) -> bool {
        !self.keeps(record)
    }

    /// Heading for a listing of the survivors
    pub fn survivors_heading(&self) -> String {
        match self {
            RetentionPolicy::AnyGradeIn(set) => {
                format!("Students with at least one grade {}:", join_grades(set))
            }
            RetentionPolicy::AllGradesAtLeast(min) => {
                format!("Students with all grades {} or higher:", min)
            }
            RetentionPolicy::YoungerThan { years, .. } => {
                format!("Students younger than {}:", years)
            }
        }
    }
}

impl fmt::Display for RetentionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetentionPolicy::AnyGradeIn(set) => write!(
                f,
                "Removing students who don't have any grades {}",
                join_grades(set)
            ),
            RetentionPolicy::AllGradesAtLeast(min) => {
                write!(f, "Removing students with any grade below {}", min)
            }
            RetentionPolicy::YoungerThan { reference, years } => write!(
                f,
                "Removing students aged {} or older on {}",
                years, reference
            ),
        }
    }
}

/// "4 or 5", "3, 4 or 5"
fn join_grades(set: &[u8]) -> String {
    match set.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => {
            let head: Vec<String> = rest.iter().map(u8::to_string).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}
