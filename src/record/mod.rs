//! Record Module
//!
//! The student record and the values it is made of.
//!
//! ## Responsibilities
//! - Hold a fully formed record (no partial construction)
//! - Birth dates with range checks only, no calendar validation
//! - Whole-year age arithmetic against a reference date

mod date;
mod student;

pub use date::{age, Date};
pub use student::{Grades, Student, GRADE_COUNT, MAX_NAME_LEN};
