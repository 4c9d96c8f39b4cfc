//! Record Store Module
//!
//! Ordered in-memory collection of student records keyed by surname.
//!
//! ## Responsibilities
//! - Keep records in non-decreasing surname order on every insert
//! - Linear search by surname
//! - Single-pass predicate deletion that preserves survivor order
//! - Restartable enumeration of the current contents
//!
//! ## Data Structure Choice
//! A `Vec<Student>` rather than a linked list:
//! - The store exclusively owns every record, nothing aliases them
//! - Insertion is a positional insert after locating the slot
//! - Bulk deletion is `retain`, one pass with no skipped neighbours

mod filter;
mod table;

pub use filter::{age_at_least, all_grades_at_least, has_grade_in, RetentionPolicy};
pub use table::{Iter, RecordStore};
