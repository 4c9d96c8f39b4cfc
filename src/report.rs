//! Text rendering of the store for the terminal

use crate::record::Student;
use crate::store::RecordStore;

/// Width of the rule printed around listings
pub const RULE_WIDTH: usize = 64;

/// Render every record under an optional heading
///
/// ```text
/// All Students (sorted by surname):
/// ================================================================
/// Ivanov Ivan | 01.02.2007 | Grades: (2, 3, 3)
/// ================================================================
/// ```
pub fn render_table(store: &RecordStore, heading: Option<&str>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::with_capacity(store.len() + 3);

    if let Some(heading) = heading {
        lines.push(heading.to_string());
        lines.push(rule.clone());
    }

    if store.is_empty() {
        lines.push("No students in the list.".to_string());
    } else {
        lines.extend(store.iter().map(Student::to_string));
        lines.push(rule);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the outcome of a surname search
pub fn render_search(found: Option<&Student>) -> String {
    match found {
        Some(record) => {
            let [g1, g2, g3] = record.grades();
            format!(
                "Found: {} {} | Grades: ({}, {}, {})",
                record.surname(),
                record.name(),
                g1,
                g2,
                g3
            )
        }
        None => "Student not found.".to_string(),
    }
}
