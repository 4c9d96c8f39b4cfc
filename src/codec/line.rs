//! Single-line decoding and encoding

use crate::error::{Result, RollbookError};
use crate::record::{Date, Grades, Student, MAX_NAME_LEN};

/// Fields per line: surname, name, day, month, year, three grades
pub const FIELD_COUNT: usize = 8;

/// Lowest and highest valid grade
const GRADE_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Decode one non-blank line into a record
///
/// `line_no` is only used for error reporting. Checks run in order:
/// format (field count, name length, integers), then date, then grades.
pub fn decode_line(line_no: usize, text: &str) -> Result<Student> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed(
            line_no,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let surname = name_field(line_no, "surname", fields[0])?;
    let name = name_field(line_no, "name", fields[1])?;

    let mut numbers = [0i32; FIELD_COUNT - 2];
    for (slot, field) in numbers.iter_mut().zip(&fields[2..]) {
        *slot = field
            .parse()
            .map_err(|_| malformed(line_no, format!("'{}' is not an integer", field)))?;
    }
    let [day, month, year, g1, g2, g3] = numbers;

    if !Date::in_range(day, month, year) {
        return Err(RollbookError::InvalidDate {
            line: line_no,
            day,
            month,
            year,
        });
    }

    if let Some(&grade) = [g1, g2, g3].iter().find(|&&g| !GRADE_RANGE.contains(&g)) {
        return Err(RollbookError::InvalidGrade {
            line: line_no,
            grade,
        });
    }

    // Both casts are lossless after the range checks above
    let birth_date = Date::new(day as u32, month as u32, year);
    let grades: Grades = [g1 as u8, g2 as u8, g3 as u8];

    Ok(Student::new(surname, name, birth_date, grades))
}

/// Encode a record as one tab-separated line, without the newline
pub fn encode_line(record: &Student) -> String {
    let date = record.birth_date();
    let [g1, g2, g3] = record.grades();
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.surname(),
        record.name(),
        date.day,
        date.month,
        date.year,
        g1,
        g2,
        g3
    )
}

fn name_field<'a>(line_no: usize, label: &str, value: &'a str) -> Result<&'a str> {
    let len = value.chars().count();
    if len > MAX_NAME_LEN {
        return Err(malformed(
            line_no,
            format!("{} is {} characters (max {})", label, len, MAX_NAME_LEN),
        ));
    }
    Ok(value)
}

fn malformed(line: usize, reason: String) -> RollbookError {
    RollbookError::MalformedLine { line, reason }
}
