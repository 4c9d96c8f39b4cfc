//! Demonstration records
//!
//! Used when no records could be loaded from the input file.

use tracing::{error, info};

use crate::record::{Date, Grades, Student};
use crate::store::RecordStore;

/// (surname, name, day, month, year, grades), in insertion order
const SEED: [(&str, &str, u32, u32, i32, Grades); 6] = [
    ("Melnichuk", "Mariia", 8, 1, 2008, [3, 5, 5]),
    ("Fedolak", "Lubomur", 7, 4, 2009, [3, 4, 5]),
    ("Samokhodska", "Anastasiia", 21, 3, 2010, [5, 5, 5]),
    ("Pushchak", "Andrii", 1, 2, 2007, [5, 4, 3]),
    ("Sydor", "Liliia", 12, 9, 2006, [5, 5, 3]),
    ("Ivanov", "Ivan", 1, 2, 2007, [2, 3, 3]),
];

/// The demonstration records as values
pub fn seed_records() -> Vec<Student> {
    SEED.iter()
        .map(|&(surname, name, day, month, year, grades)| {
            Student::new(surname, name, Date::new(day, month, year), grades)
        })
        .collect()
}

/// Insert the demonstration records into `store`
///
/// A record the store cannot take is logged and skipped; the rest are still
/// inserted. Returns the number inserted.
pub fn seed_store(store: &mut RecordStore) -> usize {
    let mut count = 0;
    for record in seed_records() {
        match store.insert(record) {
            Ok(()) => count += 1,
            Err(e) => error!("{}", e),
        }
    }

    info!(count, "Using hardcoded student data");
    count
}
