//! Configuration for Rollbook
//!
//! Centralized configuration with defaults that reproduce the stock
//! demonstration run.

use std::path::PathBuf;

use crate::record::Date;
use crate::store::RetentionPolicy;

/// Main configuration for a Rollbook session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Records are loaded from here on open
    pub input_path: PathBuf,

    /// Filtered records are written here by `save`
    pub output_path: PathBuf,

    /// Skip writing the output file entirely
    pub save_output: bool,

    // -------------------------------------------------------------------------
    // Demonstration Configuration
    // -------------------------------------------------------------------------
    /// Surname looked up after loading
    pub search_surname: String,

    /// Date ages are computed against (None = today)
    pub reference_date: Option<Date>,

    /// Filters applied in order after the search
    pub filters: Vec<RetentionPolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("students.txt"),
            output_path: PathBuf::from("filtered_students.txt"),
            save_output: true,
            search_surname: "Sydor".to_string(),
            reference_date: None,
            filters: vec![RetentionPolicy::high_grade()],
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reference date, falling back to today's local date
    pub fn effective_reference_date(&self) -> Date {
        self.reference_date.unwrap_or_else(Date::today)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the input file path
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Set the output file path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Enable or disable writing the output file
    pub fn save_output(mut self, save: bool) -> Self {
        self.config.save_output = save;
        self
    }

    /// Set the surname to search for
    pub fn search_surname(mut self, surname: impl Into<String>) -> Self {
        self.config.search_surname = surname.into();
        self
    }

    /// Pin the reference date used for ages
    pub fn reference_date(mut self, date: Date) -> Self {
        self.config.reference_date = Some(date);
        self
    }

    /// Replace the filter list
    pub fn filters(mut self, filters: Vec<RetentionPolicy>) -> Self {
        self.config.filters = filters;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
