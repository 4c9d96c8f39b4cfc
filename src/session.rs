//! Session Module
//!
//! Coordinates the store with its file collaborators for one program run.
//!
//! ## Responsibilities
//! - Load the store from the input file, or seed it when nothing loads
//! - Search, filter and average over the loaded records
//! - Write the current records to the output file

use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::codec::{self, ReadReport};
use crate::config::Config;
use crate::error::Result;
use crate::record::{Date, Student};
use crate::seed;
use crate::store::{RecordStore, RetentionPolicy};

/// Where the session's records came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Loaded from the input file
    File { path: PathBuf, report: ReadReport },

    /// Loaded from a caller-supplied reader
    Reader { report: ReadReport },

    /// Fell back to the demonstration records
    Seed,
}

/// One run of the record register
pub struct Session {
    /// Session configuration
    config: Config,

    /// Records owned by this session
    store: RecordStore,

    /// How the store was populated
    source: Source,

    /// Date ages are computed against, fixed at open
    reference_date: Date,
}

impl Session {
    /// Open a session with the given config
    ///
    /// On startup:
    /// 1. Read the input file into an empty store
    /// 2. If it cannot be opened or read, or yields zero records, seed the store
    pub fn open(config: Config) -> Result<Self> {
        let mut store = RecordStore::new();
        let loaded = codec::read_records(&config.input_path, &mut store);

        let path = config.input_path.clone();
        Self::populate(config, store, loaded, |report| Source::File { path, report })
    }

    /// Open a session whose records come from `reader` instead of the input file
    ///
    /// Falls back to the seed data exactly as `open` does.
    pub fn from_reader<R: BufRead>(config: Config, reader: R) -> Result<Self> {
        let mut store = RecordStore::new();
        let loaded = codec::decode_from(reader, &mut store);

        Self::populate(config, store, loaded, |report| Source::Reader { report })
    }

    /// Open with an input path (convenience method)
    ///
    /// Uses default config with the specified input file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().input_path(path).build();
        Self::open(config)
    }

    /// Look up a record by exact surname
    pub fn search(&self, surname: &str) -> Option<&Student> {
        self.store.find(surname)
    }

    /// Remove every record the policy does not keep
    ///
    /// Returns the number removed.
    pub fn apply(&mut self, policy: &RetentionPolicy) -> usize {
        info!("{}", policy);
        self.store.delete_where(|record| policy.rejects(record))
    }

    /// Apply every configured filter in order
    ///
    /// `on_applied` runs after each filter with the policy, the number it
    /// removed and the store as it now stands. Returns the total removed.
    pub fn apply_configured<F>(&mut self, mut on_applied: F) -> usize
    where
        F: FnMut(&RetentionPolicy, usize, &RecordStore),
    {
        let filters = self.config.filters.clone();
        let mut total = 0;
        for policy in &filters {
            let removed = self.apply(policy);
            on_applied(policy, removed, &self.store);
            total += removed;
        }
        total
    }

    /// Mean age of the current records on the session's reference date
    pub fn average_age(&self) -> f64 {
        self.store.average_age(&self.reference_date)
    }

    /// Write the current records to the configured output file
    pub fn save(&self) -> Result<usize> {
        codec::write_records(&self.config.output_path, &self.store)
    }

    /// Tear the session down, releasing every record
    pub fn close(mut self) {
        let released = self.store.len();
        self.store.clear();
        info!(released, "Session closed");
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Keep a successful load, or seed a fresh store
    ///
    /// A read that fails partway may already have inserted records; those
    /// are discarded so seed data never mixes with file data.
    fn populate<F>(
        config: Config,
        mut store: RecordStore,
        loaded: Result<ReadReport>,
        source: F,
    ) -> Result<Self>
    where
        F: FnOnce(ReadReport) -> Source,
    {
        let source = match loaded {
            Ok(report) if report.inserted > 0 => source(report),
            Ok(_) => {
                seed::seed_store(&mut store);
                Source::Seed
            }
            Err(e) => {
                warn!("{}", e);
                store.clear();
                seed::seed_store(&mut store);
                Source::Seed
            }
        };

        let reference_date = config.effective_reference_date();

        Ok(Self {
            config,
            store,
            source,
            reference_date,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
