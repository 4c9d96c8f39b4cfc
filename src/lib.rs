//! # Rollbook
//!
//! A small in-memory student register with:
//! - Records kept sorted by surname on every insert
//! - Linear search by surname
//! - Predicate-based bulk deletion (grade and age filters)
//! - Flat text file load and dump
//!
//! ## Architecture Overview
//!
//! ```text
//!   ┌──────────────┐   decode    ┌──────────────┐   encode    ┌──────────────┐
//!   │ students.txt │ ──────────▶ │ RecordStore  │ ──────────▶ │ filtered_    │
//!   └──────────────┘   (codec)   │ (sorted Vec) │   (codec)   │ students.txt │
//!          │ nothing loaded      └──────┬───────┘             └──────────────┘
//!          ▼                            │ delete_where(policy)
//!   ┌──────────────┐                    ▼
//!   │  seed data   │             ┌──────────────┐
//!   └──────────────┘             │   filters    │
//!                                └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod codec;
pub mod seed;
pub mod report;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RollbookError};
pub use config::Config;
pub use record::{age, Date, Student};
pub use store::{RecordStore, RetentionPolicy};
pub use session::{Session, Source};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rollbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
