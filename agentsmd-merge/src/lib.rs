//! Generated-block merging for agents files
//!
//! Generated content lives between two sentinel comments inside the target
//! file. Everything outside the sentinels belongs to the user and survives
//! every rewrite byte-for-byte.
//!
//! ```
//! use agentsmd_merge::{upsert_generated_block, wrap_generated_content};
//!
//! let first = upsert_generated_block("# Notes", &wrap_generated_content("old"));
//! let second = upsert_generated_block(&first, &wrap_generated_content("new"));
//! assert!(second.starts_with("# Notes\n\n"));
//! assert!(second.contains("new") && !second.contains("old"));
//! ```

#![warn(missing_docs)]

mod backup;
mod block;
mod writer;

pub use backup::{
    backup_file, backup_file_with_clock, backup_path_for, Clock, SystemClock,
    BACKUP_TIMESTAMP_FORMAT,
};
pub use block::{
    find_generated_block, has_markers, upsert_generated_block, wrap_generated_content,
    GENERATED_INSERT, GENERATED_START,
};
pub use writer::{write_agents_file, write_agents_file_with_clock, WriteOutcome, WriteRequest};
