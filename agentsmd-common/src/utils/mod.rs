//! Utility functions and helpers

pub mod paths;

pub use paths::to_slash_path;
