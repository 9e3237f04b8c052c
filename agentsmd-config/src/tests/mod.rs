//! Tests for configuration loading
//!
//! Every test that loads configuration is `#[serial]` because the
//! environment is a source.
