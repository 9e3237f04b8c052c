//! Integration tests for agentsmd-rules

mod generation;
mod loading;
