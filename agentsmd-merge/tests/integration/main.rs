//! Integration tests for agentsmd-merge

mod write_flow;
