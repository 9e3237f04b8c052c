//! Shared enums for output generation and target-file writing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AgentsMdError;

/// How rule documents are rendered into the generated block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Embed every rule body once per glob
    Inline,
    /// Emit a short cross-reference section per rule
    Reference,
}

impl OutputMode {
    /// Interpret an answer to the interactive mode prompt
    ///
    /// Accepts `1`/`inline` and `2`/`reference`, ignoring case and
    /// surrounding whitespace.
    pub fn from_answer(answer: &str) -> Option<Self> {
        let trimmed = answer.trim();
        if trimmed == "1" || trimmed.eq_ignore_ascii_case("inline") {
            Some(OutputMode::Inline)
        } else if trimmed == "2" || trimmed.eq_ignore_ascii_case("reference") {
            Some(OutputMode::Reference)
        } else {
            None
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Inline => write!(f, "inline"),
            OutputMode::Reference => write!(f, "reference"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = AgentsMdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(OutputMode::Inline),
            "reference" => Ok(OutputMode::Reference),
            other => Err(AgentsMdError::invalid_argument(format!(
                "mode requires inline or reference, got '{other}'"
            ))),
        }
    }
}

/// How the generated block is written into the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Upsert the generated block, keeping everything else in the file
    #[default]
    Append,
    /// Replace the whole file with the generated block
    Overwrite,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Append => write!(f, "append"),
            WriteMode::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl FromStr for WriteMode {
    type Err = AgentsMdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" => Ok(WriteMode::Append),
            "overwrite" => Ok(WriteMode::Overwrite),
            other => Err(AgentsMdError::invalid_argument(format!(
                "write mode requires overwrite or append, got '{other}'"
            ))),
        }
    }
}
