//! Interactive output-mode prompt
//!
//! Uses dialoguer on a terminal. Piped stdin is read line by line with the
//! same answer rules so the prompt can be scripted.

use agentsmd_common::{AgentsMdError, OutputMode, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal, Write};

/// Question shown to the user
pub const MODE_PROMPT: &str = "Select output mode: (1) inline, (2) reference";

/// Ask for an output mode until a valid answer is given
///
/// # Errors
///
/// Returns [`AgentsMdError::Prompt`] if input ends or cannot be read.
pub fn prompt_mode() -> Result<OutputMode> {
    if io::stdin().is_terminal() {
        prompt_mode_interactive()
    } else {
        prompt_mode_from(io::stdin().lock(), io::stderr())
    }
}

fn prompt_mode_interactive() -> Result<OutputMode> {
    let theme = ColorfulTheme::default();
    loop {
        let answer: String = Input::<String>::with_theme(&theme)
            .with_prompt(MODE_PROMPT)
            .interact_text()
            .map_err(|e| AgentsMdError::prompt(format!("Failed to read input: {e}")))?;
        if let Some(mode) = OutputMode::from_answer(&answer) {
            return Ok(mode);
        }
    }
}

/// Ask on `output` and read answers from `input`
///
/// Invalid answers re-prompt.
pub fn prompt_mode_from<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<OutputMode> {
    let write_failed = |e: io::Error| AgentsMdError::prompt(format!("Failed to write prompt: {e}"));
    loop {
        write!(output, "{MODE_PROMPT} > ").map_err(write_failed)?;
        output.flush().map_err(write_failed)?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| AgentsMdError::prompt(format!("Failed to read input: {e}")))?;
        if read == 0 {
            writeln!(output).map_err(write_failed)?;
            return Err(AgentsMdError::prompt(
                "input closed before an output mode was chosen",
            ));
        }
        if let Some(mode) = OutputMode::from_answer(&line) {
            return Ok(mode);
        }
    }
}
