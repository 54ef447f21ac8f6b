//! Interactive yes/no confirmation on the terminal.

use std::io::{self, BufRead, Write};

use gitlabel_core::{parse_confirmation, GitLabelError, GitLabelResult, PROMPT_SUFFIX};

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

/// Asks the operator on stdin/stdout. Defaults to no.
pub fn confirm_with_user(prompt: &str) -> GitLabelResult<bool> {
    let stdin = io::stdin();
    ask_for_confirmation(prompt, &mut stdin.lock(), &mut io::stdout())
}

/// Writes the prompt to `output` and reads one answer line from `input`.
///
/// End of input counts as the default answer.
pub fn ask_for_confirmation(
    prompt: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> GitLabelResult<bool> {
    write!(output, "{} {}: ", prompt, PROMPT_SUFFIX)
        .and_then(|_| output.flush())
        .map_err(|e| GitLabelError::Prompt(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| GitLabelError::Prompt(e.to_string()))?;

    Ok(parse_confirmation(&answer))
}
