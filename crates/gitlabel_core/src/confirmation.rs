//! Interpretation of the operator's answer to a yes/no prompt.

#[cfg(test)]
#[path = "confirmation_tests.rs"]
mod tests;

/// The suffix appended to confirmation prompts. The capital letter marks the default.
pub const PROMPT_SUFFIX: &str = "[y/N]";

/// Returns `true` only for a definite yes.
///
/// `y` and `yes` (any case, surrounding whitespace ignored) confirm. An empty answer
/// takes the default, which is no, and anything else is treated as no as well.
pub fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
