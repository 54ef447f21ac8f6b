//! gitlabel CLI library exports.
//!
//! The binary in `main.rs` only wires these modules together.

pub mod args;
pub mod credentials;
pub mod errors;
pub mod prompt;
pub mod sync_cmd;
