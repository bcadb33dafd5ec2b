//! CLI command implementations

pub mod header;
pub mod inspect;
pub mod json_output;
pub mod patch;
pub mod wrap;
