//! wavhead CLI library.
//!
//! This crate provides the command implementations behind the `wavhead`
//! binary, plus the shared handling of format parameters given as flags or a
//! JSON config file.

pub mod commands;
pub mod input;
