//! Command Line Interface for wordtally.

pub mod args;
pub mod commands;
pub mod output;
