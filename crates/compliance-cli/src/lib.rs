//! CLI library components for the compliance wizard.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
