//! Subcommand implementations

pub(crate) mod config;
pub(crate) mod run;
pub(crate) mod vocab;
