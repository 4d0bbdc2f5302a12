//! Command implementations behind the `bwsearch` binary.

pub mod commands;
