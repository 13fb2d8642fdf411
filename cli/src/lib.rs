//! Parsing, variable resolution and execution of Bruno `.bru` request files.

pub mod client;
pub mod commands;
pub mod core;
pub mod environment;
pub mod syntax;
