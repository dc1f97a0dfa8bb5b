pub mod args;
pub mod cli;
pub mod config;
pub mod format;
