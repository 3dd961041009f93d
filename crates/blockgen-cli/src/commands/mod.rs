//! Command implementations for the blockgen CLI.

pub mod build;
pub mod check;
pub mod clean;
pub mod generate;
pub mod init;
pub mod new;
