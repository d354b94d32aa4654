//! Subcommands of the `pdfmail` binary.

pub mod config;
pub mod scan;
