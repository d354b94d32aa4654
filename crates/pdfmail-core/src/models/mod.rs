//! Data models for the pdfmail pipeline.

pub mod config;
