// src/core/mod.rs

/// Record types produced by the parser: `Host`, `Port` and their parts.
pub mod models;

/// The scan-output parser that turns Nmap text into `Host` records.
pub mod parser;

/// System-type and risk-level classification of parsed hosts.
pub mod classifier;

/// Static catalogue of well-known services and their categories.
pub mod service_catalog;

/// Search and grouping over parsed hosts.
pub mod query;

/// Summary statistics and HTML/JSON report export.
pub mod report;

/// Reading scan files from disk.
pub mod source;
