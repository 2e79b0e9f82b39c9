// src/lib.rs

//! Parses Nmap normal text output into hosts and ports, classifies hosts, and
//! renders them in a terminal viewer or as HTML/JSON reports.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod ui;

pub use crate::core::models::{Host, Port, PortState};
pub use crate::core::parser::parse_scan;
pub use crate::error::{Error, Result};
