// src/cli.rs

use crate::core::query::GroupBy;
use crate::core::report::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scanview")]
#[command(about = "Browse, group and export Nmap scan results in the terminal")]
#[command(long_about = r#"
scanview reads the normal text output of Nmap (-oN, or a saved terminal
session) and shows hosts, ports, services, script output, SSH host keys and
certificate details in an interactive terminal view.

Examples:
  scanview                                   # open the viewer and type a path
  scanview scan.txt                          # open a scan directly
  scanview scan.txt --group-by risk          # start grouped by risk level
  scanview scan.txt --export html -o reports # write an HTML report and exit
"#)]
#[command(version)]
pub struct Cli {
    /// Nmap text output to open
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Initial grouping of the host list
    #[arg(short, long, value_enum)]
    pub group_by: Option<GroupBy>,

    /// Only show (or export) hosts matching this IP, hostname, service or port
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Write a report in this format instead of starting the viewer
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Directory for exported reports
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show the log panel on start
    #[arg(long)]
    pub show_logs: bool,
}
