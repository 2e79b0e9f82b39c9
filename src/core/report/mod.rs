// src/core/report/mod.rs

// Aggregates parsed hosts into a report and writes it out. The report is a
// plain serializer of the model: it never looks at scan text.
mod html;

pub use html::render_html;

use crate::core::classifier::{risk_level, system_type, RiskLevel};
use crate::core::models::{Host, PortState};
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use strum::Display;
use tracing::info;

pub const REPORT_TITLE: &str = "Network Infrastructure Analysis Report";

const MISSING_TEXT: &str = "N/A";
const UNKNOWN_TEXT: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Headline numbers for a set of hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_hosts: usize,
    pub open_ports: usize,
    pub unique_services: usize,
    pub risk_breakdown: RiskBreakdown,
    pub operating_systems: BTreeMap<String, usize>,
}

impl ReportSummary {
    pub fn from_hosts<'a>(hosts: impl IntoIterator<Item = &'a Host>) -> Self {
        let mut summary = ReportSummary::default();
        let mut services = HashSet::new();

        for host in hosts {
            summary.total_hosts += 1;
            summary.open_ports += host.open_port_count();
            services.extend(host.ports.iter().map(|p| p.service.as_str()));

            match risk_level(host) {
                RiskLevel::High => summary.risk_breakdown.high += 1,
                RiskLevel::Medium => summary.risk_breakdown.medium += 1,
                RiskLevel::Low => summary.risk_breakdown.low += 1,
            }
            *summary
                .operating_systems
                .entry(system_type(host).to_string())
                .or_insert(0) += 1;
        }

        summary.unique_services = services.len();
        summary
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortReport {
    pub port: u16,
    pub state: PortState,
    pub service: String,
    pub product: String,
    pub version: String,
    pub extra_info: String,
    pub scripts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub ip: String,
    pub hostname: String,
    pub os: String,
    pub os_details: Option<String>,
    pub distance: Option<u32>,
    pub risk_level: RiskLevel,
    pub ports: Vec<PortReport>,
}

impl HostReport {
    fn from_host(host: &Host) -> Self {
        Self {
            ip: host.ip.clone(),
            hostname: host.hostname.clone().unwrap_or_else(|| MISSING_TEXT.to_string()),
            os: system_type(host).to_string(),
            os_details: host.os.clone(),
            distance: host.distance,
            risk_level: risk_level(host),
            ports: host
                .ports
                .iter()
                .map(|port| PortReport {
                    port: port.port,
                    state: port.state,
                    service: port.service.clone(),
                    product: port.product.clone().unwrap_or_else(|| UNKNOWN_TEXT.to_string()),
                    version: port.version.clone().unwrap_or_else(|| UNKNOWN_TEXT.to_string()),
                    extra_info: port.extra_info.clone().unwrap_or_else(|| MISSING_TEXT.to_string()),
                    scripts: port.scripts.clone(),
                })
                .collect(),
        }
    }

    pub fn has_hostname(&self) -> bool {
        self.hostname != MISSING_TEXT
    }
}

/// Everything an exported document contains.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub summary: ReportSummary,
    pub hosts: Vec<HostReport>,
}

impl Report {
    pub fn build(hosts: &[Host], generated_at: DateTime<Local>) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            generated_at,
            summary: ReportSummary::from_hosts(hosts),
            hosts: hosts.iter().map(HostReport::from_host).collect(),
        }
    }
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report for `hosts` into `dir` and returns the file path.
///
/// The directory is created when missing. File names carry the generation
/// time, e.g. `scanview_report_20240131_142501.html`; a second export in the
/// same second gets `_1`, `_2`, ... appended instead of replacing the first.
pub fn export(hosts: &[Host], format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let report = Report::build(hosts, Local::now());
    let body = match format {
        ExportFormat::Html => render_html(&report),
        ExportFormat::Json => render_json(&report)?,
    };

    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let stem = format!("scanview_report_{}", report.generated_at.format("%Y%m%d_%H%M%S"));
    let path = write_new_file(dir, &stem, format.extension(), body.as_bytes())?;

    info!(path = %path.display(), %format, hosts = hosts.len(), "Report exported.");
    Ok(path)
}

/// Creates `<stem>.<ext>` in `dir`, or `<stem>_<n>.<ext>` when earlier names
/// are taken. Existing files are never overwritten.
fn write_new_file(dir: &Path, stem: &str, extension: &str, body: &[u8]) -> Result<PathBuf> {
    let mut attempt = 0u32;
    loop {
        let file_name = match attempt {
            0 => format!("{stem}.{extension}"),
            n => format!("{stem}_{n}.{extension}"),
        };
        let path = dir.join(file_name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(body).map_err(|source| Error::Write {
                    path: path.clone(),
                    source,
                })?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(source) => return Err(Error::Write { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_scan;

    const SCAN: &str = "Nmap scan report for dc01.corp (10.0.0.10)\n\
                        53/tcp open domain\n\
                        88/tcp open kerberos-sec\n\
                        135/tcp open msrpc\n\
                        139/tcp open netbios-ssn\n\
                        389/tcp open ldap\n\
                        445/tcp open microsoft-ds\n\
                        636/tcp open ldaps\n\
                        Nmap scan report for 10.0.0.20\n\
                        22/tcp open ssh OpenSSH 8.9p1 Ubuntu\n\
                        80/tcp filtered http\n\
                        Nmap scan report for 10.0.0.30\n\
                        OS details: FreeBSD 13.1\n\
                        22/tcp open ssh\n";

    #[test]
    fn summary_counts_hosts_ports_and_services() {
        let hosts = parse_scan(SCAN);
        let summary = ReportSummary::from_hosts(&hosts);
        assert_eq!(summary.total_hosts, 3);
        assert_eq!(summary.open_ports, 9);
        // ssh is shared by two hosts, http only appears filtered but still counts
        assert_eq!(summary.unique_services, 9);
        assert_eq!(summary.risk_breakdown, RiskBreakdown { high: 0, medium: 1, low: 2 });
        assert_eq!(summary.operating_systems.get("Windows"), Some(&1));
        assert_eq!(summary.operating_systems.get("Linux"), Some(&1));
        assert_eq!(summary.operating_systems.get("FreeBSD"), Some(&1));
    }

    #[test]
    fn empty_summary_is_all_zero() {
        assert_eq!(ReportSummary::from_hosts(&[]), ReportSummary::default());
    }

    #[test]
    fn host_reports_fill_display_defaults() {
        let hosts = parse_scan(SCAN);
        let report = Report::build(&hosts, Local::now());
        assert_eq!(report.hosts[0].hostname, "dc01.corp");
        assert!(report.hosts[0].has_hostname());
        assert_eq!(report.hosts[1].hostname, "N/A");
        assert!(!report.hosts[1].has_hostname());

        let ssh = &report.hosts[1].ports[0];
        assert_eq!(ssh.product, "OpenSSH");
        assert_eq!(ssh.extra_info, "Ubuntu");
        let http = &report.hosts[1].ports[1];
        assert_eq!(http.version, "Unknown");
        assert_eq!(http.extra_info, "N/A");
    }

    #[test]
    fn json_report_carries_summary_and_hosts() {
        let hosts = parse_scan(SCAN);
        let json = render_json(&Report::build(&hosts, Local::now())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], REPORT_TITLE);
        assert_eq!(value["summary"]["total_hosts"], 3);
        assert_eq!(value["hosts"][0]["risk_level"], "medium");
        assert_eq!(value["hosts"][1]["ports"][1]["state"], "filtered");
    }

    #[test]
    fn export_writes_file_into_new_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("reports");
        let hosts = parse_scan(SCAN);

        let path = export(&hosts, ExportFormat::Html, &dir).unwrap();
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("dc01.corp"));

        let json_path = export(&hosts, ExportFormat::Json, &dir).unwrap();
        assert!(json_path.to_string_lossy().ends_with(".json"));
    }

    #[test]
    fn back_to_back_exports_keep_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let hosts = parse_scan(SCAN);

        let first = export(&hosts[..1], ExportFormat::Json, tmp.path()).unwrap();
        let second = export(&hosts[1..], ExportFormat::Json, tmp.path()).unwrap();
        assert_ne!(first, second);

        let first_body = std::fs::read_to_string(&first).unwrap();
        let second_body = std::fs::read_to_string(&second).unwrap();
        assert!(first_body.contains(&hosts[0].ip));
        assert!(!second_body.contains(&format!("\"{}\"", hosts[0].ip)));
    }

    #[test]
    fn taken_names_get_a_numeric_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("scanview_report_x.json"), "old").unwrap();
        std::fs::write(tmp.path().join("scanview_report_x_1.json"), "old").unwrap();

        let path = write_new_file(tmp.path(), "scanview_report_x", "json", b"new").unwrap();
        assert_eq!(path, tmp.path().join("scanview_report_x_2.json"));
        assert_eq!(std::fs::read_to_string(tmp.path().join("scanview_report_x.json")).unwrap(), "old");
    }
}
