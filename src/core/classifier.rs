// src/core/classifier.rs

//! Classifications derived from a finished `Host`. Nothing here is stored on the
//! host; both functions are recomputed whenever a view needs them.

use crate::core::models::Host;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Services whose presence marks a host as Windows.
const WINDOWS_SERVICES: &[&str] = &["microsoft-ds", "netbios-ssn"];
const REMOTE_SHELL_SERVICE: &str = "ssh";

const HIGH_RISK_ABOVE: usize = 10;
const MEDIUM_RISK_ABOVE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SystemType {
    Windows,
    Linux,
    Unknown,
    /// First word of the `OS details:` line.
    Reported(String),
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemType::Windows => write!(f, "Windows"),
            SystemType::Linux => write!(f, "Linux"),
            SystemType::Unknown => write!(f, "Unknown"),
            SystemType::Reported(name) => write!(f, "{}", name),
        }
    }
}

/// Ordinal exposure tier, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Group heading used when hosts are grouped by risk, e.g. "High Risk".
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn from_open_ports(open_ports: usize) -> Self {
        if open_ports > HIGH_RISK_ABOVE {
            RiskLevel::High
        } else if open_ports > MEDIUM_RISK_ABOVE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Infers the operating system family of a host.
///
/// A reported OS always wins. Otherwise SMB/NetBIOS services mean Windows, an
/// SSH service without them means Linux, and anything else is Unknown.
pub fn system_type(host: &Host) -> SystemType {
    if let Some(first) = host.os.as_deref().and_then(|os| os.split_whitespace().next()) {
        return SystemType::Reported(first.to_string());
    }
    if WINDOWS_SERVICES.iter().any(|s| host.has_service(s)) {
        return SystemType::Windows;
    }
    if host.has_service(REMOTE_SHELL_SERVICE) {
        return SystemType::Linux;
    }
    SystemType::Unknown
}

/// Rates a host by how many of its ports are open.
pub fn risk_level(host: &Host) -> RiskLevel {
    RiskLevel::from_open_ports(host.open_port_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Port, PortState};

    fn host_with(services: &[(&str, PortState)]) -> Host {
        let mut host = Host::new("10.0.0.1");
        for (i, (service, state)) in services.iter().enumerate() {
            host.ports.push(Port::new(1000 + i as u16, *state, service));
        }
        host
    }

    fn host_with_open_ports(count: usize) -> Host {
        host_with(&vec![("http", PortState::Open); count])
    }

    #[test]
    fn reported_os_wins_over_services() {
        let mut host = host_with(&[("microsoft-ds", PortState::Open), ("ssh", PortState::Open)]);
        host.os = Some("Linux 5.x".to_string());
        assert_eq!(system_type(&host).to_string(), "Linux");
        assert_eq!(system_type(&host), SystemType::Reported("Linux".into()));
    }

    #[test]
    fn windows_services_beat_ssh() {
        let host = host_with(&[("ssh", PortState::Open), ("netbios-ssn", PortState::Filtered)]);
        assert_eq!(system_type(&host), SystemType::Windows);
    }

    #[test]
    fn ssh_alone_means_linux() {
        let host = host_with(&[("ssh", PortState::Open), ("http", PortState::Open)]);
        assert_eq!(system_type(&host), SystemType::Linux);
    }

    #[test]
    fn no_hints_means_unknown() {
        assert_eq!(system_type(&host_with(&[("http", PortState::Open)])), SystemType::Unknown);
        assert_eq!(system_type(&Host::new("10.0.0.2")).to_string(), "Unknown");
    }

    #[test]
    fn risk_tiers_follow_open_port_count() {
        assert_eq!(risk_level(&host_with_open_ports(11)), RiskLevel::High);
        assert_eq!(risk_level(&host_with_open_ports(10)), RiskLevel::Medium);
        assert_eq!(risk_level(&host_with_open_ports(6)), RiskLevel::Medium);
        assert_eq!(risk_level(&host_with_open_ports(5)), RiskLevel::Low);
        assert_eq!(risk_level(&host_with_open_ports(2)), RiskLevel::Low);
    }

    #[test]
    fn filtered_ports_do_not_raise_risk() {
        let host = host_with(&vec![("http", PortState::Filtered); 30]);
        assert_eq!(risk_level(&host), RiskLevel::Low);
    }

    #[test]
    fn risk_is_monotonic_in_open_ports() {
        let tiers: Vec<RiskLevel> = (0..40).map(RiskLevel::from_open_ports).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn risk_display_and_label() {
        assert_eq!(RiskLevel::High.to_string(), "high");
        assert_eq!(RiskLevel::Medium.label(), "Medium Risk");
    }
}
