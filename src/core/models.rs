// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// --- Port Models ---

/// The state Nmap reported for a port. Only the three plain states are
/// modelled; compound states such as `open|filtered` never produce a port.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PortState {
    Open,
    Filtered,
    Closed,
}

/// One SSH host key advertised by an `ssh` service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SshHostKey {
    pub key_type: String,
    pub fingerprint: String,
}

/// Certificate fields pulled from an `ssl-cert` script block.
/// Each field is independent: a line that fails to match leaves only that field empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SslCertInfo {
    pub subject: Option<String>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
}

// A single discovered port on a host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Port {
    pub port: u16,
    pub state: PortState,
    pub service: String,
    pub product: Option<String>,
    pub version: Option<String>,
    pub extra_info: Option<String>,
    pub scripts: Vec<String>,
    pub ssh_host_keys: Vec<SshHostKey>,
    pub ssl: Option<SslCertInfo>,
}

impl Port {
    /// Creates a port with only the fields a port line always carries.
    pub fn new(port: u16, state: PortState, service: &str) -> Self {
        Self {
            port,
            state,
            service: service.to_string(),
            product: None,
            version: None,
            extra_info: None,
            scripts: Vec::new(),
            ssh_host_keys: Vec::new(),
            ssl: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}

// --- Host Models ---

/// One scanned target, in the order it appeared in the scan output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Host {
    pub ip: String,
    pub hostname: Option<String>,
    pub os: Option<String>,
    pub distance: Option<u32>,
    pub ports: Vec<Port>,
}

impl Host {
    pub fn new(ip: &str) -> Self {
        Self {
            ip: ip.to_string(),
            hostname: None,
            os: None,
            distance: None,
            ports: Vec::new(),
        }
    }

    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_open())
    }

    pub fn open_port_count(&self) -> usize {
        self.open_ports().count()
    }

    pub fn filtered_port_count(&self) -> usize {
        self.ports
            .iter()
            .filter(|p| p.state == PortState::Filtered)
            .count()
    }

    /// True when any port on the host runs the named service.
    pub fn has_service(&self, service: &str) -> bool {
        self.ports.iter().any(|p| p.service == service)
    }
}
