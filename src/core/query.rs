// src/core/query.rs

use crate::core::classifier::{risk_level, system_type};
use crate::core::models::Host;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::Display;

pub const ALL_HOSTS_LABEL: &str = "All Hosts";

/// How the host list is partitioned for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    #[strum(to_string = "No Grouping")]
    None,
    #[strum(to_string = "System Type")]
    System,
    #[strum(to_string = "Risk Level")]
    Risk,
}

impl GroupBy {
    pub fn next(self) -> Self {
        match self {
            GroupBy::None => GroupBy::System,
            GroupBy::System => GroupBy::Risk,
            GroupBy::Risk => GroupBy::None,
        }
    }
}

/// A labelled run of hosts shown together.
#[derive(Debug, Clone)]
pub struct HostGroup<'a> {
    pub label: String,
    pub hosts: Vec<&'a Host>,
}

/// Keeps hosts whose IP, hostname, service names or port numbers contain `term`.
/// Matching ignores case; an empty term keeps everything.
pub fn filter_hosts<'a>(hosts: &'a [Host], term: &str) -> Vec<&'a Host> {
    let needle = term.trim().to_lowercase();
    hosts
        .iter()
        .filter(|host| needle.is_empty() || host_matches(host, &needle))
        .collect()
}

fn host_matches(host: &Host, needle: &str) -> bool {
    host.ip.to_lowercase().contains(needle)
        || host
            .hostname
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
        || host.ports.iter().any(|p| {
            p.service.to_lowercase().contains(needle) || p.port.to_string().contains(needle)
        })
}

/// Groups hosts by the chosen key. Groups keep the order in which their first
/// member appears, and members keep their relative order.
pub fn group_hosts<'a>(hosts: Vec<&'a Host>, by: GroupBy) -> Vec<HostGroup<'a>> {
    let key: fn(&Host) -> String = match by {
        GroupBy::None => {
            return vec![HostGroup {
                label: ALL_HOSTS_LABEL.to_string(),
                hosts,
            }];
        }
        GroupBy::System => |host| system_type(host).to_string(),
        GroupBy::Risk => |host| risk_level(host).label().to_string(),
    };

    let mut groups: Vec<HostGroup<'a>> = Vec::new();
    for host in hosts {
        let label = key(host);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.hosts.push(host),
            None => groups.push(HostGroup { label, hosts: vec![host] }),
        }
    }
    groups
}
