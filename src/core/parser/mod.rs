// src/core/parser/mod.rs

// Turns Nmap's human-readable output into `Host` records. The work is split
// into the line rules (`matchers`) and the per-host pass (`host_block`); this
// file only finds the host blocks.
pub mod matchers;
mod host_block;

use crate::core::models::Host;
use tracing::debug;

/// Literal text that opens every host block.
pub const REPORT_MARKER: &str = "Nmap scan report for ";

/// Parses a full scan report into hosts, in the order they appear.
///
/// Text before the first report marker (banner, warnings) is dropped. Lines
/// that match no rule are skipped, so this never fails: input without any
/// marker simply produces an empty list.
pub fn parse_scan(text: &str) -> Vec<Host> {
    let blocks = split_host_blocks(text);
    debug!(blocks = blocks.len(), "Split scan output into host blocks.");

    let hosts: Vec<Host> = blocks
        .iter()
        .map(|lines| host_block::parse_host_block(lines))
        .collect();

    for host in &hosts {
        debug!(ip = %host.ip, ports = host.ports.len(), "Parsed host block.");
    }
    hosts
}

/// Groups lines into blocks. Each block starts with the identifier that
/// followed the marker, then holds every line up to the next marker.
fn split_host_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in text.lines() {
        if let Some(identifier) = line.strip_prefix(REPORT_MARKER) {
            blocks.push(vec![identifier]);
        } else if let Some(block) = blocks.last_mut() {
            block.push(line);
        }
    }
    blocks
}
