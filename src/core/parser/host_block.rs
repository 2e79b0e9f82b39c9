// src/core/parser/host_block.rs

use super::matchers;
use crate::core::models::{Host, SshHostKey, SslCertInfo};
use tracing::trace;

// Positions of the certificate lines relative to the line being examined.
// The anchor is the line directly after the one carrying `ssl-cert:`.
const SSL_SUBJECT_OFFSET: isize = -1;
const SSL_VALID_FROM_OFFSET: isize = 0;
const SSL_VALID_UNTIL_OFFSET: isize = 1;

/// Parses one host block. `lines[0]` is the identifier that followed the report
/// marker; the remaining entries are the block's lines in source order.
pub(super) fn parse_host_block(lines: &[&str]) -> Host {
    let identifier = lines.first().copied().unwrap_or_default();
    let (ip, hostname) = matchers::parse_identifier(identifier);
    let mut host = Host::new(&ip);
    host.hostname = hostname;

    for (index, line) in lines.iter().enumerate().skip(1) {
        if let Some(os) = matchers::match_os_details(line) {
            host.os = Some(os);
        }
        if let Some(distance) = matchers::match_network_distance(line) {
            host.distance = Some(distance);
        }
        if let Some(mut port) = matchers::match_port_line(line) {
            port.scripts = collect_script_output(lines, index);
            if port.service == "ssh" {
                port.ssh_host_keys = collect_ssh_host_keys(lines, index);
            }
            trace!(ip = %host.ip, port = port.port, state = %port.state, "Matched port line.");
            host.ports.push(port);
        }
        if let Some(ssl) = ssl_cert_at(lines, index) {
            if let Some(port) = host.ports.last_mut() {
                port.ssl = Some(ssl);
            }
        }
    }

    host
}

/// Collects the contiguous `|`-prefixed lines right after `port_index`.
fn collect_script_output(lines: &[&str], port_index: usize) -> Vec<String> {
    lines[port_index + 1..]
        .iter()
        .map_while(|line| matchers::match_script_line(line))
        .collect()
}

/// Collects host keys from the lines right after an ssh port line, stopping at
/// the first line that is not a well-formed `ssh-hostkey:` entry.
fn collect_ssh_host_keys(lines: &[&str], port_index: usize) -> Vec<SshHostKey> {
    lines[port_index + 1..]
        .iter()
        .map_while(|line| matchers::match_ssh_host_key(line))
        .collect()
}

/// Builds certificate info when the line before `index` carries `ssl-cert:`.
fn ssl_cert_at(lines: &[&str], index: usize) -> Option<SslCertInfo> {
    let marker_line = line_at(lines, index, SSL_SUBJECT_OFFSET)?;
    if !matchers::is_ssl_cert_line(marker_line) {
        return None;
    }
    Some(SslCertInfo {
        subject: matchers::match_ssl_subject(marker_line),
        valid_from: line_at(lines, index, SSL_VALID_FROM_OFFSET).and_then(matchers::match_ssl_not_before),
        valid_until: line_at(lines, index, SSL_VALID_UNTIL_OFFSET).and_then(matchers::match_ssl_not_after),
    })
}

fn line_at<'a>(lines: &[&'a str], index: usize, offset: isize) -> Option<&'a str> {
    let target = index.checked_add_signed(offset)?;
    lines.get(target).copied()
}
