// src/core/parser/matchers.rs

//! Independent line rules. Every rule takes a single line and either returns a
//! structured capture or `None`; a `None` simply means "this rule does not apply".

use crate::core::models::{Port, PortState, SshHostKey};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

pub const OS_DETAILS_LABEL: &str = "OS details:";
pub const SSH_HOSTKEY_MARKER: &str = "ssh-hostkey:";
pub const SSL_CERT_MARKER: &str = "ssl-cert:";
pub const SCRIPT_PREFIX: char = '|';

/// Width of the script marker (`| ` or `|_`) removed from script output lines.
const SCRIPT_PREFIX_WIDTH: usize = 2;

static RE_PORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)/tcp\s+(open|filtered|closed)\s+(\S+)(?:\s+(.*\S))?\s*$").unwrap()
});
static RE_NETWORK_DISTANCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Network Distance:\D*(\d+)").unwrap());
static RE_SSH_HOSTKEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+(\S+)\s+(\S+)\s+\((\w+)\)").unwrap());
static RE_SSL_SUBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Subject:\s*(.+)").unwrap());
static RE_SSL_NOT_BEFORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Not valid before:\s*(.+)").unwrap());
static RE_SSL_NOT_AFTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Not valid after:\s*(.+)").unwrap());

/// Splits the identifier on a report marker line into `(ip, hostname)`.
///
/// `router.local (192.168.1.1)` yields the hostname and the parenthesised IP;
/// anything without a parenthesis is taken as the IP itself.
pub fn parse_identifier(identifier: &str) -> (String, Option<String>) {
    match identifier.split_once('(') {
        Some((name, rest)) => {
            let ip = rest.split(')').next().unwrap_or_default().trim();
            (ip.to_string(), non_empty(name))
        }
        None => (identifier.trim().to_string(), None),
    }
}

pub fn match_os_details(line: &str) -> Option<String> {
    let (_, details) = line.split_once(OS_DETAILS_LABEL)?;
    non_empty(details)
}

pub fn match_network_distance(line: &str) -> Option<u32> {
    RE_NETWORK_DISTANCE
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}

/// Matches `<port>/tcp <state> <service>[ <rest>]`, optionally indented.
/// Script output (`|`-prefixed) never matches, even when it quotes a port.
///
/// The trailing text is only broken into product/version/extra info for open
/// ports. A port number of zero or above 65535 rejects the line.
pub fn match_port_line(line: &str) -> Option<Port> {
    let caps = RE_PORT_LINE.captures(line)?;
    let number = caps[1].parse::<u16>().ok().filter(|n| *n != 0)?;
    let state = PortState::from_str(&caps[2]).ok()?;
    let mut port = Port::new(number, state, &caps[3]);

    if let (Some(rest), PortState::Open) = (caps.get(4), state) {
        let mut tokens = rest.as_str().split_whitespace();
        port.product = tokens.next().map(str::to_string);
        port.version = tokens.next().map(str::to_string);
        let extra = tokens.collect::<Vec<_>>().join(" ");
        port.extra_info = non_empty(&extra);
    }
    Some(port)
}

/// Matches a `ssh-hostkey:` line carrying `<bits> <algorithm> <fingerprint> (<type>)`.
pub fn match_ssh_host_key(line: &str) -> Option<SshHostKey> {
    if !line.contains(SSH_HOSTKEY_MARKER) {
        return None;
    }
    let caps = RE_SSH_HOSTKEY.captures(line)?;
    Some(SshHostKey {
        key_type: caps[4].to_string(),
        fingerprint: caps[3].to_string(),
    })
}

/// Returns the script text of a `|`-prefixed line with its marker removed.
pub fn match_script_line(line: &str) -> Option<String> {
    if !line.starts_with(SCRIPT_PREFIX) {
        return None;
    }
    let body = line
        .char_indices()
        .nth(SCRIPT_PREFIX_WIDTH)
        .map(|(idx, _)| &line[idx..])
        .unwrap_or_default();
    Some(body.to_string())
}

pub fn is_ssl_cert_line(line: &str) -> bool {
    line.contains(SSL_CERT_MARKER)
}

pub fn match_ssl_subject(line: &str) -> Option<String> {
    capture_label(&RE_SSL_SUBJECT, line)
}

pub fn match_ssl_not_before(line: &str) -> Option<String> {
    capture_label(&RE_SSL_NOT_BEFORE, line)
}

pub fn match_ssl_not_after(line: &str) -> Option<String> {
    capture_label(&RE_SSL_NOT_AFTER, line)
}

fn capture_label(re: &Regex, line: &str) -> Option<String> {
    re.captures(line).and_then(|caps| non_empty(&caps[1]))
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_with_hostname() {
        let (ip, hostname) = parse_identifier("router.local (192.168.1.1)");
        assert_eq!(ip, "192.168.1.1");
        assert_eq!(hostname.as_deref(), Some("router.local"));
    }

    #[test]
    fn identifier_without_hostname() {
        let (ip, hostname) = parse_identifier("  10.0.0.1 ");
        assert_eq!(ip, "10.0.0.1");
        assert_eq!(hostname, None);
    }

    #[test]
    fn identifier_with_unclosed_parenthesis() {
        let (ip, hostname) = parse_identifier("gw (10.0.0.254");
        assert_eq!(ip, "10.0.0.254");
        assert_eq!(hostname.as_deref(), Some("gw"));
    }

    #[test]
    fn os_details_are_trimmed() {
        assert_eq!(
            match_os_details("OS details: Linux 5.0 - 5.14 ").as_deref(),
            Some("Linux 5.0 - 5.14")
        );
        assert_eq!(match_os_details("OS details:   "), None);
        assert_eq!(match_os_details("Running: Linux 5.X"), None);
    }

    #[test]
    fn network_distance_takes_first_integer() {
        assert_eq!(match_network_distance("Network Distance: 2 hops"), Some(2));
        assert_eq!(match_network_distance("Network Distance: one hop"), None);
    }

    #[test]
    fn open_port_line_splits_trailing_text() {
        let port = match_port_line("80/tcp   open  http    Apache httpd 2.4.41 ((Ubuntu))").unwrap();
        assert_eq!(port.port, 80);
        assert_eq!(port.state, PortState::Open);
        assert_eq!(port.service, "http");
        assert_eq!(port.product.as_deref(), Some("Apache"));
        assert_eq!(port.version.as_deref(), Some("httpd"));
        assert_eq!(port.extra_info.as_deref(), Some("2.4.41 ((Ubuntu))"));
    }

    #[test]
    fn filtered_port_ignores_trailing_text() {
        let port = match_port_line("445/tcp filtered microsoft-ds no-response").unwrap();
        assert_eq!(port.state, PortState::Filtered);
        assert_eq!(port.product, None);
        assert_eq!(port.version, None);
        assert_eq!(port.extra_info, None);
    }

    #[test]
    fn port_line_without_trailing_text_has_absent_fields() {
        let port = match_port_line("22/tcp open ssh   ").unwrap();
        assert_eq!(port.service, "ssh");
        assert_eq!(port.product, None);
    }

    #[test]
    fn rejects_lines_that_are_not_plain_tcp_ports() {
        assert!(match_port_line("53/udp open domain").is_none());
        assert!(match_port_line("80/tcp open|filtered http").is_none());
        assert!(match_port_line("0/tcp open weird").is_none());
        assert!(match_port_line("70000/tcp open weird").is_none());
        assert!(match_port_line("| 80/tcp open http").is_none());
        assert!(match_port_line("PORT   STATE SERVICE").is_none());
    }

    #[test]
    fn indented_port_lines_still_match() {
        let port = match_port_line("  22/tcp open ssh OpenSSH 8.2").unwrap();
        assert_eq!(port.port, 22);
        assert_eq!(port.product.as_deref(), Some("OpenSSH"));
        assert_eq!(match_port_line("\t80/tcp filtered http").map(|p| p.port), Some(80));
        // Script text is still not a port line, even when it quotes one.
        assert!(match_port_line("|   443/tcp open https").is_none());
    }

    #[test]
    fn ssh_host_key_requires_marker_and_shape() {
        let key = match_ssh_host_key("| ssh-hostkey: 3072 SHA256 AbCdEf123 (RSA)").unwrap();
        assert_eq!(key.key_type, "RSA");
        assert_eq!(key.fingerprint, "AbCdEf123");
        assert!(match_ssh_host_key("|   3072 SHA256 AbCdEf123 (RSA)").is_none());
        assert!(match_ssh_host_key("| ssh-hostkey: ").is_none());
    }

    #[test]
    fn script_line_strips_two_character_marker() {
        assert_eq!(match_script_line("| http-title: Home").as_deref(), Some("http-title: Home"));
        assert_eq!(match_script_line("|_http-server-header: nginx").as_deref(), Some("http-server-header: nginx"));
        assert_eq!(match_script_line("|").as_deref(), Some(""));
        assert_eq!(match_script_line("|é日本").as_deref(), Some("日本"));
        assert_eq!(match_script_line(" | indented"), None);
    }

    #[test]
    fn ssl_labels_capture_values() {
        assert_eq!(
            match_ssl_subject("| ssl-cert: Subject: commonName=example.com").as_deref(),
            Some("commonName=example.com")
        );
        assert_eq!(match_ssl_subject("| Subject Alternative Name: DNS:example.com"), None);
        assert_eq!(
            match_ssl_not_before("| Not valid before: 2024-01-01T00:00:00").as_deref(),
            Some("2024-01-01T00:00:00")
        );
        assert_eq!(
            match_ssl_not_after("|_Not valid after:  2025-01-01T00:00:00").as_deref(),
            Some("2025-01-01T00:00:00")
        );
    }
}
