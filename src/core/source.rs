// src/core/source.rs

use crate::core::models::Host;
use crate::core::parser::parse_scan;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// A scan file that was read and parsed in full.
#[derive(Debug, Clone)]
pub struct LoadedScan {
    pub path: PathBuf,
    pub hosts: Vec<Host>,
}

/// Reads the whole scan file. The text is only handed over once complete.
pub async fn load_scan_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|source| {
        error!(path = %path.display(), error = %source, "Failed to read scan file.");
        Error::Read {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Reads and parses a scan file. Parsing is skipped entirely when the read fails.
pub async fn load_and_parse(path: PathBuf) -> Result<LoadedScan> {
    info!(path = %path.display(), "Loading scan file.");
    let text = load_scan_file(&path).await?;
    let hosts = parse_scan(&text);
    info!(hosts = hosts.len(), bytes = text.len(), "Scan file parsed.");
    Ok(LoadedScan { path, hosts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.txt");
        let err = load_and_parse(missing.clone()).await.unwrap_err();
        match err {
            Error::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn loads_and_parses_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scan.txt");
        std::fs::write(&path, "Nmap scan report for 10.0.0.1\n22/tcp open ssh\n").unwrap();

        let loaded = load_and_parse(path.clone()).await.unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.hosts.len(), 1);
        assert_eq!(loaded.hosts[0].ports[0].service, "ssh");
    }
}
