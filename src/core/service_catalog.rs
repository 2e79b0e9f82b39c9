//! A static, read-only catalogue of well-known service names as Nmap reports
//! them. The UI uses it to tag ports with a category and to explain what a
//! service usually is; the parser never consults it.

use std::fmt;

/// Broad families of services, used for icons and colouring in the host views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ServiceCategory {
    Web,
    RemoteAccess,
    NameService,
    Directory,
    Database,
    Windows,
    Other,
}

impl ServiceCategory {
    /// Short tag shown in front of port rows.
    pub fn tag(&self) -> &'static str {
        match self {
            ServiceCategory::Web => "WEB",
            ServiceCategory::RemoteAccess => "SHELL",
            ServiceCategory::NameService => "DNS",
            ServiceCategory::Directory => "DIR",
            ServiceCategory::Database => "DB",
            ServiceCategory::Windows => "WIN",
            ServiceCategory::Other => "NET",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceCategory::Web => write!(f, "Web"),
            ServiceCategory::RemoteAccess => write!(f, "Remote Access"),
            ServiceCategory::NameService => write!(f, "Name Service"),
            ServiceCategory::Directory => write!(f, "Directory"),
            ServiceCategory::Database => write!(f, "Database"),
            ServiceCategory::Windows => write!(f, "Windows Networking"),
            ServiceCategory::Other => write!(f, "Other"),
        }
    }
}

pub struct ServiceDetail {
    /// Service name exactly as it appears in the SERVICE column.
    pub name: &'static str,
    pub title: &'static str,
    pub category: ServiceCategory,
    pub description: &'static str,
}

static SERVICES: &[ServiceDetail] = &[
    // --- Web ---
    ServiceDetail {
        name: "http",
        title: "HTTP",
        category: ServiceCategory::Web,
        description: "Plain-text web server. Anything sent to it, including credentials, travels unencrypted.",
    },
    ServiceDetail {
        name: "https",
        title: "HTTPS",
        category: ServiceCategory::Web,
        description: "TLS-protected web server. Check the certificate details and the software version behind it.",
    },
    ServiceDetail {
        name: "http-proxy",
        title: "HTTP Proxy",
        category: ServiceCategory::Web,
        description: "Web proxy or alternate web port. Open proxies can be abused to relay traffic.",
    },
    ServiceDetail {
        name: "ssl/http",
        title: "HTTP over TLS",
        category: ServiceCategory::Web,
        description: "Web server detected behind a TLS wrapper on a non-standard port.",
    },
    // --- Remote access ---
    ServiceDetail {
        name: "ssh",
        title: "Secure Shell",
        category: ServiceCategory::RemoteAccess,
        description: "Encrypted remote shell. Usually a Unix-like host; review exposed host keys and allowed authentication methods.",
    },
    ServiceDetail {
        name: "telnet",
        title: "Telnet",
        category: ServiceCategory::RemoteAccess,
        description: "Unencrypted remote shell. Credentials are sent in clear text and the service should rarely be exposed.",
    },
    ServiceDetail {
        name: "ms-wbt-server",
        title: "Remote Desktop",
        category: ServiceCategory::RemoteAccess,
        description: "Microsoft Remote Desktop Protocol. A frequent target for brute force attacks when reachable from outside.",
    },
    // --- Name services ---
    ServiceDetail {
        name: "domain",
        title: "DNS",
        category: ServiceCategory::NameService,
        description: "Domain name server. Check whether it answers recursive queries or zone transfers for arbitrary clients.",
    },
    ServiceDetail {
        name: "dns",
        title: "DNS",
        category: ServiceCategory::NameService,
        description: "Domain name server. Check whether it answers recursive queries or zone transfers for arbitrary clients.",
    },
    // --- Directory services ---
    ServiceDetail {
        name: "ldap",
        title: "LDAP",
        category: ServiceCategory::Directory,
        description: "Directory service, often an Active Directory domain controller. Anonymous binds can leak the whole directory.",
    },
    ServiceDetail {
        name: "ldaps",
        title: "LDAP over TLS",
        category: ServiceCategory::Directory,
        description: "TLS-protected directory service, typically a domain controller.",
    },
    ServiceDetail {
        name: "kerberos-sec",
        title: "Kerberos",
        category: ServiceCategory::Directory,
        description: "Kerberos key distribution centre. Its presence strongly suggests a Windows domain controller.",
    },
    // --- Databases ---
    ServiceDetail {
        name: "ms-sql-s",
        title: "Microsoft SQL Server",
        category: ServiceCategory::Database,
        description: "Database engine reachable over the network. Databases should normally only be reachable from application hosts.",
    },
    ServiceDetail {
        name: "mysql",
        title: "MySQL",
        category: ServiceCategory::Database,
        description: "Database engine reachable over the network. Databases should normally only be reachable from application hosts.",
    },
    ServiceDetail {
        name: "postgresql",
        title: "PostgreSQL",
        category: ServiceCategory::Database,
        description: "Database engine reachable over the network. Databases should normally only be reachable from application hosts.",
    },
    ServiceDetail {
        name: "redis",
        title: "Redis",
        category: ServiceCategory::Database,
        description: "In-memory data store. Older deployments accept commands without authentication.",
    },
    ServiceDetail {
        name: "mongodb",
        title: "MongoDB",
        category: ServiceCategory::Database,
        description: "Document database. Check that authentication is enabled.",
    },
    // --- Windows networking ---
    ServiceDetail {
        name: "msrpc",
        title: "Microsoft RPC",
        category: ServiceCategory::Windows,
        description: "Windows RPC endpoint mapper. Exposes the list of RPC services running on the host.",
    },
    ServiceDetail {
        name: "netbios-ssn",
        title: "NetBIOS Session",
        category: ServiceCategory::Windows,
        description: "Legacy Windows file and printer sharing transport.",
    },
    ServiceDetail {
        name: "microsoft-ds",
        title: "SMB",
        category: ServiceCategory::Windows,
        description: "Windows file sharing (SMB). Check for signing requirements and legacy SMBv1 support.",
    },
];

/// Looks up a service by name, ignoring ASCII case.
pub fn get_service_detail(service: &str) -> Option<&'static ServiceDetail> {
    SERVICES.iter().find(|s| s.name.eq_ignore_ascii_case(service))
}

/// Category of a service; unknown names fall back to `Other`.
pub fn category_of(service: &str) -> ServiceCategory {
    get_service_detail(service)
        .map(|detail| detail.category)
        .unwrap_or(ServiceCategory::Other)
}
