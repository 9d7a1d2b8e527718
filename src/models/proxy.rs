//! Proxy model definitions
//!
//! Contains the normalized record every share-link decoder produces.

use std::fmt;

/// Represents the type of a proxy link.
/// This is the canonical enum used for scheme identification across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    Unknown,
    Shadowsocks,
    VMess,
    Trojan,
    Vless,
}

impl ProxyType {
    /// Human-readable name, used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Shadowsocks => "SS",
            ProxyType::VMess => "VMess",
            ProxyType::Trojan => "Trojan",
            ProxyType::Vless => "VLESS",
            ProxyType::Unknown => "Unknown",
        }
    }

    /// Classify a raw link by its scheme prefix.
    pub fn from_link(link: &str) -> Self {
        let scheme = match link.find("://") {
            Some(pos) => link[..pos].to_ascii_lowercase(),
            None => return ProxyType::Unknown,
        };
        match scheme.as_str() {
            "vmess" => ProxyType::VMess,
            "ss" => ProxyType::Shadowsocks,
            "trojan" => ProxyType::Trojan,
            "vless" => ProxyType::Vless,
            _ => ProxyType::Unknown,
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// VMess-specific connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VMessSettings {
    pub user_id: String,
    pub alter_id: u16,
    /// Always `auto`; Clash negotiates the actual cipher.
    pub cipher: String,
    pub network: String,
    pub tls: bool,
    /// Transport path (ws/h2/http path, or gRPC service name)
    pub path: Option<String>,
    /// Host header for the transport
    pub host: Option<String>,
}

/// Protocol-specific part of a [`Proxy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyKind {
    VMess(VMessSettings),
    Shadowsocks { cipher: String, password: String },
    Trojan { password: String, sni: String },
}

/// Represents one decoded proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    pub name: String,
    pub server: String,
    pub port: u16,
    pub kind: ProxyKind,
}

impl Proxy {
    pub fn proxy_type(&self) -> ProxyType {
        match self.kind {
            ProxyKind::VMess(_) => ProxyType::VMess,
            ProxyKind::Shadowsocks { .. } => ProxyType::Shadowsocks,
            ProxyKind::Trojan { .. } => ProxyType::Trojan,
        }
    }

    /// A record is usable only when it can be addressed by name and reached by host.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.server.is_empty()
    }
}

/// Display name used when a link carries no remark.
pub fn default_remark(server: &str, port: u16) -> String {
    format!("{}:{}", server, port)
}

/// Cipher assumed for Shadowsocks links whose method cannot be determined.
pub const SS_DEFAULT_CIPHER: &str = "aes-256-gcm";
/// VMess cipher emitted for every node.
pub const VMESS_DEFAULT_CIPHER: &str = "auto";
/// VMess transport when the link does not name one.
pub const VMESS_DEFAULT_NETWORK: &str = "tcp";
