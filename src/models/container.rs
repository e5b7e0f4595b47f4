//! Container snapshot as shown in the dashboard.
//!
//! Taken once at startup and never refreshed.

use serde::{Deserialize, Serialize};

/// Bind address the engine reports for the IPv6 half of a dual-stack publish.
pub const IPV6_WILDCARD: &str = "::";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortMapping {
    pub private_port: u16,
    /// 0 when the port is exposed but not published.
    pub public_port: u16,
    #[serde(rename = "type")]
    pub kind: String,
    pub bind_address: String,
}

impl PortMapping {
    pub fn new(
        private_port: u16,
        public_port: u16,
        kind: impl Into<String>,
        bind_address: impl Into<String>,
    ) -> Self {
        Self {
            private_port,
            public_port,
            kind: kind.into(),
            bind_address: bind_address.into(),
        }
    }

    /// `"{private} -> {public} {type}"`.
    pub fn label(&self) -> String {
        format!("{} -> {} {}", self.private_port, self.public_port, self.kind)
    }

    pub fn is_ipv6_wildcard(&self) -> bool {
        self.bind_address == IPV6_WILDCARD
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerRecord {
    pub id: String,
    pub names: Vec<String>,
    pub image: String,
    pub state: String,
    pub status: String,
    pub ports: Vec<PortMapping>,
}

impl ContainerRecord {
    pub fn new(image: impl Into<String>, ports: Vec<PortMapping>) -> Self {
        Self {
            image: image.into(),
            ports,
            ..Self::default()
        }
    }

    /// Ports shown in the list, skipping `::`-bound duplicates.
    pub fn listed_ports(&self) -> impl Iterator<Item = &PortMapping> {
        self.ports.iter().filter(|p| !p.is_ipv6_wildcard())
    }

    /// Comma-separated labels of [`Self::listed_ports`].
    pub fn port_summary(&self) -> String {
        self.listed_ports()
            .map(PortMapping::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First name without the engine's leading `/`.
    pub fn display_name(&self) -> Option<&str> {
        self.names
            .first()
            .map(|n| n.strip_prefix('/').unwrap_or(n.as_str()))
            .filter(|n| !n.is_empty())
    }

    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(12) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/container.rs"]
mod tests;
