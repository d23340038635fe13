//! `[serve]` section configuration.
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # 0.0.0.0 to accept LAN connections
//! port = 5277
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    pub interface: IpAddr,

    /// HTTP port number. Taken ports are retried upward.
    pub port: u16,
}

pub struct ServeFields {
    pub interface: FieldPath,
    pub port: FieldPath,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 5277,
        }
    }
}

impl ServeConfig {
    pub const FIELDS: ServeFields = ServeFields {
        interface: FieldPath::new("serve.interface"),
        port: FieldPath::new("serve.port"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.port == 0 {
            diag.error_with_hint(
                Self::FIELDS.port,
                "port must not be 0",
                "use a fixed port, e.g. 5277",
            );
        }
    }
}
