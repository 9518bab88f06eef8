use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE: &str = "./notes.db";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub listen_addr: SocketAddr,
    /// SQLite database file, created on first start
    pub database_path: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            database_path: PathBuf::from(DEFAULT_DATABASE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
