use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use tally_core::error::{Result, TallyError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TallyConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub ops: OpsSection,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            ops: OpsSection::default(),
        }
    }
}

impl TallyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::UnsupportedVersion);
        }
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(100..=60000).contains(&self.shutdown_grace_ms) {
            return Err(TallyError::BadRequest(
                "server.shutdown_grace_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TallyError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_shutdown_grace_ms() -> u64 {
    10000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpsSection {
    /// Mount `/healthz`, `/readyz` and `/metrics`.
    #[serde(default = "default_ops_enabled")]
    pub enabled: bool,
}

impl Default for OpsSection {
    fn default() -> Self {
        Self {
            enabled: default_ops_enabled(),
        }
    }
}

fn default_ops_enabled() -> bool {
    true
}
