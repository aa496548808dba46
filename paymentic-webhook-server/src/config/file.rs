//! TOML file configuration structures.
//!
//! These structs directly map to the `paymentic.toml` file format.

use paymentic_sdk::PaymenticConfig;
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub paymentic: PaymenticConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"

[paymentic]
api_key = "key"
sandbox = true
webhook_secret = "s3cr3t"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert_eq!(config.paymentic.api_key, "key");
        assert!(config.paymentic.sandbox);
        assert_eq!(config.paymentic.webhook_secret.as_deref(), Some("s3cr3t"));
    }

    #[test]
    fn test_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[paymentic]
api_key = "key"
"#,
        )
        .unwrap();
        assert_eq!(config.server.listen, default_listen_addr());
        assert!(!config.paymentic.sandbox);
        assert!(config.paymentic.webhook_secret.is_none());
    }

    #[test]
    fn test_missing_paymentic_section_fails() {
        let result: Result<FileConfig, _> = toml::from_str(
            r#"
[server]
listen = "127.0.0.1:3000"
"#,
        );
        assert!(result.is_err());
    }
}
