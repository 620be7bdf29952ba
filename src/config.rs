//! Server configuration

use clap::{Parser, ValueEnum};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Shop API server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "shop-api", about = "In-memory shop catalog and cart service", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "SHOP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "SHOP_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHOP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "SHOP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Get the socket address for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["shop-api"]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "shop-api",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:9090");
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
