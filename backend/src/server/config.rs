//! Runtime configuration from CLI flags and environment variables.

use std::net::SocketAddr;

use clap::Parser;

/// Configuration for the brewery backend server.
#[derive(Debug, Clone, Parser)]
#[command(name = "brewery-backend", about = "Non-blocking beer catalogue API")]
pub struct ServerConfig {
    /// Socket address for the HTTP listener.
    #[arg(long, env = "BREWERY_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Start with an empty catalogue instead of the bootstrap seed data.
    #[arg(long, env = "BREWERY_NO_SEED")]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces() {
        let config = ServerConfig::parse_from(["brewery-backend"]);
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.no_seed);
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            ServerConfig::parse_from(["brewery-backend", "--bind-addr", "127.0.0.1:9090", "--no-seed"]);
        assert_eq!(config.bind_addr.port(), 9090);
        assert!(config.no_seed);
    }
}
