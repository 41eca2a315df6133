use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Public URL of this API, reported by `/api/info`.
    pub api_endpoint: String,
    /// Deployment label, reported by `/api/info`.
    pub deployed_on: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .and_then(|s| s.parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_endpoint =
            lookup("API_ENDPOINT").unwrap_or_else(|| format!("http://localhost:{}", DEFAULT_PORT));

        let deployed_on = lookup("DEPLOYED_ON").unwrap_or_else(|| "local".to_string());

        Self {
            host,
            port,
            api_endpoint,
            deployed_on,
        }
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
