use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::{ConfigError, lookup_non_empty};

pub const DEFAULT_PORT: u16 = 5000;

/// The wildcard address, so the process accepts connections from outside a
/// container's network namespace.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(crate::env_lookup)
    }

    /// Reads `HOST` and `PORT`. A present `PORT` must be an integer in
    /// `1..=65535`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup_non_empty(&lookup, "HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::invalid("HOST", &value, e))?,
            None => DEFAULT_HOST,
        };

        let port = match lookup_non_empty(&lookup, "PORT") {
            Some(value) => parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(0) => Err(ConfigError::invalid(
            "PORT",
            value,
            "port must be greater than zero",
        )),
        Ok(port) => Ok(port),
        Err(e) => Err(ConfigError::invalid("PORT", value, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lookup_from;

    #[test]
    fn test_port_defaults_to_5000() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_numeric_port_is_used() {
        for (raw, expected) in [("8080", 8080), ("1", 1), ("65535", 65535), (" 3000 ", 3000)] {
            let config = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)])).unwrap();
            assert_eq!(config.port, expected, "PORT={raw}");
        }
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for raw in ["abc", "0", "70000", "-1", "80.5"] {
            let result = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)]));
            assert!(result.is_err(), "PORT={raw} should be rejected");
        }
    }

    #[test]
    fn test_host_override() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "9000")]))
                .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "HOST", .. }));
    }
}
