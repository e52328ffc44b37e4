//! ClickHouse connection configuration.
//!
//! Connection parameters are collected once per CLI invocation and passed
//! by value into the connector. Credentials never appear in `Display` or
//! `Debug` output.

use crate::error::{Result, RiskPocError};

/// Connection parameters for a ClickHouse server.
///
/// # Example
/// ```rust
/// use riskpoc_core::ConnectionConfig;
///
/// let config = ConnectionConfig::new("db.internal".to_string())
///     .with_port(8123)
///     .with_database("risk_poc".to_string());
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Server host address
    pub host: String,
    /// HTTP interface port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Username for authentication
    pub username: String,
    /// Password for authentication (empty for the default account)
    pub password: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8123,
            database: "risk_poc".to_string(),
            username: "default".to_string(),
            password: String::new(),
        }
    }
}

impl std::fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.database)
        // Intentionally omits username and password
    }
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

impl ConnectionConfig {
    /// Creates a new connection config for `host` with default parameters.
    pub fn new(host: String) -> Self {
        Self {
            host,
            ..Default::default()
        }
    }

    /// Builder method to set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Builder method to set the database.
    pub fn with_database(mut self, database: String) -> Self {
        self.database = database;
        self
    }

    /// Builder method to set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = username;
        self
    }

    /// Builder method to set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = password;
        self
    }

    /// Base URL of the server's HTTP interface.
    pub fn http_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validates connection parameters.
    ///
    /// # Errors
    /// Returns a configuration error for an empty host, database, or
    /// username, or a zero port.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(RiskPocError::configuration("host cannot be empty"));
        }

        if self.port == 0 {
            return Err(RiskPocError::configuration(
                "port must be greater than 0",
            ));
        }

        if self.database.is_empty() {
            return Err(RiskPocError::configuration("database cannot be empty"));
        }

        if self.username.is_empty() {
            return Err(RiskPocError::configuration("username cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8123);
        assert_eq!(config.database, "risk_poc");
        assert_eq!(config.username, "default");
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_builder() {
        let config = ConnectionConfig::new("ch.example.com".to_string())
            .with_port(8443)
            .with_database("analytics".to_string())
            .with_username("reader".to_string())
            .with_password("secret".to_string());

        assert_eq!(config.host, "ch.example.com");
        assert_eq!(config.port, 8443);
        assert_eq!(config.database, "analytics");
        assert_eq!(config.username, "reader");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn test_http_url() {
        let config = ConnectionConfig::default();
        assert_eq!(config.http_url(), "http://localhost:8123");

        let config = ConnectionConfig::new("ch.example.com".to_string()).with_port(9999);
        assert_eq!(config.http_url(), "http://ch.example.com:9999");
    }

    #[test]
    fn test_validation() {
        assert!(ConnectionConfig::default().validate().is_ok());

        let config = ConnectionConfig {
            host: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ConnectionConfig::default().with_port(0);
        assert!(config.validate().is_err());

        let config = ConnectionConfig::default().with_database(String::new());
        assert!(config.validate().is_err());

        let config = ConnectionConfig::default().with_username(String::new());
        assert!(config.validate().is_err());

        // An empty password is the default ClickHouse account; allowed.
        let config = ConnectionConfig::default().with_password(String::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display_and_debug_omit_credentials() {
        let config = ConnectionConfig::default()
            .with_username("reader".to_string())
            .with_password("secret".to_string());

        let display = format!("{}", config);
        assert!(display.contains("localhost"));
        assert!(display.contains("8123"));
        assert!(!display.contains("reader"));
        assert!(!display.contains("secret"));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("****"));
    }
}
