//! connection parameters of an ssdb server

use crate::codec;
use crate::err::ConfigErr;

use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i32 = 8888;
pub const DEFAULT_DELIMITER: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    // no range check, 0 means unset when serializing
    pub port: i32,
    pub user: Option<String>,
    pub password: Option<String>,
    /// splits multi-bulk replies
    pub delimiter: String,
    pub shutdown: bool,
}

impl ConnectionConfig {
    pub fn new() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            user: None,
            password: None,
            delimiter: String::from(DEFAULT_DELIMITER),
            shutdown: false,
        }
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = String::from(host);
        self
    }

    pub fn with_port(mut self, port: i32) -> Self {
        self.port = port;
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = Some(String::from(user));
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(String::from(password));
        self
    }

    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = String::from(delimiter);
        self
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&codec::serialize(self))
    }
}

// lenient, diagnostics are logged and never returned
impl FromStr for ConnectionConfig {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(codec::parse(s).config)
    }
}
