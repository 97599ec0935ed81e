//! connection settings edited by the connection dialog

use crate::codec::{Codec, Parsed};
use crate::config::ConnectionConfig;
use crate::err::ConfigErr;
use crate::Result;

use marco::Getter;

use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    Redis,
    Memcached,
    Ssdb,
    // anything that could not be recognized
    Bad,
}

const SUPPORTED_CONNECTION_TYPES: [ConnectionType; 3] = [
    ConnectionType::Redis,
    ConnectionType::Memcached,
    ConnectionType::Ssdb,
];

pub fn supported_connection_types() -> &'static [ConnectionType] {
    &SUPPORTED_CONNECTION_TYPES
}

/// Tooltip for the command line field of the given connection type.
pub fn use_help_text(connection_type: ConnectionType) -> &'static str {
    match connection_type {
        ConnectionType::Redis => "-h <hostname> -p <port> -a <password> -n <db> -d <delimiter>",
        ConnectionType::Memcached => "-h <hostname> -p <port> -u <user> -a <password>",
        ConnectionType::Ssdb => "-h <hostname> -p <port> -u <user> -a <password> -d <delimiter>",
        ConnectionType::Bad => "",
    }
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Redis => "Redis",
            ConnectionType::Memcached => "Memcached",
            ConnectionType::Ssdb => "Ssdb",
            ConnectionType::Bad => "Unknown",
        }
    }

    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(ConnectionType::Bad)
    }

    /// Whether the dialog should enable the editable fields.
    pub fn is_valid(&self) -> bool {
        *self != ConnectionType::Bad
    }
}

impl Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = ConfigErr;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        supported_connection_types()
            .iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ConfigErr::UnknownConnectionType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getter)]
pub struct ConnectionSettings {
    connection_name: String,
    connection_type: ConnectionType,
    logging_enabled: bool,
    command_line: String,
}

impl ConnectionSettings {
    pub fn new(connection_name: &str, connection_type: ConnectionType) -> Self {
        let command_line = match connection_type {
            ConnectionType::Ssdb => ConnectionConfig::new().to_string(),
            _ => String::new(),
        };
        Self {
            connection_name: String::from(connection_name),
            connection_type,
            logging_enabled: false,
            command_line,
        }
    }

    pub fn set_connection_name(&mut self, connection_name: &str) {
        self.connection_name = String::from(connection_name);
    }

    pub fn set_connection_type(&mut self, connection_type: ConnectionType) {
        self.connection_type = connection_type;
    }

    pub fn set_logging_enabled(&mut self, logging_enabled: bool) {
        self.logging_enabled = logging_enabled;
    }

    pub fn set_command_line(&mut self, command_line: &str) {
        self.command_line = String::from(command_line);
    }

    pub fn ssdb_config(&self, codec: &Codec) -> Result<Parsed> {
        self.check_ssdb()?;
        codec.parse(&self.command_line)
    }

    pub fn set_ssdb_config(&mut self, config: &ConnectionConfig, codec: &Codec) -> Result<()> {
        self.check_ssdb()?;
        self.command_line = codec.serialize(config);
        Ok(())
    }

    fn check_ssdb(&self) -> Result<()> {
        match self.connection_type {
            ConnectionType::Ssdb => Ok(()),
            other => Err(ConfigErr::WrongConnectionType(other.to_string())),
        }
    }
}
