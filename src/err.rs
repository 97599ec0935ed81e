use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ConfigErr {
    // a token starting with `-` that names no known option
    UnrecognizedFlag(String),
    // a known option in last position, no value follows
    MissingValue(String),
    MalformedInteger { flag: String, value: String },
    InvalidEscape(String),
    UnknownConnectionType(String),
    WrongConnectionType(String),
}

impl std::error::Error for ConfigErr {}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErr::UnrecognizedFlag(token) | ConfigErr::MissingValue(token) => write!(
                f,
                "Unrecognized option or bad number of args for: '{}'",
                token
            ),
            ConfigErr::MalformedInteger { flag, value } => {
                write!(f, "Malformed integer for '{}': '{}'", flag, value)
            }
            ConfigErr::InvalidEscape(value) => write!(f, "Invalid escape sequence in: '{}'", value),
            ConfigErr::UnknownConnectionType(name) => {
                write!(f, "Unknown connection type: '{}'", name)
            }
            ConfigErr::WrongConnectionType(name) => {
                write!(f, "Connection type '{}' has no ssdb command line", name)
            }
        }
    }
}
