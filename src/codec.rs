//! textual codec for ConnectionConfig, `-h 127.0.0.1 -p 8888 -d \n`

use crate::config::ConnectionConfig;
use crate::err::ConfigErr;
use crate::helper::{atoi, from_printable_string, to_printable_string};
use crate::Result;

use log::{trace, warn};

pub const HOST: &str = "-h";
pub const PORT: &str = "-p";
pub const USER: &str = "-u";
pub const PASSWORD: &str = "-a";
pub const DELIMITER: &str = "-d";

type FlagSetter = fn(&mut ConnectionConfig, String) -> Result<()>;

// every option takes exactly one value
const FLAGS: &[(&str, FlagSetter)] = &[
    (HOST, set_host),
    (PORT, set_port),
    (USER, set_user),
    (PASSWORD, set_password),
    (DELIMITER, set_delimiter),
];

fn set_host(config: &mut ConnectionConfig, value: String) -> Result<()> {
    config.host = value;
    Ok(())
}

// the port is always applied, a malformed value is reported afterwards
fn set_port(config: &mut ConnectionConfig, value: String) -> Result<()> {
    config.port = atoi(&value);
    match value.parse::<i32>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ConfigErr::MalformedInteger {
            flag: PORT.to_string(),
            value,
        }),
    }
}

fn set_user(config: &mut ConnectionConfig, value: String) -> Result<()> {
    config.user = Some(value);
    Ok(())
}

fn set_password(config: &mut ConnectionConfig, value: String) -> Result<()> {
    config.password = Some(value);
    Ok(())
}

fn set_delimiter(config: &mut ConnectionConfig, value: String) -> Result<()> {
    config.delimiter = value;
    Ok(())
}

fn find_flag(token: &str) -> Option<FlagSetter> {
    FLAGS
        .iter()
        .find(|(flag, _)| *flag == token)
        .map(|(_, setter)| *setter)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub config: ConnectionConfig,
    /// index of the token where scanning stopped
    pub consumed: usize,
    pub rest: Vec<String>,
    pub diagnostics: Vec<ConfigErr>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    mode: ParseMode,
    escape: bool,
}

impl Codec {
    pub fn new() -> Self {
        Self {
            mode: ParseMode::Lenient,
            escape: false,
        }
    }

    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    // values with spaces need this to survive a round trip
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn serialize(&self, config: &ConnectionConfig) -> String {
        let mut argv: Vec<String> = Vec::new();
        let mut push = |flag: &str, value: &str| {
            argv.push(flag.to_string());
            argv.push(self.encode(value));
        };

        if !config.host.is_empty() {
            push(HOST, &config.host);
        }
        if config.port != 0 {
            push(PORT, &config.port.to_string());
        }
        if let Some(user) = &config.user {
            push(USER, user);
        }
        if let Some(password) = &config.password {
            push(PASSWORD, password);
        }
        if !config.delimiter.is_empty() {
            push(DELIMITER, &config.delimiter);
        }

        argv.join(" ")
    }

    pub fn parse(&self, line: &str) -> Result<Parsed> {
        self.parse_args(&tokenize(line))
    }

    pub fn parse_args<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Parsed> {
        let parsed = self.scan(tokens);
        match (self.mode, parsed.diagnostics.first()) {
            (ParseMode::Strict, Some(err)) => Err(err.clone()),
            _ => Ok(parsed),
        }
    }

    fn scan<S: AsRef<str>>(&self, tokens: &[S]) -> Parsed {
        let mut config = ConnectionConfig::new();
        let mut diagnostics = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_ref();
            match find_flag(token) {
                Some(setter) if i + 1 < tokens.len() => {
                    let value = match self.decode(tokens[i + 1].as_ref()) {
                        Ok(value) => value,
                        Err(err) => {
                            self.report(&err);
                            diagnostics.push(err);
                            break;
                        }
                    };
                    trace!("apply option {}", token);
                    if let Err(err) = setter(&mut config, value) {
                        self.report(&err);
                        diagnostics.push(err);
                    }
                    i += 2;
                }
                Some(_) => {
                    let err = ConfigErr::MissingValue(token.to_string());
                    self.report(&err);
                    diagnostics.push(err);
                    break;
                }
                None if token.starts_with('-') => {
                    let err = ConfigErr::UnrecognizedFlag(token.to_string());
                    self.report(&err);
                    diagnostics.push(err);
                    break;
                }
                // likely the command name, stop here
                None => {
                    trace!("stop at token {}: {}", i, token);
                    break;
                }
            }
        }

        let rest = tokens[i..]
            .iter()
            .map(|token| token.as_ref().to_string())
            .collect();
        Parsed {
            config,
            consumed: i,
            rest,
            diagnostics,
        }
    }

    fn report(&self, err: &ConfigErr) {
        if self.mode == ParseMode::Lenient {
            warn!("{}", err);
        }
    }

    fn encode(&self, value: &str) -> String {
        if self.escape {
            to_printable_string(value)
        } else {
            value.to_string()
        }
    }

    fn decode(&self, value: &str) -> Result<String> {
        if self.escape {
            from_printable_string(value)
        } else {
            Ok(value.to_string())
        }
    }
}

// runs of spaces do not produce empty tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').filter(|token| !token.is_empty()).collect()
}

pub fn serialize(config: &ConnectionConfig) -> String {
    Codec::new().serialize(config)
}

pub fn parse(line: &str) -> Parsed {
    parse_args(&tokenize(line))
}

pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Parsed {
    Codec::new().scan(tokens)
}
