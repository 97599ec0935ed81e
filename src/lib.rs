mod err;
mod helper;

pub mod arg;
pub mod codec;
pub mod config;
pub mod settings;

pub use arg::Arg;
pub use codec::{Codec, ParseMode, Parsed};
pub use config::ConnectionConfig;
pub use err::ConfigErr;
pub use settings::{ConnectionSettings, ConnectionType};

type Result<T> = std::result::Result<T, ConfigErr>;
