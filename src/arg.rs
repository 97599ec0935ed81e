use crate::codec::{Codec, ParseMode};

use clap::Parser;
use marco::Getter;

/// Parse an ssdb connection command line and print it back normalized,
/// followed by the unconsumed tokens, if any.
#[derive(Parser, Debug, Getter)]
#[command(author, version, about, long_about, disable_help_flag = true)]
pub struct Arg {
    /// Fail on the first bad option instead of logging a warning
    #[clap(long)]
    strict: bool,

    /// Read and write values with `\n \r \t \s \\` escapes
    #[clap(long)]
    escape: bool,

    #[clap(long, action = clap::ArgAction::Help)]
    help: Option<bool>,

    /// Connection options, e.g. `-h 127.0.0.1 -p 8888 -d \n`
    #[clap(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    line: Vec<String>,
}

impl Arg {
    pub fn parse() -> Self {
        Arg::parse_from(std::env::args())
    }

    pub fn codec(&self) -> Codec {
        let mode = if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        };
        Codec::new().mode(mode).escape(self.escape)
    }
}
