use ssdb_config::arg::Arg;

use log::error;

extern crate env_logger;

fn main() {
    env_logger::init();
    let arg = Arg::parse();
    let codec = arg.codec();

    match codec.parse(&arg.get_line_ref().join(" ")) {
        Ok(parsed) => {
            println!("{}", codec.serialize(&parsed.config));
            if !parsed.rest.is_empty() {
                println!("{}", parsed.rest.join(" "));
            }
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
