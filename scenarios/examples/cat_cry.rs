use std::env;

use log::{error, info};
use scenarios::{cat_cry, Transcript};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .unwrap();

    let mut mice = env::args().skip(1).collect::<Vec<_>>();
    if mice.is_empty() {
        mice = vec!["mouse1".to_string(), "mouse2".to_string()];
    }

    let transcript = Transcript::new();
    match cat_cry::run(&mice, &transcript) {
        Ok(()) => info!("{} lines written", transcript.lines().len()),
        Err(err) => error!("{}", err),
    };
}
