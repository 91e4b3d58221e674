//! Logger setup.

use crate::config::LOG4RS_FILE;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Console pattern used when no `log4rs.yml` is present.
const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Initialise log4rs from `log4rs.yml` if it exists, else log to stderr.
pub fn init(verbose: bool) -> Result<(), Box<dyn Error>> {
    if Path::new(LOG4RS_FILE).exists() {
        log4rs::init_file(LOG4RS_FILE, Default::default())?;
        log::debug!("Logging configured from {LOG4RS_FILE}");
        return Ok(());
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let console = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(Root::builder().appender("console").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
