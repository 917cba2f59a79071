use std::fs::File;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use crate::error::Result;

/// Terminal logging, plus a trace-level file log when `file_name` is given.
pub fn log_init(file_name: Option<&str>) -> Result<()> {
    #[cfg(debug_assertions)]
    let log_level = LevelFilter::Debug;

    #[cfg(not(debug_assertions))]
    let log_level = LevelFilter::Info;

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(name) = file_name {
        loggers.push(WriteLogger::new(
            LevelFilter::Trace,
            Config::default(),
            File::create(name)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
