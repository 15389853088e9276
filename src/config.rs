use std::path::PathBuf;

use log::LevelFilter;

use crate::structure::walker::LbaMode;
use crate::util::error::Error;
use crate::util::logger::parse_level;

pub const LOG_VAR: &str = "MBRSCAN_LOG";
pub const LBA_VAR: &str = "MBRSCAN_LBA";

const DEFAULT_PROGRAM: &str = "mbrscan";

#[derive(Debug, PartialEq)]
pub struct Config {
    pub device: PathBuf,
    pub lba_mode: LbaMode,
    pub log_level: LevelFilter,
    /// Environment values that could not be parsed, reported once logging is up.
    pub rejected: Vec<(&'static str, String)>,
}

impl Config {
    /// `args` includes the program name, as `std::env::args` does.
    pub fn from_args<I, E>(args: I, env: E) -> Result<Config, Error>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let positional: Vec<String> = args.collect();
        if positional.len() != 1 {
            return Err(Error::usage(&program));
        }

        let mut rejected = Vec::new();

        let log_level = match env(LOG_VAR) {
            None => LevelFilter::Warn,
            Some(value) => match parse_level(&value) {
                Some(level) => level,
                None => {
                    rejected.push((LOG_VAR, value));
                    LevelFilter::Warn
                }
            },
        };

        let lba_mode = match env(LBA_VAR).as_deref().map(str::trim) {
            None => LbaMode::Absolute,
            Some(value) if value.eq_ignore_ascii_case("absolute") => LbaMode::Absolute,
            Some(value) if value.eq_ignore_ascii_case("relative") => LbaMode::Relative,
            Some(value) => {
                rejected.push((LBA_VAR, value.to_string()));
                LbaMode::Absolute
            }
        };

        Ok(Config {
            device: PathBuf::from(&positional[0]),
            lba_mode,
            log_level,
            rejected,
        })
    }
}
