mod config;
mod consts;
mod driver;
mod io;
mod structure;
mod util;

use std::process::ExitCode;

use crate::config::Config;
use crate::driver::file_drive::FileDrive;
use crate::structure::walker::Walker;
use crate::util::error::Error;
use crate::util::format::format_report;

fn run() -> Result<(), Error> {
    let config = Config::from_args(std::env::args(), |key| std::env::var(key).ok())?;
    util::logger::init(config.log_level);
    for (key, value) in &config.rejected {
        log::warn!("ignoring {}={:?}", key, value);
    }

    let drive = FileDrive::open(&config.device)?;
    let device = drive.name.clone();
    let walker = Walker::new(drive, config.lba_mode);

    match walker.walk() {
        Ok(table) => {
            log::info!("{} partitions found on {}", table.len(), device);
            for line in format_report(&device, &table) {
                println!("{}", line);
            }
            Ok(())
        }
        Err(failure) => {
            if !failure.partial.is_empty() {
                for line in format_report(&device, &failure.partial) {
                    println!("{}", line);
                }
            }
            Err(failure.error)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("{:?} error, errno {}", error.kind, error.error_num);
            eprintln!("{}", error);
            ExitCode::from(1)
        }
    }
}
