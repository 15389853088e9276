use std::fmt;
use std::io;
use std::os::raw::c_int;

type ErrorNum = c_int;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    DeviceOpen,
    Io,
    CorruptChain,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub error_num: ErrorNum,
}

impl Error {
    pub fn new(kind: ErrorKind, message: &str, error_num: Option<ErrorNum>) -> Error {
        Error {
            kind,
            message: message.to_string(),
            error_num: error_num.unwrap_or(libc::EIO),
        }
    }

    pub fn usage(program: &str) -> Error {
        Error::new(ErrorKind::Usage, &format!("Usage: {} <device>", program), Some(libc::EINVAL))
    }

    pub fn device_open(path: &str, cause: &io::Error) -> Error {
        Error::new(ErrorKind::DeviceOpen, &format!("open {}: {}", path, cause), cause.raw_os_error())
    }

    /// Wraps an OS error raised while positioning or reading the device.
    pub fn io(context: &str, cause: &io::Error) -> Error {
        Error::new(ErrorKind::Io, &format!("{}: {}", context, cause), cause.raw_os_error())
    }

    pub fn corrupt_chain(offset: u64) -> Error {
        Error::new(
            ErrorKind::CorruptChain,
            &format!("extended boot record chain revisits byte offset {}", offset),
            Some(libc::ELOOP),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
