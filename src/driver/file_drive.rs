use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use crate::consts::ByteOffset;
use crate::driver::DeviceDriver;
use crate::util::error::Error;

/// A block device or disk image opened read-only.
pub struct FileDrive {
    file: File,
    pub name: String,
}

impl FileDrive {
    pub fn open(path: &Path) -> Result<FileDrive, Error> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::device_open(&name, &e))?;
        log::debug!("opened {} read-only", name);
        Ok(FileDrive { file, name })
    }
}

impl DeviceDriver for FileDrive {
    fn read_exact_at(&self, offset: ByteOffset, buffer: &mut [u8]) -> Result<(), Error> {
        let mut file = &self.file;
        file.seek(SeekFrom::Start(offset))
            .map_err(|e| Error::io(&format!("lseek to byte offset {}", offset), &e))?;
        file.read_exact(buffer).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => Error::io(&format!("short read at byte offset {}", offset), &e),
            _ => Error::io(&format!("read at byte offset {}", offset), &e),
        })
    }
}
