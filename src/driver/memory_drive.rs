use std::io;

use crate::consts::{ByteOffset, SECTOR_SIZE};
use crate::driver::DeviceDriver;
use crate::util::error::Error;

/// Disk image held in memory, grown on demand by `write_sector`.
pub struct MemoryDrive {
    bytes: Vec<u8>,
}

impl MemoryDrive {
    pub fn new(sector_count: usize) -> MemoryDrive {
        MemoryDrive { bytes: vec![0; sector_count * SECTOR_SIZE] }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> MemoryDrive {
        MemoryDrive { bytes }
    }

    pub fn write_sector(&mut self, index: u64, sector: &[u8]) {
        let offset = index as usize * SECTOR_SIZE;
        if self.bytes.len() < offset + SECTOR_SIZE {
            self.bytes.resize(offset + SECTOR_SIZE, 0);
        }
        self.bytes[offset..offset + sector.len()].copy_from_slice(sector);
    }
}

impl DeviceDriver for MemoryDrive {
    fn read_exact_at(&self, offset: ByteOffset, buffer: &mut [u8]) -> Result<(), Error> {
        let start = offset as usize;
        let end = start + buffer.len();
        if offset > self.bytes.len() as u64 || end > self.bytes.len() {
            let cause = io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer");
            return Err(Error::io(&format!("short read at byte offset {}", offset), &cause));
        }
        buffer.copy_from_slice(&self.bytes[start..end]);
        Ok(())
    }
}
