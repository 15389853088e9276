use crate::consts::ByteOffset;
use crate::util::error::Error;

pub(crate) mod file_drive;
#[cfg(test)]
pub(crate) mod memory_drive;

/// Read-only access to the raw bytes of a disk.
pub trait DeviceDriver {
    /// Fills `buffer` completely from `offset`, or fails.
    fn read_exact_at(&self, offset: ByteOffset, buffer: &mut [u8]) -> Result<(), Error>;
}
