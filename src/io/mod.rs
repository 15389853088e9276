use crate::consts::{ByteOffset, Sector, SECTOR_SIZE};
use crate::driver::DeviceDriver;
use crate::util::error::{Error, ErrorKind};

pub(crate) struct IO<A: DeviceDriver> {
    device: A,
}

impl<A: DeviceDriver> IO<A> {
    pub fn new(device: A) -> IO<A> {
        IO { device }
    }

    /// Reads the 512-byte sector starting at `offset`. The offset is never rounded.
    pub(crate) fn read_sector(&self, offset: ByteOffset) -> Result<Sector, Error> {
        if offset % SECTOR_SIZE as u64 != 0 {
            return Err(Error::new(
                ErrorKind::Io,
                &format!("byte offset {} is not aligned to {} bytes", offset, SECTOR_SIZE),
                Some(libc::EINVAL),
            ));
        }

        let mut sector = [0u8; SECTOR_SIZE];
        self.device.read_exact_at(offset, &mut sector)?;
        log::debug!("read sector at byte offset {}", offset);
        Ok(sector)
    }
}
