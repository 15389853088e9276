use std::collections::HashSet;

use crate::consts::{ByteOffset, BOOT_SIGNATURE, ENTRY_COUNT, SECTOR_SIZE, SIGNATURE_OFFSET};
use crate::driver::DeviceDriver;
use crate::io::IO;
use crate::structure::entry::{decode_table, PartitionEntry};
use crate::structure::table::PartitionTable;
use crate::util::error::{Error, ErrorKind};

/// How the `lba` field of entries found inside an extended boot record is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LbaMode {
    /// Every `lba` is a device sector number.
    #[default]
    Absolute,
    /// Logical entries are relative to their EBR, link entries to the start of
    /// the outermost extended partition.
    Relative,
}

/// A walk that stopped early. `partial` holds what was found before `error`.
#[derive(Debug)]
pub struct WalkError {
    pub partial: PartitionTable,
    pub error: Error,
}

struct Frame {
    entries: [PartitionEntry; ENTRY_COUNT],
    next_slot: usize,
    table_sector: u32,
    // start of the outermost extended partition, None for the MBR
    extended_base: Option<u32>,
}

pub struct Walker<A: DeviceDriver> {
    io: IO<A>,
    mode: LbaMode,
}

impl<A: DeviceDriver> Walker<A> {
    pub fn new(device: A, mode: LbaMode) -> Walker<A> {
        Walker { io: IO::new(device), mode }
    }

    pub fn walk(&self) -> Result<PartitionTable, WalkError> {
        self.walk_from(0, 0)
    }

    /// Depth-first, pre-order walk of the table at `start_offset` and every
    /// extended boot record reachable from it. `base_offset` is the byte offset
    /// of the enclosing extended partition, 0 when starting from the MBR.
    pub fn walk_from(&self, start_offset: ByteOffset, base_offset: ByteOffset) -> Result<PartitionTable, WalkError> {
        let mut table = PartitionTable::new();
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        let root_base = match base_offset {
            0 => None,
            offset => match sector_of(offset) {
                Ok(sector) => Some(sector),
                Err(error) => return Err(WalkError { partial: table, error }),
            },
        };
        match self.enter(start_offset, root_base, &mut visited) {
            Ok(frame) => stack.push(frame),
            Err(error) => return Err(WalkError { partial: table, error }),
        }

        while let Some(frame) = stack.last_mut() {
            if frame.next_slot == ENTRY_COUNT {
                stack.pop();
                continue;
            }

            let slot = frame.next_slot;
            frame.next_slot += 1;

            let entry = frame.entries[slot];
            if entry.is_unused() {
                continue;
            }

            let lba = self.resolve(frame, &entry);
            let extended_base = frame.extended_base;
            log::trace!(
                "sector {} slot {}: type {:02x} lba {} count {}{}",
                frame.table_sector,
                slot,
                entry.partition_type,
                lba,
                entry.sector_count,
                if entry.is_active() { " (active)" } else { "" },
            );
            table.push(PartitionEntry { lba, ..entry });

            if entry.is_extended() {
                let child_offset = lba as u64 * SECTOR_SIZE as u64;
                match self.enter(child_offset, Some(extended_base.unwrap_or(lba)), &mut visited) {
                    Ok(child) => stack.push(child),
                    Err(error) => return Err(WalkError { partial: table, error }),
                }
            }
        }

        Ok(table)
    }

    fn enter(
        &self,
        offset: ByteOffset,
        extended_base: Option<u32>,
        visited: &mut HashSet<ByteOffset>,
    ) -> Result<Frame, Error> {
        let table_sector = sector_of(offset)?;
        if !visited.insert(offset) {
            return Err(Error::corrupt_chain(offset));
        }

        let sector = self.io.read_sector(offset)?;
        if sector[SIGNATURE_OFFSET..] != BOOT_SIGNATURE {
            log::warn!("no boot signature in partition table at byte offset {}", offset);
        }

        Ok(Frame {
            entries: decode_table(&sector),
            next_slot: 0,
            table_sector,
            extended_base,
        })
    }

    fn resolve(&self, frame: &Frame, entry: &PartitionEntry) -> u32 {
        let base = match (self.mode, frame.extended_base) {
            (LbaMode::Absolute, _) | (LbaMode::Relative, None) => 0,
            (LbaMode::Relative, Some(extended_base)) if entry.is_extended() => extended_base,
            (LbaMode::Relative, Some(_)) => frame.table_sector,
        };
        match base.checked_add(entry.lba) {
            Some(lba) => lba,
            None => {
                log::warn!("lba {} + {} does not fit in 32 bits", base, entry.lba);
                u32::MAX
            }
        }
    }
}

/// Sector number of a byte offset. Rejects offsets that are misaligned or
/// beyond what a 32-bit LBA can address.
fn sector_of(offset: ByteOffset) -> Result<u32, Error> {
    if offset % SECTOR_SIZE as u64 != 0 {
        return Err(Error::new(
            ErrorKind::Io,
            &format!("byte offset {} is not aligned to {} bytes", offset, SECTOR_SIZE),
            Some(libc::EINVAL),
        ));
    }
    u32::try_from(offset / SECTOR_SIZE as u64).map_err(|_| {
        Error::new(
            ErrorKind::Io,
            &format!("byte offset {} is beyond the 32-bit sector range", offset),
            Some(libc::EINVAL),
        )
    })
}
