use crate::consts::{
    Sector, ENTRY_COUNT, ENTRY_SIZE, SECTOR_SIZE, STATUS_ACTIVE, TABLE_OFFSET, TYPE_EXTENDED_CHS,
    TYPE_EXTENDED_LBA, TYPE_UNUSED,
};
use crate::util::record::OnDiskRecord;

const MEGA_BYTE: u64 = 1024 * 1024;

/// One 16-byte slot of an MBR or EBR partition table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartitionEntry {
    pub status: u8,
    pub first_chs: [u8; 3],
    pub partition_type: u8,
    pub last_chs: [u8; 3],
    pub lba: u32,
    pub sector_count: u32,
}

impl PartitionEntry {
    pub fn is_unused(&self) -> bool {
        self.partition_type == TYPE_UNUSED
    }

    pub fn is_extended(&self) -> bool {
        matches!(self.partition_type, TYPE_EXTENDED_CHS | TYPE_EXTENDED_LBA)
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    // u64 so that lba + sector_count cannot wrap; only 0/0 saturates
    pub fn end_sector(&self) -> u64 {
        (self.lba as u64 + self.sector_count as u64).saturating_sub(1)
    }

    pub fn size_in_megabytes(&self) -> u64 {
        self.sector_count as u64 * SECTOR_SIZE as u64 / MEGA_BYTE
    }
}

impl OnDiskRecord for PartitionEntry {
    const SIZE: usize = ENTRY_SIZE;

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(ENTRY_SIZE);
        buffer.push(self.status);
        buffer.extend_from_slice(&self.first_chs);
        buffer.push(self.partition_type);
        buffer.extend_from_slice(&self.last_chs);
        buffer.extend_from_slice(&self.lba.to_le_bytes());
        buffer.extend_from_slice(&self.sector_count.to_le_bytes());
        buffer
    }

    fn decode(bytes: &[u8]) -> PartitionEntry {
        PartitionEntry {
            status: bytes[0],
            first_chs: [bytes[1], bytes[2], bytes[3]],
            partition_type: bytes[4],
            last_chs: [bytes[5], bytes[6], bytes[7]],
            lba: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            sector_count: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        }
    }
}

/// Decodes the four slots at bytes [446, 510), unused slots included.
pub fn decode_table(sector: &Sector) -> [PartitionEntry; ENTRY_COUNT] {
    let mut entries = [PartitionEntry::default(); ENTRY_COUNT];
    entries.copy_from_slice(&PartitionEntry::decode_run(sector, TABLE_OFFSET, ENTRY_COUNT));
    entries
}

#[cfg(test)]
mod tests {
    use crate::consts::{ENTRY_COUNT, SECTOR_SIZE, TABLE_OFFSET};
    use crate::util::record::OnDiskRecord;

    use super::PartitionEntry;

    fn raw_entry() -> [u8; 16] {
        [
            0x80, 0x20, 0x21, 0x00, 0x83, 0xfe, 0xff, 0xff,
            0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00,
        ]
    }

    #[test]
    fn decodes_fields_little_endian() {
        let entry = PartitionEntry::decode(&raw_entry());
        assert_eq!(entry.status, 0x80);
        assert_eq!(entry.first_chs, [0x20, 0x21, 0x00]);
        assert_eq!(entry.partition_type, 0x83);
        assert_eq!(entry.last_chs, [0xfe, 0xff, 0xff]);
        assert_eq!(entry.lba, 2048);
        assert_eq!(entry.sector_count, 0x0010_0000);
        assert!(entry.is_active());
        assert!(!entry.is_extended());
        assert_eq!(entry.encode(), raw_entry().to_vec());
    }

    #[test]
    fn invalid_status_is_passed_through() {
        let mut raw = raw_entry();
        raw[0] = 0x13;
        let entry = PartitionEntry::decode(&raw);
        assert_eq!(entry.status, 0x13);
        assert!(!entry.is_active());
    }

    #[test]
    fn decodes_each_slot() {
        for slot in 0..ENTRY_COUNT {
            let mut sector = [0u8; SECTOR_SIZE];
            let offset = TABLE_OFFSET + slot * 16;
            sector[offset..offset + 16].copy_from_slice(&raw_entry());

            let entries = super::decode_table(&sector);
            for (index, entry) in entries.iter().enumerate() {
                if index == slot {
                    assert_eq!(*entry, PartitionEntry::decode(&raw_entry()));
                } else {
                    assert!(entry.is_unused());
                }
            }
        }
    }

    #[test]
    fn boot_signature_is_not_part_of_the_table() {
        let mut sector = [0u8; SECTOR_SIZE];
        sector[510] = 0x55;
        sector[511] = 0xAA;
        assert!(super::decode_table(&sector).iter().all(|e| e.is_unused()));
    }

    #[test]
    fn extended_types() {
        let mut entry = PartitionEntry::default();
        assert!(entry.is_unused());
        entry.partition_type = 0x05;
        assert!(entry.is_extended());
        entry.partition_type = 0x0F;
        assert!(entry.is_extended());
        entry.partition_type = 0x85;
        assert!(!entry.is_extended());
    }

    #[test]
    fn end_sector() {
        let entry = PartitionEntry { lba: 2048, sector_count: 2048, ..Default::default() };
        assert_eq!(entry.end_sector(), 4095);

        let entry = PartitionEntry { lba: u32::MAX, sector_count: u32::MAX, ..Default::default() };
        assert_eq!(entry.end_sector(), u32::MAX as u64 * 2 - 1);

        let entry = PartitionEntry { lba: 0, sector_count: 0, ..Default::default() };
        assert_eq!(entry.end_sector(), 0);
    }

    #[test]
    fn size_in_megabytes_floors() {
        let entry = PartitionEntry { sector_count: 2048, ..Default::default() };
        assert_eq!(entry.size_in_megabytes(), 1);

        let entry = PartitionEntry { sector_count: 2047, ..Default::default() };
        assert_eq!(entry.size_in_megabytes(), 0);

        let entry = PartitionEntry { sector_count: u32::MAX, ..Default::default() };
        assert_eq!(entry.size_in_megabytes(), 2_097_151);
    }
}
