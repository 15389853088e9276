pub(crate) const SECTOR_SIZE: usize = 512;
pub(crate) const TABLE_OFFSET: usize = 446;
pub(crate) const ENTRY_SIZE: usize = 16;
pub(crate) const ENTRY_COUNT: usize = 4;
pub(crate) const SIGNATURE_OFFSET: usize = 510;
pub(crate) const BOOT_SIGNATURE: [u8; 2] = [0x55, 0xAA];

pub(crate) const TYPE_UNUSED: u8 = 0x00;
pub(crate) const TYPE_EXTENDED_CHS: u8 = 0x05;
pub(crate) const TYPE_EXTENDED_LBA: u8 = 0x0F;
pub(crate) const STATUS_ACTIVE: u8 = 0x80;

pub type ByteOffset = u64;
pub type Sector = [u8; SECTOR_SIZE];
