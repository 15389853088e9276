use crate::consts::TYPE_EXTENDED_CHS;
use crate::structure::entry::PartitionEntry;
use crate::structure::table::PartitionTable;

pub const HEADER: &str = "Device    Start        End    Sectors   Size      Id  Type";

pub fn type_name(partition_type: u8) -> &'static str {
    if partition_type == TYPE_EXTENDED_CHS {
        "Extended"
    } else {
        "Linux"
    }
}

/// `/dev/sda` + 1 -> `/dev/sda1`, `/dev/nvme0n1` + 1 -> `/dev/nvme0n1p1`.
pub fn partition_name(device: &str, number: usize) -> String {
    match device.chars().last() {
        Some(c) if c.is_ascii_digit() => format!("{}p{}", device, number),
        _ => format!("{}{}", device, number),
    }
}

// cells are 9 wide plus a separating space
pub fn format_row(name: &str, entry: &PartitionEntry) -> String {
    format!(
        "{:<9} {:<9} {:<9} {:<9} {:<9} {:02x}  {}",
        name,
        entry.lba,
        entry.end_sector(),
        entry.sector_count,
        entry.size_in_megabytes(),
        entry.partition_type,
        type_name(entry.partition_type),
    )
}

pub fn format_report(device: &str, table: &PartitionTable) -> Vec<String> {
    let mut lines = vec![HEADER.to_string()];
    for (number, entry) in table.numbered() {
        lines.push(format_row(&partition_name(device, number), entry));
    }
    lines
}
