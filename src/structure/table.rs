use crate::structure::entry::PartitionEntry;

/// Reported partitions in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartitionTable {
    entries: Vec<PartitionEntry>,
}

impl PartitionTable {
    pub fn new() -> PartitionTable {
        PartitionTable { entries: Vec::new() }
    }

    pub fn push(&mut self, entry: PartitionEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PartitionEntry] {
        &self.entries
    }

    /// Entries paired with their 1-based partition number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &PartitionEntry)> {
        self.entries().iter().enumerate().map(|(index, entry)| (index + 1, entry))
    }
}
