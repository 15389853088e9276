pub mod entry;
pub mod table;
pub mod walker;
