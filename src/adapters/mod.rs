// Adapters layer: concrete implementations for external collaborators
// (data file, table, template, storage).

pub mod loader;
pub mod storage;
pub mod table;
pub mod template;
