//! Durable storage infrastructure module

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
