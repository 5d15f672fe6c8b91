//! Storage adapters implementing the repository port.

pub mod json_store;
pub mod memory;

pub use json_store::JsonFileRepository;
pub use memory::InMemoryRepository;
