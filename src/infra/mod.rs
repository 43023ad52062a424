//! Infrastructure layer - Storage backing the services.

mod memory_store;

pub use memory_store::MemoryStore;
