//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One JSON file per key on disk
//! - **InMemoryKeyValueStore** - Values in memory (testing, `memory` backend)
//!
//! ## Usage
//!
//! ```ignore
//! use regret_engine::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let store = FileKeyValueStore::new("./data/regret-engine");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
