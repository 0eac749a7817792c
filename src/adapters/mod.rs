//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the workflow to external systems:
//! - `api` - HTTP client for the remote analysis service
//! - `storage` - key-value stores (file, in-memory)
//! - `mock` - scripted analysis and statistics providers for tests
//! - `terminal` - text rendering for the CLI

pub mod api;
pub mod mock;
pub mod storage;
pub mod terminal;

pub use api::{RegretApiClient, RegretApiConfig};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
