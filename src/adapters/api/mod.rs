//! Regret API adapter - talks to the remote analysis service over HTTP.

mod regret_api_client;

pub use regret_api_client::{RegretApiClient, RegretApiConfig};
