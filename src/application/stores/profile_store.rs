//! ProfileStore - persisted [`UserProfile`].

use std::sync::Arc;

use super::{load_json, save_json};
use crate::domain::user::UserProfile;
use crate::ports::{KeyValueStore, StorageError};

pub const PROFILE_KEY: &str = "userProfile";

#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Option<UserProfile> {
        load_json(self.store.as_ref(), PROFILE_KEY).await
    }

    /// Replaces the stored profile entirely.
    pub async fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), PROFILE_KEY, profile).await
    }
}
