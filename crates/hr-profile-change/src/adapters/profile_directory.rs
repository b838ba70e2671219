//! In-memory profile directory.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{EmployeeId, EmployeeProfile};
use tracing::debug;

use crate::domain::errors::StoreError;
use crate::domain::validation::ProfileUpdate;
use crate::ports::outbound::ProfileStore;

/// In-memory `ProfileStore`.
///
/// Holds full profile records so tests and single-process wiring can
/// observe what an approval actually wrote. Only the single-field
/// `apply_update` capability is part of the port; `insert`/`get` exist
/// for seeding and inspection.
#[derive(Default)]
pub struct InMemoryProfileDirectory {
    profiles: RwLock<HashMap<EmployeeId, EmployeeProfile>>,
}

impl InMemoryProfileDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile record.
    pub fn insert(&self, profile: EmployeeProfile) {
        self.profiles.write().insert(profile.id, profile);
    }

    /// Snapshot of a stored profile.
    pub fn get(&self, id: EmployeeId) -> Option<EmployeeProfile> {
        self.profiles.read().get(&id).cloned()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileDirectory {
    async fn apply_update(
        &self,
        subject: EmployeeId,
        update: &ProfileUpdate,
    ) -> Result<(), StoreError> {
        let mut guard = self.profiles.write();
        let profile = guard
            .get_mut(&subject)
            .ok_or(StoreError::SubjectNotFound(subject))?;
        update.apply_to(profile);
        debug!(subject = %subject, field = %update.field, "applied profile update");
        Ok(())
    }
}
