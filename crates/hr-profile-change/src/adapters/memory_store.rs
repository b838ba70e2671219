//! In-memory change-request store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{EmployeeId, RequestId, Timestamp};

use crate::domain::entities::ChangeRequest;
use crate::domain::errors::StoreError;
use crate::ports::outbound::ChangeRequestStore;

/// In-memory `ChangeRequestStore`.
///
/// The pending check and the status write of `mark_approved` /
/// `mark_rejected` run under one write lock, which is the compare-and-set
/// the port requires: of two concurrent reviewers exactly one wins, the
/// other gets `AlreadyProcessed`. A database-backed adapter provides the
/// same guarantee with a single-row transaction.
#[derive(Default)]
pub struct InMemoryChangeRequestStore {
    requests: RwLock<HashMap<RequestId, ChangeRequest>>,
}

impl InMemoryChangeRequestStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored requests.
    pub fn len(&self) -> usize {
        self.requests.read().len()
    }

    /// True when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.requests.read().is_empty()
    }
}

#[async_trait]
impl ChangeRequestStore for InMemoryChangeRequestStore {
    async fn insert(&self, request: ChangeRequest) -> Result<RequestId, StoreError> {
        let id = request.request_id;
        self.requests.write().insert(id, request);
        Ok(id)
    }

    async fn get_by_id(&self, id: RequestId) -> Result<Option<ChangeRequest>, StoreError> {
        Ok(self.requests.read().get(&id).cloned())
    }

    async fn list_by_subject(
        &self,
        subject: EmployeeId,
    ) -> Result<Vec<ChangeRequest>, StoreError> {
        let mut rows: Vec<ChangeRequest> = self
            .requests
            .read()
            .values()
            .filter(|request| request.subject_id == subject)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(rows)
    }

    async fn mark_approved(
        &self,
        id: RequestId,
        processed_at: Timestamp,
    ) -> Result<(), StoreError> {
        let mut guard = self.requests.write();
        let request = guard.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let current = request.status;
        request
            .approve(processed_at)
            .map_err(|_| StoreError::AlreadyProcessed { id, current })
    }

    async fn mark_rejected(
        &self,
        id: RequestId,
        reason: &str,
        processed_at: Timestamp,
    ) -> Result<(), StoreError> {
        let mut guard = self.requests.write();
        let request = guard.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let current = request.status;
        request
            .reject(reason, processed_at)
            .map_err(|_| StoreError::AlreadyProcessed { id, current })
    }
}
