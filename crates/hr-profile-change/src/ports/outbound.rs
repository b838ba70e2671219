//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the change-request subsystem needs from the rest of the
//! system: request persistence, single-field profile writes, and a clock.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use shared_types::{EmployeeId, RequestId, Timestamp};

use crate::domain::entities::ChangeRequest;
use crate::domain::errors::StoreError;
use crate::domain::validation::ProfileUpdate;

/// Change-request persistence (Driven Port).
///
/// `mark_approved` and `mark_rejected` are compare-and-set transitions:
/// the "status is still pending" check and the status write must be one
/// atomic step inside the store, so concurrent reviewers of the same
/// request see exactly one winner and the loser gets `AlreadyProcessed`.
#[async_trait]
pub trait ChangeRequestStore: Send + Sync {
    /// Persist a new request. Returns its id.
    async fn insert(&self, request: ChangeRequest) -> Result<RequestId, StoreError>;

    /// Look up a request by id.
    async fn get_by_id(&self, id: RequestId) -> Result<Option<ChangeRequest>, StoreError>;

    /// All requests for a subject, ordered by submission time descending.
    async fn list_by_subject(
        &self,
        subject: EmployeeId,
    ) -> Result<Vec<ChangeRequest>, StoreError>;

    /// Transition a pending request to `Approved`, stamping the processing
    /// time. Fails with `AlreadyProcessed` if the request is not pending.
    async fn mark_approved(&self, id: RequestId, processed_at: Timestamp)
        -> Result<(), StoreError>;

    /// Transition a pending request to `Rejected`, overwriting the reason
    /// with the reviewer's and stamping the processing time. Fails with
    /// `AlreadyProcessed` if the request is not pending.
    async fn mark_rejected(
        &self,
        id: RequestId,
        reason: &str,
        processed_at: Timestamp,
    ) -> Result<(), StoreError>;
}

/// Single-field write access to profile records (Driven Port).
///
/// The change-request subsystem never requests compound updates; one call
/// writes exactly one field.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Apply a validated single-field update to the subject's profile.
    ///
    /// Fails with `SubjectNotFound` when no such profile exists.
    async fn apply_update(
        &self,
        subject: EmployeeId,
        update: &ProfileUpdate,
    ) -> Result<(), StoreError>;
}

/// Clock abstraction (Driven Port).
///
/// Every `submitted_at`/`processed_at` stamp flows through this, which is
/// what keeps lifecycle tests deterministic.
pub trait TimeSource: Send + Sync {
    /// Current time in milliseconds since the UNIX epoch.
    fn now(&self) -> Timestamp;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Hand-advanced clock for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now: AtomicU64,
}

impl ManualTimeSource {
    /// Create a clock starting at the given instant.
    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Pin the clock to an instant.
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}
