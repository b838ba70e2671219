//! # Change Request Service
//!
//! Implements the `ChangeRequestApi` port: submission encodes and
//! persists, approval decodes/validates/applies, rejection records the
//! reviewer's reason. The state machine is `Pending -> Approved` or
//! `Pending -> Rejected`, one transition ever, enforced here and by the
//! store's compare-and-set.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{EmployeeId, RequestId};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::codec::{decode_change, encode_change};
use crate::domain::config::ChangeRequestConfig;
use crate::domain::entities::{ChangeRequest, ChangeRequestParams};
use crate::domain::errors::{ChangeRequestError, StoreError};
use crate::domain::validation::validate_and_build_update;
use crate::ports::inbound::{
    ApprovalOutcome, ChangeRequestApi, ChangeRequestSummary, ChangeSubmission,
};
use crate::ports::outbound::{ChangeRequestStore, ProfileStore, TimeSource};

/// Change-request workflow engine.
///
/// Each operation is a short-lived unit of work; the stores are the only
/// shared resources.
pub struct ChangeRequestService<S, P, T> {
    /// Request persistence (driven port).
    requests: Arc<S>,
    /// Profile write capability (driven port).
    profiles: Arc<P>,
    /// Clock (driven port).
    clock: Arc<T>,
    /// Submission caps.
    config: ChangeRequestConfig,
}

impl<S, P, T> ChangeRequestService<S, P, T>
where
    S: ChangeRequestStore,
    P: ProfileStore,
    T: TimeSource,
{
    /// Create a service with default configuration.
    pub fn new(requests: Arc<S>, profiles: Arc<P>, clock: Arc<T>) -> Self {
        Self::with_config(requests, profiles, clock, ChangeRequestConfig::default())
    }

    /// Create a service with custom submission caps.
    pub fn with_config(
        requests: Arc<S>,
        profiles: Arc<P>,
        clock: Arc<T>,
        config: ChangeRequestConfig,
    ) -> Self {
        Self {
            requests,
            profiles,
            clock,
            config,
        }
    }

    fn check_reason(&self, reason: &str) -> Result<(), ChangeRequestError> {
        if reason.len() > self.config.max_reason_bytes {
            return Err(ChangeRequestError::ReasonTooLong {
                bytes: reason.len(),
                max: self.config.max_reason_bytes,
            });
        }
        Ok(())
    }

    /// Map a compare-and-set failure onto the caller-facing taxonomy.
    fn transition_error(err: StoreError) -> ChangeRequestError {
        match err {
            StoreError::NotFound(id) => ChangeRequestError::RequestNotFound(id),
            StoreError::AlreadyProcessed { id, current } => {
                ChangeRequestError::TransitionConflict { id, current }
            }
            other => ChangeRequestError::Store(other),
        }
    }
}

#[async_trait]
impl<S, P, T> ChangeRequestApi for ChangeRequestService<S, P, T>
where
    S: ChangeRequestStore + 'static,
    P: ProfileStore + 'static,
    T: TimeSource + 'static,
{
    async fn submit(&self, submission: ChangeSubmission) -> Result<RequestId, ChangeRequestError> {
        self.check_reason(&submission.reason)?;

        let encoded = encode_change(&submission.field, &submission.new_value);
        if encoded.len() > self.config.max_encoded_bytes {
            return Err(ChangeRequestError::PayloadTooLarge {
                bytes: encoded.len(),
                max: self.config.max_encoded_bytes,
            });
        }

        let request = ChangeRequest::new(ChangeRequestParams {
            request_id: Uuid::new_v4(),
            subject_id: submission.subject_id,
            encoded_change: encoded,
            reason: submission.reason,
            submitted_at: self.clock.now(),
        });
        let id = self.requests.insert(request).await?;

        info!(
            request_id = %id,
            subject_id = %submission.subject_id,
            field = %submission.field,
            "change request submitted"
        );
        Ok(id)
    }

    async fn approve(&self, id: RequestId) -> Result<ApprovalOutcome, ChangeRequestError> {
        let request = self
            .requests
            .get_by_id(id)
            .await?
            .ok_or(ChangeRequestError::RequestNotFound(id))?;

        if !request.status.is_pending() {
            warn!(request_id = %id, status = ?request.status, "approval refused, not pending");
            return Err(ChangeRequestError::TransitionConflict {
                id,
                current: request.status,
            });
        }

        // Decode and validate before touching anything. A failure here
        // leaves the request pending and the profile untouched.
        let (field_name, new_value) = decode_change(&request.encoded_change)?;
        let update = validate_and_build_update(&field_name, &new_value)?;

        // Profile write first, then the store's compare-and-set. A lost
        // race writes the same single-field value twice; the loser's
        // compare-and-set fails and it reports the conflict instead of a
        // second success.
        self.profiles
            .apply_update(request.subject_id, &update)
            .await
            .map_err(|err| match err {
                StoreError::SubjectNotFound(subject) => {
                    ChangeRequestError::SubjectNotFound(subject)
                }
                other => ChangeRequestError::Store(other),
            })?;

        self.requests
            .mark_approved(id, self.clock.now())
            .await
            .map_err(Self::transition_error)?;

        info!(
            request_id = %id,
            subject_id = %request.subject_id,
            field = %update.field,
            "change request approved and applied"
        );
        Ok(ApprovalOutcome {
            field_updated: update.field,
            new_value,
        })
    }

    async fn reject(&self, id: RequestId, reason: &str) -> Result<(), ChangeRequestError> {
        self.check_reason(reason)?;

        self.requests
            .mark_rejected(id, reason, self.clock.now())
            .await
            .map_err(Self::transition_error)?;

        info!(request_id = %id, "change request rejected");
        Ok(())
    }

    async fn list_for_subject(
        &self,
        subject: EmployeeId,
    ) -> Result<Vec<ChangeRequestSummary>, ChangeRequestError> {
        let requests = self.requests.list_by_subject(subject).await?;
        Ok(requests.into_iter().map(ChangeRequestSummary::from).collect())
    }
}
