//! # Domain Entities
//!
//! The persisted change request and its lifecycle.

use serde::{Deserialize, Serialize};
use shared_types::{EmployeeId, RequestId, Timestamp};

use super::value_objects::RequestStatus;

/// A persisted proposal to change one field of one profile record.
///
/// `request_id`, `subject_id`, `encoded_change` and `submitted_at` are
/// immutable once submitted. `reason` starts as the submitter's
/// justification and is overwritten exactly once, at rejection, with the
/// reviewer's reason. `processed_at` is set if and only if the status has
/// left `Pending`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    /// Unique identifier, generated at submission.
    pub request_id: RequestId,
    /// Profile record the change applies to.
    pub subject_id: EmployeeId,
    /// Serialized `(field, newValue)` pair.
    pub encoded_change: String,
    /// Submitter's justification, or the reviewer's reason after rejection.
    pub reason: String,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Submission timestamp.
    pub submitted_at: Timestamp,
    /// Set exactly once, when the status leaves `Pending`.
    pub processed_at: Option<Timestamp>,
}

/// Parameters for creating a change request.
#[derive(Clone, Debug)]
pub struct ChangeRequestParams {
    /// Unique identifier.
    pub request_id: RequestId,
    /// Profile record the change applies to.
    pub subject_id: EmployeeId,
    /// Serialized `(field, newValue)` pair.
    pub encoded_change: String,
    /// Submitter's justification.
    pub reason: String,
    /// Submission timestamp.
    pub submitted_at: Timestamp,
}

impl ChangeRequest {
    /// Create a new pending request.
    pub fn new(params: ChangeRequestParams) -> Self {
        Self {
            request_id: params.request_id,
            subject_id: params.subject_id,
            encoded_change: params.encoded_change,
            reason: params.reason,
            status: RequestStatus::Pending,
            submitted_at: params.submitted_at,
            processed_at: None,
        }
    }

    /// Transition to `Approved` and stamp the processing time.
    ///
    /// # Errors
    /// Returns error if the request already left the pending state.
    pub fn approve(&mut self, now: Timestamp) -> Result<(), &'static str> {
        if !self.status.can_transition_to(RequestStatus::Approved) {
            return Err("Request already processed");
        }
        self.status = RequestStatus::Approved;
        self.processed_at = Some(now);
        Ok(())
    }

    /// Transition to `Rejected`, record the reviewer's reason and stamp the
    /// processing time.
    ///
    /// # Errors
    /// Returns error if the request already left the pending state.
    pub fn reject(&mut self, reason: &str, now: Timestamp) -> Result<(), &'static str> {
        if !self.status.can_transition_to(RequestStatus::Rejected) {
            return Err("Request already processed");
        }
        self.status = RequestStatus::Rejected;
        self.reason = reason.to_string();
        self.processed_at = Some(now);
        Ok(())
    }
}
