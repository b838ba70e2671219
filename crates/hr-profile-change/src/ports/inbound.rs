//! # Inbound Ports (Driving Ports)
//!
//! The API the boundary layer (HTTP handlers, CLI tooling) uses to drive
//! the change-request subsystem, plus the data shapes that cross it.
//! Caller identity and permission to review are established upstream;
//! these operations assume an authorized caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{EmployeeId, RequestId, Timestamp};

use crate::domain::entities::ChangeRequest;
use crate::domain::errors::ChangeRequestError;
use crate::domain::value_objects::{FieldValue, ProfileField, RequestStatus};

/// A proposal as received from the boundary layer.
///
/// Input-shape validation (presence, basic types) happened upstream. No
/// semantic validation of `field`/`new_value` happens until approval, so a
/// submission naming an unknown field is accepted and stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSubmission {
    /// Profile record the change applies to.
    pub subject_id: EmployeeId,
    /// Wire name of the field to change.
    pub field: String,
    /// Proposed value.
    pub new_value: FieldValue,
    /// Submitter's justification.
    pub reason: String,
}

/// Result of a successful approval.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalOutcome {
    /// The profile field that was updated.
    pub field_updated: ProfileField,
    /// The proposed value as it was submitted (before any trim).
    pub new_value: FieldValue,
}

/// One row of a subject's request listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestSummary {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// Profile record the change applies to.
    pub subject_id: EmployeeId,
    /// Stored `(field, newValue)` payload.
    pub encoded_change: String,
    /// Submitter's justification, or the reviewer's reason after rejection.
    pub reason: String,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Submission timestamp.
    pub submitted_at: Timestamp,
    /// Processing timestamp, once the status left `Pending`.
    pub processed_at: Option<Timestamp>,
}

impl From<ChangeRequest> for ChangeRequestSummary {
    fn from(request: ChangeRequest) -> Self {
        Self {
            request_id: request.request_id,
            subject_id: request.subject_id,
            encoded_change: request.encoded_change,
            reason: request.reason,
            status: request.status,
            submitted_at: request.submitted_at,
            processed_at: request.processed_at,
        }
    }
}

/// Primary change-request API (Driving Port).
#[async_trait]
pub trait ChangeRequestApi: Send + Sync {
    /// Persist a new proposal with a fresh request id and `Pending` status.
    ///
    /// Returns the generated request id.
    async fn submit(&self, submission: ChangeSubmission) -> Result<RequestId, ChangeRequestError>;

    /// Decode, validate and apply a pending proposal to its subject's
    /// profile, then transition the request to `Approved`.
    ///
    /// Any failure leaves both the profile and the request exactly as they
    /// were.
    async fn approve(&self, id: RequestId) -> Result<ApprovalOutcome, ChangeRequestError>;

    /// Decline a pending proposal, recording the reviewer's reason. The
    /// stored payload is not decoded or validated on this path.
    async fn reject(&self, id: RequestId, reason: &str) -> Result<(), ChangeRequestError>;

    /// All requests targeting one subject, newest submission first.
    async fn list_for_subject(
        &self,
        subject: EmployeeId,
    ) -> Result<Vec<ChangeRequestSummary>, ChangeRequestError>;
}
