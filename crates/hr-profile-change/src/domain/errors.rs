//! # Domain Errors
//!
//! Error types for the change-request subsystem.

use shared_types::{EmployeeId, RequestId};
use thiserror::Error;

use super::value_objects::{ProfileField, RequestStatus};

/// Errors from the driven ports (request store, profile store).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No request record with this id.
    #[error("Request not found: {0}")]
    NotFound(RequestId),

    /// No profile record for this subject.
    #[error("Profile not found: {0}")]
    SubjectNotFound(EmployeeId),

    /// The request already left the pending state; the compare-and-set
    /// transition refused to run.
    #[error("Request {id} already processed (status: {current:?})")]
    AlreadyProcessed {
        /// The request whose transition was refused.
        id: RequestId,
        /// Status observed at transition time.
        current: RequestStatus,
    },

    /// Storage backend failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Change-request error types.
#[derive(Debug, Error)]
pub enum ChangeRequestError {
    /// The id has no matching request record.
    #[error("Request not found: {0}")]
    RequestNotFound(RequestId),

    /// The stored encoded change is unreadable even after defect repair.
    #[error("Unreadable encoded change: {detail}")]
    MalformedPayload {
        /// Parser diagnostic for the repaired text.
        detail: String,
    },

    /// The proposed field is not in the allow-list.
    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    /// The national identifier is not exactly 14 decimal digits.
    #[error("nationalId must be 14 digits, got {0:?}")]
    InvalidNationalId(String),

    /// The proposed value has the wrong shape for the target field.
    #[error("{field} expects a {expected} value, got {found}")]
    ValueTypeMismatch {
        /// The target field.
        field: ProfileField,
        /// Value shape the field accepts.
        expected: &'static str,
        /// Value shape the proposal carried.
        found: &'static str,
    },

    /// The subject's profile record does not exist.
    #[error("Profile not found: {0}")]
    SubjectNotFound(EmployeeId),

    /// The request was not pending at apply time (already approved or
    /// rejected, possibly by a concurrent reviewer).
    #[error("Request {id} already processed (status: {current:?})")]
    TransitionConflict {
        /// The request whose transition was refused.
        id: RequestId,
        /// Status observed at apply time.
        current: RequestStatus,
    },

    /// The encoded change exceeds the submission cap.
    #[error("Encoded change too large: {bytes} > {max} bytes")]
    PayloadTooLarge {
        /// Size of the encoded change.
        bytes: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The free-text reason exceeds the submission cap.
    #[error("Reason too long: {bytes} > {max} bytes")]
    ReasonTooLong {
        /// Size of the reason text.
        bytes: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Driven-port failure with no more specific mapping.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
