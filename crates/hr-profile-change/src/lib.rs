//! # HR Profile Change Requests
//!
//! Employee-initiated changes to a restricted set of profile fields, with
//! reviewer approval or rejection.
//!
//! ## Purpose
//!
//! An employee proposes a change to one profile field; an authorized
//! reviewer later approves or rejects it. Submission stores the proposal
//! without judging it. Approval decodes the stored payload (repairing
//! known formatting defects first), checks the target field against a
//! closed allow-list, applies the field's semantic rule, writes exactly
//! one profile field, and transitions the request `Pending -> Approved`.
//! Rejection transitions `Pending -> Rejected` with the reviewer's reason
//! and never touches the profile. Either transition happens at most once
//! per request, guarded by the store's compare-and-set.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `ChangeRequest`: the persisted proposal and its lifecycle
//!   - `RequestStatus`, `ProfileField`, `FieldValue`: value objects
//!   - `repair` + `codec`: defect repair and strict payload parsing
//!   - `validation`: allow-list dispatch producing a `ProfileUpdate`
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ChangeRequestApi`: driving port (submission, review, listing)
//!   - `ChangeRequestStore`, `ProfileStore`, `TimeSource`: driven ports
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `ChangeRequestService`: implements `ChangeRequestApi`
//!
//! - **Adapters Layer** (`adapters/`): Port implementations
//!   - `InMemoryChangeRequestStore`, `InMemoryProfileDirectory`,
//!     `SystemTimeSource`
//!
//! Plain profile CRUD, self-service edits, routing and input-shape
//! validation live in the boundary layer, behind the driven ports.
//!
//! ## Invariants
//!
//! - A request transitions out of `Pending` at most once, into exactly one
//!   terminal state; `processed_at` is set exactly then.
//! - A failed approval (unreadable payload, unsupported field, bad value,
//!   missing subject) mutates neither the request nor the profile.
//! - One request updates at most one profile field.
//!
//! ## Usage Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hr_profile_change::{
//!     ChangeRequestApi, ChangeRequestService, ChangeSubmission, FieldValue,
//!     InMemoryChangeRequestStore, InMemoryProfileDirectory, SystemTimeSource,
//! };
//!
//! let service = ChangeRequestService::new(
//!     Arc::new(InMemoryChangeRequestStore::new()),
//!     Arc::new(InMemoryProfileDirectory::new()),
//!     Arc::new(SystemTimeSource),
//! );
//!
//! let id = service.submit(ChangeSubmission {
//!     subject_id: employee,
//!     field: "firstName".to_string(),
//!     new_value: FieldValue::text("Ana"),
//!     reason: "typo".to_string(),
//! }).await?;
//!
//! let outcome = service.approve(id).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{InMemoryChangeRequestStore, InMemoryProfileDirectory, SystemTimeSource};
pub use domain::{
    decode_change, encode_change, validate_and_build_update, ChangeRequest, ChangeRequestConfig,
    ChangeRequestError, ChangeRequestParams, FieldValue, ProfileField, ProfileUpdate,
    RequestStatus, StoreError,
};
pub use ports::inbound::{ApprovalOutcome, ChangeRequestApi, ChangeRequestSummary, ChangeSubmission};
pub use ports::outbound::{ChangeRequestStore, ManualTimeSource, ProfileStore, TimeSource};
pub use service::ChangeRequestService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
