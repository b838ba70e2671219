//! # Identifier and Timestamp Aliases
//!
//! Opaque identifiers shared across subsystems. All record identifiers are
//! UUIDs; position/department references stay plain strings because they are
//! owned by the organization-structure subsystem and only carried here.

use uuid::Uuid;

/// Unique identifier of an employee-profile record.
pub type EmployeeId = Uuid;

/// Unique identifier of a profile change request.
pub type RequestId = Uuid;

/// Milliseconds since the UNIX epoch.
pub type Timestamp = u64;
