//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across HR subsystems:
//! identifier aliases and the employee-profile record schema.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the `EmployeeProfile` schema is defined
//!   here, once. Subsystems that reference the profile (change requests,
//!   payroll, time management) depend on this crate explicitly, so the
//!   dependency graph is acyclic and there is no registration-order
//!   coupling between schemas.
//! - **Wire Compatibility**: all serialized field names are camelCase to
//!   match the HTTP boundary layer.

pub mod entities;
pub mod ids;

pub use entities::*;
pub use ids::*;
