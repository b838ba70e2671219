//! # Service Layer
//!
//! Orchestration of the change-request workflow over the driven ports.

pub mod change_request_service;

pub use change_request_service::ChangeRequestService;
