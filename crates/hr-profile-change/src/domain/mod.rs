//! # Domain Layer
//!
//! Pure business logic for profile change requests: the request entity and
//! its lifecycle, the allow-list value objects, the payload codec with its
//! defect-repair pass, field validation, and errors. No I/O happens here.

pub mod codec;
pub mod config;
pub mod entities;
pub mod errors;
pub mod repair;
pub mod validation;
pub mod value_objects;

pub use codec::{decode_change, encode_change};
pub use config::ChangeRequestConfig;
pub use entities::{ChangeRequest, ChangeRequestParams};
pub use errors::{ChangeRequestError, StoreError};
pub use validation::{validate_and_build_update, ProfileUpdate};
pub use value_objects::{FieldValue, ProfileField, RequestStatus};
