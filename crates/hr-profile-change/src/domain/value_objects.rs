//! # Domain Value Objects
//!
//! Immutable value types for the change-request subsystem: the request
//! lifecycle state machine, the closed allow-list of changeable profile
//! fields, and the shapes a proposed value may take.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a change request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Submitted, awaiting review.
    #[default]
    Pending,
    /// Applied to the subject's profile.
    Approved,
    /// Declined by a reviewer.
    Rejected,
}

impl RequestStatus {
    /// Check if transition is valid. The only legal moves are out of
    /// `Pending`, once.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }

    /// Check if the request is still awaiting review.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// Profile fields a change request is allowed to target.
///
/// This is the closed allow-list: a stored proposal naming any other field
/// parses fine but fails review with `UnsupportedField`. Adding a field
/// means adding a variant here and an arm to the validation dispatch, both
/// checked at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    /// First name (trimmed on apply).
    FirstName,
    /// Last name (trimmed on apply).
    LastName,
    /// National identifier, exactly 14 decimal digits.
    NationalId,
    /// Reference to a position record.
    PrimaryPositionId,
    /// Reference to a department record.
    PrimaryDepartmentId,
    /// Contract type enumerant, assigned verbatim.
    ContractType,
    /// Work type enumerant, assigned verbatim.
    WorkType,
}

impl ProfileField {
    /// Every field a request may target.
    pub const ALLOWED: [ProfileField; 7] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::NationalId,
        ProfileField::PrimaryPositionId,
        ProfileField::PrimaryDepartmentId,
        ProfileField::ContractType,
        ProfileField::WorkType,
    ];

    /// Wire name of the field as it appears inside encoded changes.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::NationalId => "nationalId",
            ProfileField::PrimaryPositionId => "primaryPositionId",
            ProfileField::PrimaryDepartmentId => "primaryDepartmentId",
            ProfileField::ContractType => "contractType",
            ProfileField::WorkType => "workType",
        }
    }

    /// Resolve a wire name against the allow-list.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALLOWED.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A proposed field value.
///
/// Proposals carry either text (which also covers opaque reference ids and
/// enumerant names) or a number. Anything else in the encoded payload
/// (booleans, nulls, nested structures) fails decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A text value or opaque reference id.
    Text(String),
    /// A numeric value, kept in its serialized precision.
    Number(serde_json::Number),
}

impl FieldValue {
    /// Build a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Number(_) => None,
        }
    }

    /// Shape name used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::text(value)
    }
}
