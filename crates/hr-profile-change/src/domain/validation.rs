//! # Field Validation
//!
//! Approval-time dispatch over the allow-list: check the target field,
//! apply its semantic rule, and build the single-field update descriptor.

use shared_types::EmployeeProfile;

use super::errors::ChangeRequestError;
use super::value_objects::{FieldValue, ProfileField};

/// A single-field update, ready to apply to a profile record.
///
/// Built only by `validate_and_build_update`, so the carried value has
/// already passed the field's semantic rule and transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// The target field.
    pub field: ProfileField,
    /// The exact text to assign.
    pub value: String,
}

impl ProfileUpdate {
    /// Write the update onto a profile record.
    ///
    /// Exactly one field changes per update; compound updates do not exist
    /// in this subsystem.
    pub fn apply_to(&self, profile: &mut EmployeeProfile) {
        match self.field {
            ProfileField::FirstName => profile.first_name = self.value.clone(),
            ProfileField::LastName => profile.last_name = self.value.clone(),
            ProfileField::NationalId => profile.national_id = self.value.clone(),
            ProfileField::PrimaryPositionId => {
                profile.primary_position_id = Some(self.value.clone())
            }
            ProfileField::PrimaryDepartmentId => {
                profile.primary_department_id = Some(self.value.clone())
            }
            ProfileField::ContractType => profile.contract_type = Some(self.value.clone()),
            ProfileField::WorkType => profile.work_type = Some(self.value.clone()),
        }
    }
}

/// Check a proposed `(field, value)` pair against the allow-list and build
/// the update to apply.
///
/// # Errors
/// - `UnsupportedField` when the field is not in the allow-list.
/// - `ValueTypeMismatch` when the value is not text.
/// - `InvalidNationalId` unless the national id is exactly 14 decimal
///   digits.
pub fn validate_and_build_update(
    field_name: &str,
    value: &FieldValue,
) -> Result<ProfileUpdate, ChangeRequestError> {
    let field = ProfileField::from_name(field_name)
        .ok_or_else(|| ChangeRequestError::UnsupportedField(field_name.to_string()))?;

    let text = value
        .as_text()
        .ok_or(ChangeRequestError::ValueTypeMismatch {
            field,
            expected: "text",
            found: value.shape(),
        })?;

    let assigned = match field {
        ProfileField::FirstName | ProfileField::LastName => text.trim().to_string(),
        ProfileField::NationalId => {
            if !is_national_id(text) {
                return Err(ChangeRequestError::InvalidNationalId(text.to_string()));
            }
            text.to_string()
        }
        // Reference ids and enumerants are assigned verbatim; their
        // consistency is owned by the referenced subsystems.
        ProfileField::PrimaryPositionId
        | ProfileField::PrimaryDepartmentId
        | ProfileField::ContractType
        | ProfileField::WorkType => text.to_string(),
    };

    Ok(ProfileUpdate {
        field,
        value: assigned,
    })
}

/// Exactly 14 ASCII decimal digits.
fn is_national_id(value: &str) -> bool {
    value.len() == 14 && value.bytes().all(|b| b.is_ascii_digit())
}
