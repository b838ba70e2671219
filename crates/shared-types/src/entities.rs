//! # Core Domain Entities
//!
//! The employee-profile record as stored by the profile subsystem.
//!
//! Reference fields (`primary_position_id`, `primary_department_id`,
//! `supervisor_position_id`) carry identifiers owned by the
//! organization-structure subsystem and are treated as opaque strings here.

use serde::{Deserialize, Serialize};

use crate::ids::{EmployeeId, Timestamp};

/// A postal address on an employee profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    pub street: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Country.
    pub country: Option<String>,
}

/// An employee-profile record.
///
/// A subset of these fields is *mutable-by-request*: name parts, the
/// national identifier, the position/department references and the
/// contract/work type enumerants. Those are only ever written through the
/// change-request subsystem's single-field update capability. The contact
/// fields (phone, emails, biography, address) belong to the self-service
/// edit path and are not reachable by change requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    /// Unique identifier of this record.
    pub id: EmployeeId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// National identifier (14 decimal digits).
    pub national_id: String,
    /// Reference to the employee's primary position.
    pub primary_position_id: Option<String>,
    /// Reference to the employee's primary department.
    pub primary_department_id: Option<String>,
    /// Reference to the supervising position.
    pub supervisor_position_id: Option<String>,
    /// Contract type enumerant (e.g. "permanent", "fixedTerm").
    pub contract_type: Option<String>,
    /// Work type enumerant (e.g. "onSite", "remote", "hybrid").
    pub work_type: Option<String>,
    /// Date of hire.
    pub date_of_hire: Timestamp,
    /// Contract start date, if a fixed-term contract.
    pub contract_start_date: Option<Timestamp>,
    /// Contract end date, if a fixed-term contract.
    pub contract_end_date: Option<Timestamp>,
    /// Phone number (self-service field).
    pub phone: Option<String>,
    /// Personal email (self-service field).
    pub personal_email: Option<String>,
    /// Work email (self-service field).
    pub work_email: Option<String>,
    /// Free-text biography (self-service field).
    pub biography: Option<String>,
    /// Postal address (self-service field).
    pub address: Option<Address>,
}
