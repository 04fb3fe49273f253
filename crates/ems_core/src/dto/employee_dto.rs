//! Employee transfer shape.

use crate::model::department::DepartmentId;
use crate::model::employee::EmployeeId;
use serde::{Deserialize, Serialize};

/// Employee as seen by service callers.
///
/// Carries the department as a scalar id rather than an embedded record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Ignored on create and update; assigned by the store.
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Required by every write path; `None` is rejected as not found.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
}
