//! Department transfer shape.

use crate::model::department::DepartmentId;
use serde::{Deserialize, Serialize};

/// Department as seen by service callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDto {
    /// Ignored on create; assigned by the store.
    #[serde(default)]
    pub id: Option<DepartmentId>,
    #[serde(rename = "departmentName")]
    pub name: String,
    #[serde(rename = "departmentDescription")]
    pub description: String,
}
