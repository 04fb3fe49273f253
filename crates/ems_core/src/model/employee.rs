//! Employee entity.
//!
//! # Invariants
//! - `department_id` is nullable at the storage level. The employee service
//!   requires it on every write and rejects reads/deletes of records where it
//!   is missing.

use crate::model::department::DepartmentId;

/// Store-assigned employee identifier.
pub type EmployeeId = i64;

/// Employee record as persisted in `employees`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// `None` until first persisted.
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Foreign key into `departments`. Cleared by the store when the
    /// referenced department is deleted.
    pub department_id: Option<DepartmentId>,
}

impl Employee {
    /// Returns whether this employee currently references a department.
    pub fn has_department(&self) -> bool {
        self.department_id.is_some()
    }
}
