//! Transfer shapes exchanged with service callers.
//!
//! # Invariants
//! - DTOs are flat; relations travel as id scalars.
//! - JSON field names are camelCase and stable for external callers.

pub mod department_dto;
pub mod employee_dto;
