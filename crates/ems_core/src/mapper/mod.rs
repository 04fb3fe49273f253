//! Entity <-> DTO conversions.
//!
//! Pure structural copies: no validation, no lookups, no side effects.

pub mod department_mapper;
pub mod employee_mapper;
