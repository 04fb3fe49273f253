//! Persisted entity shapes.
//!
//! # Responsibility
//! - Define the records stored in `departments` and `employees`.
//! - Keep relations as explicit foreign-key scalars; related records are
//!   loaded by id through the repository layer, never implicitly.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on first save.

pub mod department;
pub mod employee;
