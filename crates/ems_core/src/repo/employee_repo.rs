//! Employee repository contract and SQLite implementation.
//!
//! # Invariants
//! - `department_id` is stored as-is, including `NULL`. The foreign key is
//!   enforced by SQLite; existence checks with friendly errors belong to the
//!   service layer.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    department_id
FROM employees";

/// Store contract for employee records.
pub trait EmployeeRepository {
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Returns every employee ordered by id, with or without a department.
    fn find_all(&self) -> RepoResult<Vec<Employee>>;
    /// Inserts when `id` is `None`, otherwise overwrites the row with that id.
    fn save(&self, employee: &Employee) -> RepoResult<Employee>;
    /// Deletes the row if present. Missing ids are not an error.
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a connection after checking it is migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "employees")?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_employee_row,
            )
            .optional()?;
        Ok(employee)
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;
        let employees = stmt
            .query_map([], parse_employee_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let id = match employee.id {
            None => {
                self.conn.execute(
                    "INSERT INTO employees (
                        first_name,
                        last_name,
                        email,
                        department_id
                    ) VALUES (?1, ?2, ?3, ?4);",
                    params![
                        employee.first_name.as_str(),
                        employee.last_name.as_str(),
                        employee.email.as_str(),
                        employee.department_id,
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO employees (
                        id,
                        first_name,
                        last_name,
                        email,
                        department_id
                    ) VALUES (?1, ?2, ?3, ?4, ?5)
                    ON CONFLICT(id) DO UPDATE SET
                        first_name = excluded.first_name,
                        last_name = excluded.last_name,
                        email = excluded.email,
                        department_id = excluded.department_id;",
                    params![
                        id,
                        employee.first_name.as_str(),
                        employee.last_name.as_str(),
                        employee.email.as_str(),
                        employee.department_id,
                    ],
                )?;
                id
            }
        };

        self.find_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("saved employee {id} missing on read-back"))
        })
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        department_id: row.get("department_id")?,
    })
}
