//! Department repository contract and SQLite implementation.

use crate::model::department::{Department, DepartmentId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    department_name,
    department_description
FROM departments";

/// Store contract for department records.
pub trait DepartmentRepository {
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Returns every department ordered by id.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
    /// Inserts when `id` is `None`, otherwise overwrites the row with that id.
    fn save(&self, department: &Department) -> RepoResult<Department>;
    /// Deletes the row if present. Missing ids are not an error.
    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Wraps a connection after checking it is migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "departments")?;
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let department = self
            .conn
            .query_row(
                &format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_department_row,
            )
            .optional()?;
        Ok(department)
    }

    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let departments = stmt
            .query_map([], parse_department_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(departments)
    }

    fn save(&self, department: &Department) -> RepoResult<Department> {
        let id = match department.id {
            None => {
                self.conn.execute(
                    "INSERT INTO departments (
                        department_name,
                        department_description
                    ) VALUES (?1, ?2);",
                    params![department.name.as_str(), department.description.as_str()],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO departments (
                        id,
                        department_name,
                        department_description
                    ) VALUES (?1, ?2, ?3)
                    ON CONFLICT(id) DO UPDATE SET
                        department_name = excluded.department_name,
                        department_description = excluded.department_description;",
                    params![id, department.name.as_str(), department.description.as_str()],
                )?;
                id
            }
        };

        self.find_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("saved department {id} missing on read-back"))
        })
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: Some(row.get("id")?),
        name: row.get("department_name")?,
        description: row.get("department_description")?,
    })
}
