//! Dispatch of parsed commands onto the core services.

use crate::cli::{Command, DepartmentCommand, EmployeeCommand};
use anyhow::Result;
use ems_core::{
    DepartmentService, EmployeeService, SqliteDepartmentRepository, SqliteEmployeeRepository,
};
use rusqlite::Connection;
use serde_json::{json, to_value, Value};

/// Runs one command against `conn` and returns its JSON output.
pub fn execute(command: Command, conn: &Connection) -> Result<Value> {
    match command {
        Command::Department(command) => execute_department(command, conn),
        Command::Employee(command) => execute_employee(command, conn),
    }
}

fn execute_department(command: DepartmentCommand, conn: &Connection) -> Result<Value> {
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(conn)?);

    let output = match command {
        DepartmentCommand::Create(fields) => to_value(service.create_department(fields.into())?)?,
        DepartmentCommand::Get { id } => to_value(service.get_department_by_id(id)?)?,
        DepartmentCommand::List => to_value(service.get_all_departments()?)?,
        DepartmentCommand::Update { id, fields } => {
            to_value(service.update_department(id, fields.into())?)?
        }
        DepartmentCommand::Delete { id } => {
            service.delete_department(id)?;
            json!({ "deleted": id })
        }
    };
    Ok(output)
}

fn execute_employee(command: EmployeeCommand, conn: &Connection) -> Result<Value> {
    let service = EmployeeService::new(
        SqliteEmployeeRepository::try_new(conn)?,
        SqliteDepartmentRepository::try_new(conn)?,
    );

    let output = match command {
        EmployeeCommand::Create(fields) => to_value(service.create_employee(fields.into())?)?,
        EmployeeCommand::Get { id } => to_value(service.get_employee_by_id(id)?)?,
        EmployeeCommand::List => to_value(service.get_all_employees()?)?,
        EmployeeCommand::Update { id, fields } => {
            to_value(service.update_employee(id, fields.into())?)?
        }
        EmployeeCommand::Delete { id } => {
            service.delete_employee(id)?;
            json!({ "deleted": id })
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::execute;
    use crate::cli::Cli;
    use clap::Parser;
    use ems_core::{open_db_in_memory, ServiceError};
    use rusqlite::Connection;
    use serde_json::Value;

    fn run(conn: &Connection, args: &[&str]) -> anyhow::Result<Value> {
        let cli = Cli::try_parse_from(std::iter::once("ems").chain(args.iter().copied()))?;
        execute(cli.command, conn)
    }

    #[test]
    fn create_department_then_employee() {
        let conn = open_db_in_memory().unwrap();

        let department = run(&conn, &["department", "create", "--name", "Research"]).unwrap();
        assert_eq!(department["departmentName"], "Research");
        let department_id = department["id"].as_i64().unwrap().to_string();

        let employee = run(
            &conn,
            &[
                "employee",
                "create",
                "--first-name",
                "Ada",
                "--last-name",
                "Lovelace",
                "--email",
                "ada@example.com",
                "--department-id",
                department_id.as_str(),
            ],
        )
        .unwrap();
        assert_eq!(employee["firstName"], "Ada");
        assert_eq!(employee["departmentId"].to_string(), department_id);

        let listed = run(&conn, &["employee", "list"]).unwrap();
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn missing_employee_surfaces_not_found() {
        let conn = open_db_in_memory().unwrap();

        let err = run(&conn, &["employee", "delete", "8"]).unwrap_err();
        let service_err = err.downcast_ref::<ServiceError>().unwrap();
        assert!(service_err.is_not_found());
    }
}
