//! Command-line arguments.
//!
//! Global options double as configuration and may also come from the
//! environment (`EMS_DB_PATH`, `EMS_LOG_LEVEL`, `EMS_LOG_DIR`).

use clap::{Args, Parser, Subcommand};
use ems_core::{DepartmentDto, DepartmentId, EmployeeDto, EmployeeId};
use std::path::PathBuf;

/// Employee management over a local SQLite store.
#[derive(Debug, Parser)]
#[command(name = "ems", version)]
pub struct Cli {
    /// SQLite database file; created and migrated on first use
    #[arg(long, env = "EMS_DB_PATH", default_value = "ems.sqlite3", global = true)]
    pub db: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults per build mode
    #[arg(long, env = "EMS_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "EMS_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage departments
    #[command(subcommand)]
    Department(DepartmentCommand),
    /// Manage employees
    #[command(subcommand)]
    Employee(EmployeeCommand),
}

#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    Create(DepartmentFields),
    Get { id: DepartmentId },
    List,
    Update {
        id: DepartmentId,
        #[command(flatten)]
        fields: DepartmentFields,
    },
    Delete { id: DepartmentId },
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    Create(EmployeeFields),
    Get { id: EmployeeId },
    List,
    Update {
        id: EmployeeId,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    Delete { id: EmployeeId },
}

#[derive(Debug, Args)]
pub struct DepartmentFields {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Debug, Args)]
pub struct EmployeeFields {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    /// Left optional so the service reports a missing department itself
    #[arg(long)]
    pub department_id: Option<DepartmentId>,
}

impl From<DepartmentFields> for DepartmentDto {
    fn from(fields: DepartmentFields) -> Self {
        Self {
            id: None,
            name: fields.name,
            description: fields.description,
        }
    }
}

impl From<EmployeeFields> for EmployeeDto {
    fn from(fields: EmployeeFields) -> Self {
        Self {
            id: None,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            department_id: fields.department_id,
        }
    }
}
