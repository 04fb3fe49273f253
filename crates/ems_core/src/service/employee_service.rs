//! Employee use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/update/delete entry points over employees.
//! - Validate the department reference against the department store before
//!   any employee write.
//!
//! # Invariants
//! - Writes never persist an employee without an existing department.
//! - Employees found without a department are rejected on read-one and
//!   delete; the record itself is left untouched.
//! - Read-then-write sequences are not atomic; concurrent updates to the same
//!   employee resolve as last-write-wins.

use crate::dto::employee_dto::EmployeeDto;
use crate::mapper::employee_mapper;
use crate::model::department::DepartmentId;
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::{ServiceError, ServiceResult};
use log::{info, warn};

/// Employee service over injected employee and department stores.
pub struct EmployeeService<E: EmployeeRepository, D: DepartmentRepository> {
    employees: E,
    departments: D,
}

impl<E: EmployeeRepository, D: DepartmentRepository> EmployeeService<E, D> {
    /// Creates a service using the provided repository implementations.
    pub fn new(employees: E, departments: D) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// Creates an employee attached to an existing department.
    ///
    /// Any `id` carried by `dto` is ignored; the store assigns a fresh one.
    ///
    /// # Errors
    /// - `NotFound` when `dto.department_id` is absent or unknown.
    pub fn create_employee(&self, dto: EmployeeDto) -> ServiceResult<EmployeeDto> {
        let department_id = self.resolve_department(dto.department_id)?;

        let mut employee = employee_mapper::to_entity(dto);
        employee.id = None;
        employee.department_id = Some(department_id);

        let saved = self.employees.save(&employee)?;
        info!(
            "event=employee_create module=service status=ok employee_id={} department_id={}",
            display_id(saved.id),
            department_id
        );
        Ok(employee_mapper::to_dto(saved))
    }

    /// Gets one employee by id.
    ///
    /// # Errors
    /// - `NotFound` when the employee does not exist or has no department.
    pub fn get_employee_by_id(&self, id: EmployeeId) -> ServiceResult<EmployeeDto> {
        let employee = self.require_assigned_employee(id)?;
        Ok(employee_mapper::to_dto(employee))
    }

    /// Lists every stored employee, including ones without a department.
    pub fn get_all_employees(&self) -> ServiceResult<Vec<EmployeeDto>> {
        let employees = self.employees.find_all()?;
        Ok(employees.into_iter().map(employee_mapper::to_dto).collect())
    }

    /// Replaces names, email and department of an existing employee.
    ///
    /// # Errors
    /// - `NotFound` when the employee does not exist.
    /// - `NotFound` when `dto.department_id` is absent or unknown.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        dto: EmployeeDto,
    ) -> ServiceResult<EmployeeDto> {
        let mut employee = self.require_employee(id)?;

        employee.first_name = dto.first_name;
        employee.last_name = dto.last_name;
        employee.email = dto.email;
        let department_id = self.resolve_department(dto.department_id)?;
        employee.department_id = Some(department_id);

        let saved = self.employees.save(&employee)?;
        info!(
            "event=employee_update module=service status=ok employee_id={id} department_id={department_id}"
        );
        Ok(employee_mapper::to_dto(saved))
    }

    /// Deletes an employee that currently has a department.
    ///
    /// # Errors
    /// - `NotFound` when the employee does not exist or has no department.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        self.require_assigned_employee(id)?;
        self.employees.delete_by_id(id)?;
        info!("event=employee_delete module=service status=ok employee_id={id}");
        Ok(())
    }

    fn require_employee(&self, id: EmployeeId) -> ServiceResult<Employee> {
        self.employees.find_by_id(id)?.ok_or_else(|| {
            ServiceError::not_found(format!("employee does not exist with id: {id}"))
        })
    }

    fn require_assigned_employee(&self, id: EmployeeId) -> ServiceResult<Employee> {
        let employee = self.require_employee(id)?;
        if !employee.has_department() {
            warn!(
                "event=employee_lookup module=service status=rejected employee_id={id} reason=no_department"
            );
            return Err(ServiceError::not_found(
                "employee does not have an assigned department",
            ));
        }
        Ok(employee)
    }

    fn resolve_department(&self, id: Option<DepartmentId>) -> ServiceResult<DepartmentId> {
        let id = id
            .ok_or_else(|| ServiceError::not_found("department id is missing in the request"))?;
        let department = self.departments.find_by_id(id)?.ok_or_else(|| {
            ServiceError::not_found(format!("department does not exist with id: {id}"))
        })?;
        Ok(department.id.unwrap_or(id))
    }
}

fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}
