//! Department use-case service.
//!
//! # Invariants
//! - Deleting a department never deletes employees; the store detaches them.

use crate::dto::department_dto::DepartmentDto;
use crate::mapper::department_mapper;
use crate::model::department::{Department, DepartmentId};
use crate::repo::department_repo::DepartmentRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// Department service over an injected department store.
pub struct DepartmentService<D: DepartmentRepository> {
    departments: D,
}

impl<D: DepartmentRepository> DepartmentService<D> {
    /// Creates a service using the provided repository implementation.
    pub fn new(departments: D) -> Self {
        Self { departments }
    }

    /// Creates a department with a store-assigned id.
    pub fn create_department(&self, dto: DepartmentDto) -> ServiceResult<DepartmentDto> {
        let mut department = department_mapper::to_entity(dto);
        department.id = None;

        let saved = self.departments.save(&department)?;
        if let Some(id) = saved.id {
            info!("event=department_create module=service status=ok department_id={id}");
        }
        Ok(department_mapper::to_dto(saved))
    }

    /// Gets one department by id.
    pub fn get_department_by_id(&self, id: DepartmentId) -> ServiceResult<DepartmentDto> {
        let department = self.require_department(id)?;
        Ok(department_mapper::to_dto(department))
    }

    /// Lists every department.
    pub fn get_all_departments(&self) -> ServiceResult<Vec<DepartmentDto>> {
        let departments = self.departments.find_all()?;
        Ok(departments
            .into_iter()
            .map(department_mapper::to_dto)
            .collect())
    }

    /// Replaces name and description of an existing department.
    pub fn update_department(
        &self,
        id: DepartmentId,
        dto: DepartmentDto,
    ) -> ServiceResult<DepartmentDto> {
        let mut department = self.require_department(id)?;
        department.name = dto.name;
        department.description = dto.description;

        let saved = self.departments.save(&department)?;
        info!("event=department_update module=service status=ok department_id={id}");
        Ok(department_mapper::to_dto(saved))
    }

    /// Deletes an existing department.
    pub fn delete_department(&self, id: DepartmentId) -> ServiceResult<()> {
        self.require_department(id)?;
        self.departments.delete_by_id(id)?;
        info!("event=department_delete module=service status=ok department_id={id}");
        Ok(())
    }

    fn require_department(&self, id: DepartmentId) -> ServiceResult<Department> {
        self.departments.find_by_id(id)?.ok_or_else(|| {
            ServiceError::not_found(format!("department does not exist with id: {id}"))
        })
    }
}
