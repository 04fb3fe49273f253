//! Employee entity/DTO conversions.

use crate::dto::employee_dto::EmployeeDto;
use crate::model::employee::Employee;

/// Converts a persisted employee into its transfer shape.
pub fn to_dto(employee: Employee) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        first_name: employee.first_name,
        last_name: employee.last_name,
        email: employee.email,
        department_id: employee.department_id,
    }
}

/// Converts a transfer shape into an employee entity.
///
/// The department reference is copied as-is; resolving it is the caller's job.
pub fn to_entity(dto: EmployeeDto) -> Employee {
    Employee {
        id: dto.id,
        first_name: dto.first_name,
        last_name: dto.last_name,
        email: dto.email,
        department_id: dto.department_id,
    }
}

#[cfg(test)]
mod tests {
    use super::{to_dto, to_entity};
    use crate::dto::employee_dto::EmployeeDto;

    #[test]
    fn entity_roundtrip_preserves_dto() {
        for dto in [
            EmployeeDto::default(),
            EmployeeDto {
                id: Some(3),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                department_id: Some(1),
            },
            EmployeeDto {
                id: None,
                first_name: String::new(),
                last_name: "O'Brien".to_string(),
                email: "not-an-email".to_string(),
                department_id: None,
            },
        ] {
            assert_eq!(to_dto(to_entity(dto.clone())), dto);
        }
    }

    #[test]
    fn to_entity_keeps_missing_department_reference() {
        let entity = to_entity(EmployeeDto {
            department_id: None,
            ..EmployeeDto::default()
        });
        assert!(!entity.has_department());
    }
}
