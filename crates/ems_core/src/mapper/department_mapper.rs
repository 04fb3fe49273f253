//! Department entity/DTO conversions.

use crate::dto::department_dto::DepartmentDto;
use crate::model::department::Department;

/// Converts a persisted department into its transfer shape.
pub fn to_dto(department: Department) -> DepartmentDto {
    DepartmentDto {
        id: department.id,
        name: department.name,
        description: department.description,
    }
}

/// Converts a transfer shape into a department entity.
pub fn to_entity(dto: DepartmentDto) -> Department {
    Department {
        id: dto.id,
        name: dto.name,
        description: dto.description,
    }
}

#[cfg(test)]
mod tests {
    use super::{to_dto, to_entity};
    use crate::dto::department_dto::DepartmentDto;
    use crate::model::department::Department;

    #[test]
    fn to_dto_copies_every_field() {
        let department = Department {
            id: Some(7),
            name: "Engineering".to_string(),
            description: "Builds things".to_string(),
        };

        let dto = to_dto(department);
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.name, "Engineering");
        assert_eq!(dto.description, "Builds things");
    }

    #[test]
    fn entity_roundtrip_preserves_dto() {
        for dto in [
            DepartmentDto::default(),
            DepartmentDto {
                id: Some(42),
                name: "Ünïcode ✓".to_string(),
                description: String::new(),
            },
            DepartmentDto {
                id: None,
                name: " padded ".to_string(),
                description: "line1\nline2".to_string(),
            },
        ] {
            assert_eq!(to_dto(to_entity(dto.clone())), dto);
        }
    }
}
