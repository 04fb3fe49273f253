use ems_core::db::open_db_in_memory;
use ems_core::{DepartmentDto, DepartmentService, ServiceError, SqliteDepartmentRepository};

fn dto(name: &str, description: &str) -> DepartmentDto {
    DepartmentDto {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn create_get_and_list_departments() {
    let conn = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    assert!(service.get_all_departments().unwrap().is_empty());

    let hr = service.create_department(dto("HR", "People")).unwrap();
    let it = service.create_department(dto("IT", "Machines")).unwrap();
    assert_ne!(hr.id, it.id);

    assert_eq!(service.get_department_by_id(hr.id.unwrap()).unwrap(), hr);
    assert_eq!(service.get_all_departments().unwrap(), vec![hr, it]);
}

#[test]
fn update_overwrites_name_and_description() {
    let conn = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    let created = service.create_department(dto("HR", "People")).unwrap();
    let id = created.id.unwrap();

    let updated = service
        .update_department(id, dto("Human Resources", "People and culture"))
        .unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Human Resources");
    assert_eq!(updated.description, "People and culture");
}

#[test]
fn delete_removes_department() {
    let conn = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    let id = service
        .create_department(dto("HR", "People"))
        .unwrap()
        .id
        .unwrap();
    service.delete_department(id).unwrap();

    let err = service.get_department_by_id(id).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn missing_department_operations_fail_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    for err in [
        service.get_department_by_id(9).unwrap_err(),
        service.update_department(9, dto("X", "Y")).unwrap_err(),
        service.delete_department(9).unwrap_err(),
    ] {
        match err {
            ServiceError::NotFound(message) => {
                assert_eq!(message, "department does not exist with id: 9")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
