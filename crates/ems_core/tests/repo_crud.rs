use ems_core::db::open_db_in_memory;
use ems_core::{
    Department, DepartmentRepository, Employee, EmployeeRepository, RepoError,
    SqliteDepartmentRepository, SqliteEmployeeRepository,
};

fn employee(first: &str, department_id: Option<i64>) -> Employee {
    Employee {
        id: None,
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        department_id,
    }
}

#[test]
fn save_assigns_id_and_find_by_id_reads_it_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&Department::new("Engineering", "Builds things"))
        .unwrap();
    let id = saved.id.unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.name, "Engineering");
}

#[test]
fn save_with_existing_id_overwrites_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let mut department = repo.save(&Department::new("Ops", "old")).unwrap();
    department.description = "new".to_string();
    repo.save(&department).unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "new");
}

#[test]
fn find_by_id_returns_none_for_missing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    assert!(repo.find_by_id(404).unwrap().is_none());
}

#[test]
fn find_all_returns_rows_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let first = repo.save(&employee("Ada", None)).unwrap();
    let second = repo.save(&employee("Grace", None)).unwrap();

    let ids: Vec<_> = repo.find_all().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn delete_by_id_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let saved = repo.save(&employee("Ada", None)).unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(id).unwrap();
    repo.delete_by_id(id).unwrap();
    assert!(repo.find_by_id(id).unwrap().is_none());
}

#[test]
fn saving_employee_with_unknown_department_violates_foreign_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let err = repo.save(&employee("Ada", Some(99))).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn deleting_department_detaches_its_employees() {
    let conn = open_db_in_memory().unwrap();
    let departments = SqliteDepartmentRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let department = departments.save(&Department::new("Sales", "")).unwrap();
    let saved = employees
        .save(&employee("Ada", department.id))
        .unwrap();

    departments.delete_by_id(department.id.unwrap()).unwrap();

    let loaded = employees.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.department_id, None);
}
