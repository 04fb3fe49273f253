//! Department entity.

/// Store-assigned department identifier.
pub type DepartmentId = i64;

/// Department record as persisted in `departments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// `None` until first persisted.
    pub id: Option<DepartmentId>,
    pub name: String,
    pub description: String,
}

impl Department {
    /// Creates a not-yet-persisted department.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }
}
