use serde::{Deserialize, Serialize};

/// Position with its department's name, for lists and select boxes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PositionDisplay {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub department_name: String,
    pub is_leadership: bool,
    pub description: String,
    pub employee_count: i64,
}

impl PositionDisplay {
    /// "Name (Department)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.department_name)
    }
}

#[derive(Debug)]
pub struct NewPosition {
    pub name: String,
    pub department_id: i64,
    pub is_leadership: bool,
    pub description: String,
}

/// Form data from the create position form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PositionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department_id: String,
    /// Checkbox: present when ticked.
    pub is_leadership: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub csrf_token: String,
}
