use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub budget: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Department row for the list page, with dependent counts.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DepartmentListItem {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub budget: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub position_count: i64,
    pub employee_count: i64,
}

impl DepartmentListItem {
    pub fn budget_display(&self) -> String {
        self.budget.map(|b| format!("{b:.2}")).unwrap_or_default()
    }

    pub fn created_display(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug)]
pub struct NewDepartment {
    pub name: String,
    pub location: String,
    pub budget: Option<Decimal>,
}

/// Form data from the create department form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DepartmentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub csrf_token: String,
}
