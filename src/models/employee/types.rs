use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    #[default]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Single-letter code stored in the `gender` column.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            "O" => Ok(Gender::Other),
            other => Err(format!("Unknown gender code '{other}'")),
        }
    }
}

/// Employee joined with position and department names.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeDisplay {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub hire_date: NaiveDate,
    pub position_id: Option<i64>,
    pub position_name: Option<String>,
    pub department_name: Option<String>,
    pub salary: Decimal,
    pub is_active: bool,
    pub termination_date: Option<NaiveDate>,
    pub contract_end_date: Option<NaiveDate>,
}

impl EmployeeDisplay {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn gender_label(&self) -> &'static str {
        self.gender.parse::<Gender>().unwrap_or_default().label()
    }

    pub fn position_label(&self) -> String {
        self.position_name.clone().unwrap_or_else(|| "-".to_string())
    }

    pub fn department_label(&self) -> String {
        self.department_name.clone().unwrap_or_else(|| "-".to_string())
    }

    pub fn salary_display(&self) -> String {
        format!("{:.2}", self.salary)
    }
}

/// New employee data for creation.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub hire_date: NaiveDate,
    pub position_id: Option<i64>,
    pub salary: Decimal,
    pub is_active: bool,
    pub termination_date: Option<NaiveDate>,
    pub contract_end_date: Option<NaiveDate>,
}

impl NewEmployee {
    /// An active employee with zero salary and no contract dates.
    pub fn basic(
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
        hire_date: NaiveDate,
    ) -> Self {
        NewEmployee {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            address: String::new(),
            gender: Gender::default(),
            date_of_birth,
            hire_date,
            position_id: None,
            salary: Decimal::ZERO,
            is_active: true,
            termination_date: None,
            contract_end_date: None,
        }
    }
}

/// Form data from the add employee form. Every field arrives as text so a
/// failed submission can be redisplayed exactly as typed.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub hire_date: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub contract_end_date: String,
    #[serde(default)]
    pub csrf_token: String,
}
