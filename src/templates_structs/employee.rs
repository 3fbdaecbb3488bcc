use askama::Template;

use crate::models::employee::{EmployeeDisplay, EmployeeFilterForm, EmployeeForm, Gender};
use crate::models::position::PositionDisplay;
use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "employees/list.html")]
pub struct EmployeeListTemplate {
    pub ctx: PageContext,
    pub employees: Vec<EmployeeDisplay>,
}

#[derive(Template)]
#[template(path = "employees/form.html")]
pub struct EmployeeFormTemplate {
    pub ctx: PageContext,
    pub positions: Vec<PositionDisplay>,
    pub genders: Vec<SelectOption>,
    /// Submitted values, echoed back after a failed submission.
    pub form: EmployeeForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "employees/remove.html")]
pub struct EmployeeRemoveTemplate {
    pub ctx: PageContext,
    pub employees: Vec<EmployeeDisplay>,
}

#[derive(Template)]
#[template(path = "employees/filter.html")]
pub struct EmployeeFilterTemplate {
    pub ctx: PageContext,
    pub form: EmployeeFilterForm,
    /// `None` until the form has been submitted.
    pub employees: Option<Vec<EmployeeDisplay>>,
    pub errors: Vec<String>,
}

pub fn gender_options() -> Vec<SelectOption> {
    Gender::ALL
        .iter()
        .map(|g| SelectOption { value: g.code().to_string(), label: g.label().to_string() })
        .collect()
}
