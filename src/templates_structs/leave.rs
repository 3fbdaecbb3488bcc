use askama::Template;

use crate::models::employee::EmployeeDisplay;
use crate::models::leave::{LeaveDisplay, LeaveForm, LeaveType};
use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "leaves/list.html")]
pub struct LeaveListTemplate {
    pub ctx: PageContext,
    pub leaves: Vec<LeaveDisplay>,
    pub employees: Vec<EmployeeDisplay>,
    pub leave_types: Vec<SelectOption>,
    pub form: LeaveForm,
    pub errors: Vec<String>,
}

pub fn leave_type_options() -> Vec<SelectOption> {
    LeaveType::ALL
        .iter()
        .map(|t| SelectOption { value: t.code().to_string(), label: t.label().to_string() })
        .collect()
}
