use askama::Template;

use crate::models::department::{DepartmentForm, DepartmentListItem};
use crate::models::position::{PositionDisplay, PositionForm};
use super::PageContext;

#[derive(Template)]
#[template(path = "departments/list.html")]
pub struct DepartmentListTemplate {
    pub ctx: PageContext,
    pub departments: Vec<DepartmentListItem>,
    pub form: DepartmentForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "positions/list.html")]
pub struct PositionListTemplate {
    pub ctx: PageContext,
    pub positions: Vec<PositionDisplay>,
    pub departments: Vec<DepartmentListItem>,
    pub form: PositionForm,
    pub errors: Vec<String>,
}
