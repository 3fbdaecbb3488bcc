use askama::Template;

use crate::models::employee::EmployeeDisplay;
use crate::models::review::{ReviewDisplay, ReviewForm};
use super::PageContext;

#[derive(Template)]
#[template(path = "reviews/list.html")]
pub struct ReviewListTemplate {
    pub ctx: PageContext,
    pub reviews: Vec<ReviewDisplay>,
    pub employees: Vec<EmployeeDisplay>,
    pub form: ReviewForm,
    pub errors: Vec<String>,
}
