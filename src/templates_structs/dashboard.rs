use askama::Template;

use crate::models::dashboard::{ChartData, DashboardReport};
use super::PageContext;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub report: DashboardReport,
    pub charts: ChartData,
}
