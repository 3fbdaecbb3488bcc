// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::config::AppName;
use crate::csrf;
use crate::session::{Flash, take_flash};

/// A link in the top navigation bar.
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/dashboard", label: "Dashboard" },
    NavItem { path: "/employees", label: "All Employees" },
    NavItem { path: "/employees/new", label: "Add Employee" },
    NavItem { path: "/employees/remove", label: "Remove Employee" },
    NavItem { path: "/employees/filter", label: "Filter Employees" },
    NavItem { path: "/departments", label: "Departments" },
    NavItem { path: "/positions", label: "Positions" },
    NavItem { path: "/leaves", label: "Leaves" },
    NavItem { path: "/reviews", label: "Reviews" },
];

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<Flash>,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, app_name: &AppName, current_path: &str) -> Self {
        Self {
            app_name: app_name.0.clone(),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }

    pub fn nav_items(&self) -> &'static [NavItem] {
        NAV_ITEMS
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

/// `(value, label)` pair for a select box.
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

mod dashboard;
mod department;
mod employee;
mod leave;
mod review;

pub use self::dashboard::DashboardTemplate;
pub use self::department::{DepartmentListTemplate, PositionListTemplate};
pub use self::employee::{
    EmployeeFilterTemplate, EmployeeFormTemplate, EmployeeListTemplate, EmployeeRemoveTemplate,
    gender_options,
};
pub use self::leave::{LeaveListTemplate, leave_type_options};
pub use self::review::ReviewListTemplate;
