use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::config::AppName;
use crate::errors::{AppError, render};
use crate::models::employee;
use crate::templates_structs::{EmployeeListTemplate, PageContext};

/// GET /employees
pub async fn list(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let employees = employee::find_all(&pool).await?;
    let ctx = PageContext::build(&session, &app_name, "/employees");
    render(EmployeeListTemplate { ctx, employees })
}
