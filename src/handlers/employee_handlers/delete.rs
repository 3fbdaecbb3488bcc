use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::config::AppName;
use crate::csrf;
use crate::errors::{AppError, render};
use crate::handlers::{CsrfOnly, see_other};
use crate::models::employee;
use crate::session::{flash_error, flash_success};
use crate::templates_structs::{EmployeeRemoveTemplate, PageContext};

/// GET /employees/remove
pub async fn remove_page(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let employees = employee::find_all(&pool).await?;
    let ctx = PageContext::build(&session, &app_name, "/employees/remove");
    render(EmployeeRemoveTemplate { ctx, employees })
}

/// POST /employees/{id}/delete
pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    let Some(existing) = employee::find_by_id(&pool, id).await? else {
        flash_error(&session, "Employee with the given ID does not exist.");
        return Ok(see_other("/employees/remove"));
    };

    match employee::delete(&pool, id).await {
        Ok(_) => {
            log::info!("Removed employee {id} ({})", existing.full_name());
            flash_success(&session, format!("Successfully removed employee: {}", existing.full_name()));
        }
        Err(e) => {
            log::error!("Failed to remove employee {id}: {e}");
            flash_error(&session, format!("An error occurred: {e}"));
        }
    }
    Ok(see_other("/employees/remove"))
}
