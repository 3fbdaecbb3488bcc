use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::config::AppName;
use crate::csrf;
use crate::errors::{AppError, render};
use crate::models::employee::{self, EmployeeFilter, EmployeeFilterForm};
use crate::templates_structs::{EmployeeFilterTemplate, PageContext};

/// GET /employees/filter: the empty criteria form.
pub async fn filter_page(
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &app_name, "/employees/filter");
    render(EmployeeFilterTemplate {
        ctx,
        form: EmployeeFilterForm::default(),
        employees: None,
        errors: vec![],
    })
}

/// POST /employees/filter: name AND position AND hired-since, blanks ignored.
pub async fn filter_submit(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
    form: web::Form<EmployeeFilterForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let (employees, errors) = match EmployeeFilter::from_form(&form) {
        Ok(filter) => (Some(employee::find_filtered(&pool, &filter).await?), vec![]),
        Err(e) => (None, vec![e]),
    };

    let ctx = PageContext::build(&session, &app_name, "/employees/filter");
    render(EmployeeFilterTemplate { ctx, form, employees, errors })
}
