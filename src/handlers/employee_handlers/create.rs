use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::config::AppName;
use crate::csrf;
use crate::errors::{AppError, is_unique_violation, render};
use crate::handlers::see_other;
use crate::models::employee::{self, EmployeeForm};
use crate::models::position;
use crate::session::flash_success;
use crate::templates_structs::{EmployeeFormTemplate, PageContext, gender_options};
use super::helpers;

/// Render the add-employee form with the given values and errors.
async fn form_page(
    pool: &PgPool,
    session: &Session,
    app_name: &AppName,
    form: EmployeeForm,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let positions = position::find_all(pool).await?;
    let ctx = PageContext::build(session, app_name, "/employees/new");
    render(EmployeeFormTemplate {
        ctx,
        positions,
        genders: gender_options(),
        form,
        errors,
    })
}

pub async fn new_form(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    form_page(&pool, &session, &app_name, EmployeeForm::default(), vec![]).await
}

pub async fn create(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
    form: web::Form<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let new = match helpers::validate_employee_form(&form) {
        Ok(new) => new,
        Err(errors) => return form_page(&pool, &session, &app_name, form, errors).await,
    };

    if let Some(position_id) = new.position_id {
        if position::find_by_id(&pool, position_id).await?.is_none() {
            let errors = vec!["Position not found.".to_string()];
            return form_page(&pool, &session, &app_name, form, errors).await;
        }
    }

    match employee::create(&pool, &new).await {
        Ok(id) => {
            log::info!("Created employee {id} ({} {})", new.first_name, new.last_name);
            flash_success(&session, "Employee added successfully!");
            Ok(see_other("/employees/new"))
        }
        Err(e) => {
            let msg = if is_unique_violation(&e) {
                "An employee with this email already exists.".to_string()
            } else {
                log::error!("Failed to create employee: {e}");
                format!("Unexpected error: {e}")
            };
            form_page(&pool, &session, &app_name, form, vec![msg]).await
        }
    }
}
