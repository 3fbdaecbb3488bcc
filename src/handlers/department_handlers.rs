use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::config::AppName;
use crate::csrf;
use crate::errors::{AppError, is_unique_violation, render};
use crate::handlers::{CsrfOnly, see_other};
use crate::models::department::{self, DepartmentForm, NewDepartment};
use crate::session::{flash_error, flash_success};
use crate::templates_structs::{DepartmentListTemplate, PageContext};
use crate::validate;

async fn list_page(
    pool: &PgPool,
    session: &Session,
    app_name: &AppName,
    form: DepartmentForm,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let departments = department::find_all(pool).await?;
    let ctx = PageContext::build(session, app_name, "/departments");
    render(DepartmentListTemplate { ctx, departments, form, errors })
}

/// GET /departments
pub async fn list(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    list_page(&pool, &session, &app_name, DepartmentForm::default(), vec![]).await
}

fn validate_department_form(form: &DepartmentForm) -> Result<NewDepartment, Vec<String>> {
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_required(&form.name, "Name", 100));
    errors.extend(validate::validate_optional(&form.location, "Location", 100));
    let budget = match validate::parse_amount(&form.budget, "Budget") {
        Ok(b) => b,
        Err(e) => {
            errors.push(e);
            None
        }
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewDepartment {
        name: form.name.trim().to_string(),
        location: form.location.trim().to_string(),
        budget,
    })
}

/// POST /departments
pub async fn create(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
    form: web::Form<DepartmentForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let new = match validate_department_form(&form) {
        Ok(new) => new,
        Err(errors) => return list_page(&pool, &session, &app_name, form, errors).await,
    };

    match department::create(&pool, &new).await {
        Ok(id) => {
            log::info!("Created department {id} ({})", new.name);
            flash_success(&session, format!("Department '{}' created", new.name));
            Ok(see_other("/departments"))
        }
        Err(e) if is_unique_violation(&e) => {
            let errors = vec![format!("A department named '{}' already exists", new.name)];
            list_page(&pool, &session, &app_name, form, errors).await
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /departments/{id}/delete: positions go with it, employees stay.
pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    let Some(existing) = department::find_by_id(&pool, id).await? else {
        flash_error(&session, "Department not found.");
        return Ok(see_other("/departments"));
    };

    department::delete(&pool, id).await?;
    log::info!("Deleted department {id} ({})", existing.name);
    flash_success(&session, format!("Department '{}' deleted", existing.name));
    Ok(see_other("/departments"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_form_requires_name() {
        let errors = validate_department_form(&DepartmentForm::default()).unwrap_err();
        assert_eq!(errors, vec!["Name is required".to_string()]);
    }

    #[test]
    fn department_form_parses_budget() {
        let form = DepartmentForm {
            name: " Legal ".into(),
            budget: "2500".into(),
            ..Default::default()
        };
        let new = validate_department_form(&form).unwrap();
        assert_eq!(new.name, "Legal");
        assert_eq!(new.budget, Some(rust_decimal::Decimal::new(2500, 0)));
    }
}
