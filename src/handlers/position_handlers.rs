use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::config::AppName;
use crate::csrf;
use crate::errors::{AppError, render};
use crate::handlers::{CsrfOnly, see_other};
use crate::models::department;
use crate::models::position::{self, NewPosition, PositionForm};
use crate::session::{flash_error, flash_success};
use crate::templates_structs::{PageContext, PositionListTemplate};
use crate::validate;

async fn list_page(
    pool: &PgPool,
    session: &Session,
    app_name: &AppName,
    form: PositionForm,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let positions = position::find_all(pool).await?;
    let departments = department::find_all(pool).await?;
    let ctx = PageContext::build(session, app_name, "/positions");
    render(PositionListTemplate { ctx, positions, departments, form, errors })
}

/// GET /positions
pub async fn list(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    list_page(&pool, &session, &app_name, PositionForm::default(), vec![]).await
}

fn validate_position_form(form: &PositionForm) -> Result<NewPosition, Vec<String>> {
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_required(&form.name, "Name", 100));
    let department_id = match validate::parse_id(&form.department_id, "Department") {
        Ok(id) => Some(id),
        Err(e) => {
            errors.push(e);
            None
        }
    };
    match department_id {
        Some(department_id) if errors.is_empty() => Ok(NewPosition {
            name: form.name.trim().to_string(),
            department_id,
            is_leadership: form.is_leadership.is_some(),
            description: form.description.trim().to_string(),
        }),
        _ => Err(errors),
    }
}

/// POST /positions
pub async fn create(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
    form: web::Form<PositionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let new = match validate_position_form(&form) {
        Ok(new) => new,
        Err(errors) => return list_page(&pool, &session, &app_name, form, errors).await,
    };

    if department::find_by_id(&pool, new.department_id).await?.is_none() {
        let errors = vec!["Department not found.".to_string()];
        return list_page(&pool, &session, &app_name, form, errors).await;
    }

    let id = position::create(&pool, &new).await?;
    log::info!("Created position {id} ({})", new.name);
    flash_success(&session, format!("Position '{}' created", new.name));
    Ok(see_other("/positions"))
}

/// POST /positions/{id}/delete: employees in it keep their records, without a position.
pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    let Some(existing) = position::find_by_id(&pool, id).await? else {
        flash_error(&session, "Position not found.");
        return Ok(see_other("/positions"));
    };

    position::delete(&pool, id).await?;
    log::info!("Deleted position {id} ({})", existing.label());
    flash_success(&session, format!("Position '{}' deleted", existing.label()));
    Ok(see_other("/positions"))
}
