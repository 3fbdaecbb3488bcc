use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::config::AppName;
use crate::csrf;
use crate::errors::{AppError, is_foreign_key_violation, render};
use crate::handlers::{CsrfOnly, see_other};
use crate::models::employee;
use crate::models::leave::{self, LeaveForm, LeaveStatus, LeaveType, NewLeave};
use crate::session::{flash_error, flash_success};
use crate::templates_structs::{LeaveListTemplate, PageContext, leave_type_options};
use crate::validate;

async fn list_page(
    pool: &PgPool,
    session: &Session,
    app_name: &AppName,
    form: LeaveForm,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let leaves = leave::find_all(pool).await?;
    let employees = employee::find_all(pool).await?;
    let ctx = PageContext::build(session, app_name, "/leaves");
    render(LeaveListTemplate {
        ctx,
        leaves,
        employees,
        leave_types: leave_type_options(),
        form,
        errors,
    })
}

/// GET /leaves
pub async fn list(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    list_page(&pool, &session, &app_name, LeaveForm::default(), vec![]).await
}

/// New requests always start out pending.
fn validate_leave_form(form: &LeaveForm) -> Result<NewLeave, Vec<String>> {
    let mut errors: Vec<String> = vec![];
    let employee_id = validate::parse_id(&form.employee_id, "Employee").map_err(|e| errors.push(e)).ok();
    let leave_type = if form.leave_type.trim().is_empty() {
        errors.push("Leave type is required".to_string());
        None
    } else {
        form.leave_type.parse::<LeaveType>().map_err(|e| errors.push(e)).ok()
    };
    let start_date = validate::parse_date(&form.start_date, "Start date").map_err(|e| errors.push(e)).ok();
    let end_date = validate::parse_date(&form.end_date, "End date").map_err(|e| errors.push(e)).ok();
    if let (Some(start), Some(end)) = (start_date, end_date) {
        errors.extend(validate::validate_date_range(start, end));
    }

    match (employee_id, leave_type, start_date, end_date) {
        (Some(employee_id), Some(leave_type), Some(start_date), Some(end_date)) if errors.is_empty() => {
            Ok(NewLeave {
                employee_id,
                leave_type,
                start_date,
                end_date,
                reason: form.reason.trim().to_string(),
                status: LeaveStatus::Pending,
            })
        }
        _ => Err(errors),
    }
}

/// POST /leaves
pub async fn create(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
    form: web::Form<LeaveForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let new = match validate_leave_form(&form) {
        Ok(new) => new,
        Err(errors) => return list_page(&pool, &session, &app_name, form, errors).await,
    };

    match leave::create(&pool, &new).await {
        Ok(id) => {
            log::info!("Leave request {id} filed for employee {}", new.employee_id);
            flash_success(&session, "Leave request submitted");
            Ok(see_other("/leaves"))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            let errors = vec!["Employee not found.".to_string()];
            list_page(&pool, &session, &app_name, form, errors).await
        }
        Err(e) => Err(e.into()),
    }
}

async fn transition(
    pool: &PgPool,
    session: &Session,
    id: i64,
    status: LeaveStatus,
) -> Result<HttpResponse, AppError> {
    if leave::set_status(pool, id, status).await? == 0 {
        flash_error(session, "Leave request not found.");
    } else {
        log::info!("Leave request {id} marked {status}");
        flash_success(session, format!("Leave request {}", status.as_str().to_lowercase()));
    }
    Ok(see_other("/leaves"))
}

/// POST /leaves/{id}/approve
pub async fn approve(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    transition(&pool, &session, path.into_inner(), LeaveStatus::Approved).await
}

/// POST /leaves/{id}/reject
pub async fn reject(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    transition(&pool, &session, path.into_inner(), LeaveStatus::Rejected).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> LeaveForm {
        LeaveForm {
            employee_id: "7".into(),
            leave_type: "VL".into(),
            start_date: "2026-11-02".into(),
            end_date: "2026-11-06".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_leave_is_pending() {
        let new = validate_leave_form(&form()).unwrap();
        assert_eq!(new.status, LeaveStatus::Pending);
        assert_eq!(new.leave_type, LeaveType::Vacation);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let f = LeaveForm { end_date: "2026-11-01".into(), ..form() };
        let errors = validate_leave_form(&f).unwrap_err();
        assert_eq!(errors, vec!["End date must not be before start date".to_string()]);
    }

    #[test]
    fn missing_type_is_reported() {
        let f = LeaveForm { leave_type: String::new(), ..form() };
        assert_eq!(validate_leave_form(&f).unwrap_err(), vec!["Leave type is required".to_string()]);
    }
}
