use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Local;
use sqlx::PgPool;

use crate::config::AppName;
use crate::csrf;
use crate::errors::{AppError, is_foreign_key_violation, render};
use crate::handlers::see_other;
use crate::models::employee;
use crate::models::review::{self, NewReview, ReviewForm};
use crate::session::flash_success;
use crate::templates_structs::{PageContext, ReviewListTemplate};
use crate::validate;

async fn list_page(
    pool: &PgPool,
    session: &Session,
    app_name: &AppName,
    form: ReviewForm,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let reviews = review::find_all(pool).await?;
    let employees = employee::find_all(pool).await?;
    let ctx = PageContext::build(session, app_name, "/reviews");
    render(ReviewListTemplate { ctx, reviews, employees, form, errors })
}

/// GET /reviews
pub async fn list(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    list_page(&pool, &session, &app_name, ReviewForm::default(), vec![]).await
}

/// An empty review date means today.
fn validate_review_form(form: &ReviewForm) -> Result<NewReview, Vec<String>> {
    let mut errors: Vec<String> = vec![];
    let employee_id = validate::parse_id(&form.employee_id, "Employee").map_err(|e| errors.push(e)).ok();
    let reviewer_id = validate::parse_optional_id(&form.reviewer_id, "Reviewer").map_err(|e| errors.push(e)).ok();
    let review_date = validate::parse_optional_date(&form.review_date, "Review date")
        .map_err(|e| errors.push(e))
        .ok()
        .map(|d| d.unwrap_or_else(|| Local::now().date_naive()));
    let rating = validate::parse_rating(&form.rating).map_err(|e| errors.push(e)).ok();
    errors.extend(validate::validate_required(&form.comments, "Comments", 10_000));

    match (employee_id, reviewer_id, review_date, rating) {
        (Some(employee_id), Some(reviewer_id), Some(review_date), Some(rating)) if errors.is_empty() => {
            Ok(NewReview {
                employee_id,
                reviewer_id,
                review_date,
                rating,
                comments: form.comments.trim().to_string(),
                goals: form.goals.trim().to_string(),
            })
        }
        _ => Err(errors),
    }
}

/// POST /reviews
pub async fn create(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let new = match validate_review_form(&form) {
        Ok(new) => new,
        Err(errors) => return list_page(&pool, &session, &app_name, form, errors).await,
    };

    match review::create(&pool, &new).await {
        Ok(id) => {
            log::info!("Recorded review {id} for employee {} ({}/5)", new.employee_id, new.rating);
            flash_success(&session, "Performance review recorded");
            Ok(see_other("/reviews"))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            let errors = vec![missing_reference_message(&e)];
            list_page(&pool, &session, &app_name, form, errors).await
        }
        Err(e) => Err(e.into()),
    }
}

/// Reviews reference employees twice; the violated constraint says which one is gone.
fn missing_reference_message(err: &sqlx::Error) -> String {
    let constraint = err.as_database_error().and_then(|db| db.constraint()).unwrap_or_default();
    if constraint.contains("reviewer") {
        "Reviewer not found.".to_string()
    } else {
        "Employee not found.".to_string()
    }
}
