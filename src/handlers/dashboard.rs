use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use sqlx::PgPool;

use crate::config::AppName;
use crate::errors::{AppError, render};
use crate::models::dashboard;
use crate::templates_structs::{DashboardTemplate, PageContext};
use crate::validate;

#[derive(Deserialize)]
pub struct AsOfQuery {
    pub as_of: Option<String>,
}

/// Reference date from `?as_of=YYYY-MM-DD`, else the server's local date.
fn reference_date(query: &AsOfQuery) -> Result<NaiveDate, AppError> {
    match query.as_of.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            validate::parse_date(raw, "as_of").map_err(AppError::Validation)
        }
        _ => Ok(Local::now().date_naive()),
    }
}

pub async fn index(
    pool: web::Data<PgPool>,
    app_name: web::Data<AppName>,
    session: Session,
    query: web::Query<AsOfQuery>,
) -> Result<HttpResponse, AppError> {
    let today = reference_date(&query)?;
    let report = dashboard::build_report(&pool, today).await?;
    let charts = report.chart_data();

    let ctx = PageContext::build(&session, &app_name, "/dashboard");
    render(DashboardTemplate { ctx, report, charts })
}

/// The same report as JSON.
pub async fn api(
    pool: web::Data<PgPool>,
    query: web::Query<AsOfQuery>,
) -> Result<HttpResponse, AppError> {
    let today = reference_date(&query)?;
    let report = dashboard::build_report(&pool, today).await?;
    Ok(HttpResponse::Ok().json(report))
}
