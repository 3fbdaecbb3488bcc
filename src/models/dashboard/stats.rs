use chrono::{Days, NaiveDate};
use serde::Serialize;
use sqlx::PgPool;

use crate::models::employee::Gender;
use crate::models::leave::{LeaveDisplay, LeaveStatus, SELECT_LEAVE_DISPLAY};
use super::trend::{MonthlyCount, TREND_MONTHS, TurnoverTrend, date_window, trailing_months};

/// Look-back (new hires, resignations) and look-ahead (expiring contracts) span.
pub const RECENT_DAYS: u64 = 30;

/// How many upcoming approved leaves the dashboard lists.
pub const UPCOMING_LEAVES_LIMIT: i64 = 5;

/// `[today - 30 days, today]`.
pub fn recent_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today.checked_sub_days(Days::new(RECENT_DAYS)).unwrap_or(NaiveDate::MIN), today)
}

/// `[today, today + 30 days]`.
pub fn upcoming_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today.checked_add_days(Days::new(RECENT_DAYS)).unwrap_or(NaiveDate::MAX))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct HeadcountStats {
    pub total: i64,
    pub active: i64,
    pub new_hires: i64,
    pub resignations: i64,
}

impl HeadcountStats {
    pub fn inactive(&self) -> i64 {
        self.total - self.active
    }
}

/// Total, active, hired in the last 30 days, and terminated in the last 30 days.
pub async fn headcount(pool: &PgPool, today: NaiveDate) -> Result<HeadcountStats, sqlx::Error> {
    let (from, until) = recent_window(today);
    sqlx::query_as::<_, HeadcountStats>(
        "SELECT COUNT(*) AS total, \
                COUNT(*) FILTER (WHERE is_active) AS active, \
                COUNT(*) FILTER (WHERE hire_date BETWEEN $1 AND $2) AS new_hires, \
                COUNT(*) FILTER (WHERE NOT is_active AND termination_date BETWEEN $1 AND $2) AS resignations \
         FROM employees",
    )
    .bind(from)
    .bind(until)
    .fetch_one(pool)
    .await
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderCounts {
    pub male: i64,
    pub female: i64,
    pub other: i64,
}

impl GenderCounts {
    /// Build from `(code, count)` rows; unknown codes are dropped, missing ones stay 0.
    pub fn from_rows(rows: &[(String, i64)]) -> Self {
        let mut counts = GenderCounts::default();
        for (code, count) in rows {
            match code.parse::<Gender>() {
                Ok(Gender::Male) => counts.male += count,
                Ok(Gender::Female) => counts.female += count,
                Ok(Gender::Other) => counts.other += count,
                Err(_) => log::warn!("Ignoring unknown gender code '{code}' in dashboard stats"),
            }
        }
        counts
    }

    pub fn total(&self) -> i64 {
        self.male + self.female + self.other
    }
}

pub async fn gender_counts(pool: &PgPool) -> Result<GenderCounts, sqlx::Error> {
    let rows: Vec<(String, i64)> =
        sqlx::query_as("SELECT gender, COUNT(*) FROM employees GROUP BY gender")
            .fetch_all(pool)
            .await?;
    Ok(GenderCounts::from_rows(&rows))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct DepartmentLoad {
    pub name: String,
    pub employee_count: i64,
}

/// Employees per department via their position, busiest first.
/// Employees without a position are not counted anywhere.
pub async fn department_load(pool: &PgPool) -> Result<Vec<DepartmentLoad>, sqlx::Error> {
    sqlx::query_as::<_, DepartmentLoad>(
        "SELECT d.name, COUNT(e.id) AS employee_count \
         FROM departments d \
         LEFT JOIN positions p ON p.department_id = d.id \
         LEFT JOIN employees e ON e.position_id = p.id \
         GROUP BY d.id, d.name \
         ORDER BY employee_count DESC, d.name",
    )
    .fetch_all(pool)
    .await
}

async fn monthly_hires(
    pool: &PgPool,
    from: NaiveDate,
    until: NaiveDate,
) -> Result<Vec<MonthlyCount>, sqlx::Error> {
    sqlx::query_as::<_, MonthlyCount>(
        "SELECT date_trunc('month', hire_date::timestamp)::date AS month_start, COUNT(*) AS count \
         FROM employees \
         WHERE hire_date >= $1 AND hire_date < $2 \
         GROUP BY 1 ORDER BY 1",
    )
    .bind(from)
    .bind(until)
    .fetch_all(pool)
    .await
}

async fn monthly_resignations(
    pool: &PgPool,
    from: NaiveDate,
    until: NaiveDate,
) -> Result<Vec<MonthlyCount>, sqlx::Error> {
    sqlx::query_as::<_, MonthlyCount>(
        "SELECT date_trunc('month', termination_date::timestamp)::date AS month_start, COUNT(*) AS count \
         FROM employees \
         WHERE NOT is_active AND termination_date >= $1 AND termination_date < $2 \
         GROUP BY 1 ORDER BY 1",
    )
    .bind(from)
    .bind(until)
    .fetch_all(pool)
    .await
}

/// Hires and resignations for the 12 calendar months ending with `today`'s month.
pub async fn turnover_trend(pool: &PgPool, today: NaiveDate) -> Result<TurnoverTrend, sqlx::Error> {
    let buckets = trailing_months(today, TREND_MONTHS);
    let Some((from, until)) = date_window(&buckets) else {
        return Ok(TurnoverTrend::empty(today));
    };
    let hires = monthly_hires(pool, from, until).await?;
    let resignations = monthly_resignations(pool, from, until).await?;
    Ok(TurnoverTrend::from_counts(&buckets, &hires, &resignations))
}

/// Mean rating over every review ever written; `None` when there are none.
pub async fn average_rating(pool: &PgPool) -> Result<Option<f64>, sqlx::Error> {
    sqlx::query_scalar("SELECT AVG(rating)::float8 FROM performance_reviews")
        .fetch_one(pool)
        .await
}

/// Approved leaves whose date range contains `today`.
pub async fn on_leave_count(pool: &PgPool, today: NaiveDate) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM leaves \
         WHERE status = $1 AND start_date <= $2 AND end_date >= $2",
    )
    .bind(LeaveStatus::Approved.as_str())
    .bind(today)
    .fetch_one(pool)
    .await
}

/// Next approved leaves starting today or later, soonest first.
pub async fn upcoming_leaves(
    pool: &PgPool,
    today: NaiveDate,
    limit: i64,
) -> Result<Vec<LeaveDisplay>, sqlx::Error> {
    sqlx::query_as::<_, LeaveDisplay>(&format!(
        "{SELECT_LEAVE_DISPLAY} \
         WHERE l.status = $1 AND l.start_date >= $2 \
         ORDER BY l.start_date, l.id \
         LIMIT $3"
    ))
    .bind(LeaveStatus::Approved.as_str())
    .bind(today)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn pending_approvals(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM leaves WHERE status = $1")
        .bind(LeaveStatus::Pending.as_str())
        .fetch_one(pool)
        .await
}

/// Employees whose contract ends within the next 30 days (today included).
pub async fn expiring_contracts(pool: &PgPool, today: NaiveDate) -> Result<i64, sqlx::Error> {
    let (from, until) = upcoming_window(today);
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM employees WHERE contract_end_date BETWEEN $1 AND $2",
    )
    .bind(from)
    .bind(until)
    .fetch_one(pool)
    .await
}
