use sqlx::PgPool;

use super::types::{LeaveDisplay, LeaveStatus, NewLeave};

pub(crate) const SELECT_LEAVE_DISPLAY: &str = "\
    SELECT l.id, l.employee_id, e.first_name || ' ' || e.last_name AS employee_name, \
           l.leave_type, l.start_date, l.end_date, l.reason, l.status, l.applied_at \
    FROM leaves l \
    JOIN employees e ON l.employee_id = e.id";

/// All leaves, most recently applied first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<LeaveDisplay>, sqlx::Error> {
    sqlx::query_as::<_, LeaveDisplay>(&format!(
        "{SELECT_LEAVE_DISPLAY} ORDER BY l.applied_at DESC, l.id DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<LeaveDisplay>, sqlx::Error> {
    sqlx::query_as::<_, LeaveDisplay>(&format!("{SELECT_LEAVE_DISPLAY} WHERE l.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewLeave) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO leaves (employee_id, leave_type, start_date, end_date, reason, status) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(new.employee_id)
    .bind(new.leave_type.code())
    .bind(new.start_date)
    .bind(new.end_date)
    .bind(&new.reason)
    .bind(new.status.as_str())
    .fetch_one(pool)
    .await
}

/// Overwrite a leave's status. Returns the number of rows updated.
pub async fn set_status(pool: &PgPool, id: i64, status: LeaveStatus) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE leaves SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
