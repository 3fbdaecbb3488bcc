use sqlx::PgPool;

use super::types::{NewReview, ReviewDisplay};

const SELECT_REVIEW_DISPLAY: &str = "\
    SELECT r.id, r.employee_id, e.first_name || ' ' || e.last_name AS employee_name, \
           r.reviewer_id, rv.first_name || ' ' || rv.last_name AS reviewer_name, \
           r.review_date, r.rating, r.comments, r.goals \
    FROM performance_reviews r \
    JOIN employees e ON r.employee_id = e.id \
    LEFT JOIN employees rv ON r.reviewer_id = rv.id";

/// All reviews, newest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<ReviewDisplay>, sqlx::Error> {
    sqlx::query_as::<_, ReviewDisplay>(&format!(
        "{SELECT_REVIEW_DISPLAY} ORDER BY r.review_date DESC, r.id DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ReviewDisplay>, sqlx::Error> {
    sqlx::query_as::<_, ReviewDisplay>(&format!("{SELECT_REVIEW_DISPLAY} WHERE r.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewReview) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO performance_reviews \
            (employee_id, reviewer_id, review_date, rating, comments, goals) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(new.employee_id)
    .bind(new.reviewer_id)
    .bind(new.review_date)
    .bind(new.rating)
    .bind(&new.comments)
    .bind(&new.goals)
    .fetch_one(pool)
    .await
}
