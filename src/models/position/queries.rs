use sqlx::PgPool;

use super::types::{NewPosition, PositionDisplay};

const SELECT_POSITION_DISPLAY: &str = "\
    SELECT p.id, p.name, p.department_id, d.name AS department_name, \
           p.is_leadership, p.description, \
           (SELECT COUNT(*) FROM employees e WHERE e.position_id = p.id) AS employee_count \
    FROM positions p \
    JOIN departments d ON p.department_id = d.id";

/// All positions ordered by department then name.
pub async fn find_all(pool: &PgPool) -> Result<Vec<PositionDisplay>, sqlx::Error> {
    sqlx::query_as::<_, PositionDisplay>(&format!(
        "{SELECT_POSITION_DISPLAY} ORDER BY d.name, p.name"
    ))
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<PositionDisplay>, sqlx::Error> {
    sqlx::query_as::<_, PositionDisplay>(&format!("{SELECT_POSITION_DISPLAY} WHERE p.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewPosition) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO positions (name, department_id, is_leadership, description) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&new.name)
    .bind(new.department_id)
    .bind(new.is_leadership)
    .bind(&new.description)
    .fetch_one(pool)
    .await
}

/// Delete a position; employees holding it keep their records with no position.
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM positions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
