use sqlx::PgPool;

use super::types::{Department, DepartmentListItem, NewDepartment};

/// All departments with position and employee counts, ordered by name.
pub async fn find_all(pool: &PgPool) -> Result<Vec<DepartmentListItem>, sqlx::Error> {
    sqlx::query_as::<_, DepartmentListItem>(
        "SELECT d.id, d.name, d.location, d.budget, d.created_at, \
                COUNT(DISTINCT p.id) AS position_count, \
                COUNT(e.id) AS employee_count \
         FROM departments d \
         LEFT JOIN positions p ON p.department_id = d.id \
         LEFT JOIN employees e ON e.position_id = p.id \
         GROUP BY d.id \
         ORDER BY d.name",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        "SELECT id, name, location, budget, created_at FROM departments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM departments")
        .fetch_one(pool)
        .await
}

/// Number of employees holding a position in this department.
pub async fn employee_count(pool: &PgPool, id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM employees e \
         JOIN positions p ON e.position_id = p.id \
         WHERE p.department_id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn create(pool: &PgPool, new: &NewDepartment) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO departments (name, location, budget) \
         VALUES ($1, $2, COALESCE($3, 0.00)) RETURNING id",
    )
    .bind(&new.name)
    .bind(&new.location)
    .bind(new.budget)
    .fetch_one(pool)
    .await
}

/// Delete a department. Its positions go with it; their employees keep
/// their records with no position. Returns the number of rows removed.
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM departments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
