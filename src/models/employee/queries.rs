use sqlx::{PgPool, Postgres, QueryBuilder};

use super::filter::{EmployeeFilter, like_pattern};
use super::types::{EmployeeDisplay, NewEmployee};

/// SQL for employee display: employee + position + department names.
pub(crate) const SELECT_EMPLOYEE_DISPLAY: &str = "\
    SELECT e.id, e.first_name, e.last_name, e.email, e.phone, e.address, e.gender, \
           e.date_of_birth, e.hire_date, e.position_id, \
           p.name AS position_name, d.name AS department_name, \
           e.salary, e.is_active, e.termination_date, e.contract_end_date \
    FROM employees e \
    LEFT JOIN positions p ON e.position_id = p.id \
    LEFT JOIN departments d ON p.department_id = d.id";

pub async fn find_all(pool: &PgPool) -> Result<Vec<EmployeeDisplay>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeDisplay>(&format!(
        "{SELECT_EMPLOYEE_DISPLAY} ORDER BY e.last_name, e.first_name, e.id"
    ))
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<EmployeeDisplay>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeDisplay>(&format!("{SELECT_EMPLOYEE_DISPLAY} WHERE e.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Employees matching every non-empty criterion of the filter.
/// The name criterion matches first OR last name, case-insensitively.
pub async fn find_filtered(
    pool: &PgPool,
    filter: &EmployeeFilter,
) -> Result<Vec<EmployeeDisplay>, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_EMPLOYEE_DISPLAY);
    qb.push(" WHERE TRUE");

    if let Some(name) = filter.name.as_deref() {
        let pattern = like_pattern(name);
        qb.push(" AND (e.first_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR e.last_name ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(position) = filter.position.as_deref() {
        qb.push(" AND p.name ILIKE ").push_bind(like_pattern(position));
    }
    if let Some(hired_from) = filter.hired_on_or_after {
        qb.push(" AND e.hire_date >= ").push_bind(hired_from);
    }

    qb.push(" ORDER BY e.last_name, e.first_name, e.id");
    qb.build_query_as::<EmployeeDisplay>().fetch_all(pool).await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewEmployee) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO employees \
            (first_name, last_name, email, phone, address, gender, date_of_birth, hire_date, \
             position_id, salary, is_active, termination_date, contract_end_date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
         RETURNING id",
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.address)
    .bind(new.gender.code())
    .bind(new.date_of_birth)
    .bind(new.hire_date)
    .bind(new.position_id)
    .bind(new.salary)
    .bind(new.is_active)
    .bind(new.termination_date)
    .bind(new.contract_end_date)
    .fetch_one(pool)
    .await
}

/// Delete an employee; leaves and reviews about them go too, and reviews
/// they wrote lose their reviewer. Returns the number of rows removed.
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
