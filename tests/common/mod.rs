//! Shared test infrastructure for integration tests.
//!
//! Each test gets its own Postgres schema inside the database named by
//! `DATABASE_URL`, migrated from scratch and dropped afterwards. When no
//! database is configured `setup_test_db()` returns `None` and the test
//! returns early.

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgConnection, PgPool};

use emp_app::db::MIGRATOR;
use emp_app::models::department::{self, NewDepartment};
use emp_app::models::employee::{self, Gender, NewEmployee};
use emp_app::models::leave::{self, LeaveStatus, LeaveType, NewLeave};
use emp_app::models::position::{self, NewPosition};
use emp_app::models::review::{self, NewReview};

// ============================================================================
// DATABASE SETUP
// ============================================================================

pub struct TestDb {
    pool: PgPool,
    database_url: String,
    schema: String,
}

impl TestDb {
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let url = self.database_url.clone();
        let sql = format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema);
        // Runs on its own runtime; the test's runtime may already be shutting down.
        let _ = std::thread::spawn(move || {
            let Ok(rt) = tokio::runtime::Builder::new_current_thread().enable_all().build() else {
                return;
            };
            rt.block_on(async {
                if let Ok(mut conn) = PgConnection::connect(&url).await {
                    let _ = sqlx::query(&sql).execute(&mut conn).await;
                    let _ = conn.close().await;
                }
            });
        })
        .join();
    }
}

/// Fresh, migrated schema for one test, or `None` without `DATABASE_URL`.
pub async fn setup_test_db() -> Option<TestDb> {
    let _ = dotenvy::dotenv();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };

    let suffix: u64 = rand::rng().random();
    let schema = format!("emp_test_{suffix:016x}");

    let mut admin = PgConnection::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&mut admin)
        .await
        .expect("Failed to create test schema");
    admin.close().await.expect("Failed to close admin connection");

    let search_path = schema.clone();
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .after_connect(move |conn, _meta| {
            let sql = format!("SET search_path TO {search_path}");
            Box::pin(async move {
                sqlx::query(&sql).execute(&mut *conn).await?;
                Ok(())
            })
        })
        .connect(&database_url)
        .await
        .expect("Failed to open test pool");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    Some(TestDb { pool, database_url, schema })
}

/// `let db = test_db!();` returns from the test when no database is configured.
#[allow(unused_macros)]
macro_rules! test_db {
    () => {
        match common::setup_test_db().await {
            Some(db) => db,
            None => return,
        }
    };
}

// ============================================================================
// DATE HELPERS
// ============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn days_before(today: NaiveDate, n: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(n)).expect("date in range")
}

pub fn days_after(today: NaiveDate, n: u64) -> NaiveDate {
    today.checked_add_days(Days::new(n)).expect("date in range")
}

// ============================================================================
// ENTITY HELPERS
// ============================================================================

pub async fn insert_department(pool: &PgPool, name: &str) -> i64 {
    department::create(pool, &NewDepartment {
        name: name.to_string(),
        location: "HQ".to_string(),
        budget: Some(Decimal::new(1_000_000, 2)),
    })
    .await
    .expect("create department")
}

pub async fn insert_position(pool: &PgPool, department_id: i64, name: &str) -> i64 {
    position::create(pool, &NewPosition {
        name: name.to_string(),
        department_id,
        is_leadership: false,
        description: String::new(),
    })
    .await
    .expect("create position")
}

/// Active employee with a unique email derived from the names.
pub async fn insert_employee(
    pool: &PgPool,
    first: &str,
    last: &str,
    position_id: Option<i64>,
    hire_date: NaiveDate,
) -> i64 {
    let email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
    let mut new = NewEmployee::basic(first, last, &email, date(1990, 6, 15), hire_date);
    new.position_id = position_id;
    employee::create(pool, &new).await.expect("create employee")
}

pub async fn insert_employee_with(pool: &PgPool, new: NewEmployee) -> i64 {
    employee::create(pool, &new).await.expect("create employee")
}

pub fn employee_with_gender(first: &str, gender: Gender, hire_date: NaiveDate) -> NewEmployee {
    let email = format!("{}@example.com", first.to_lowercase());
    let mut new = NewEmployee::basic(first, "Tester", &email, date(1985, 3, 1), hire_date);
    new.gender = gender;
    new
}

pub async fn insert_leave(
    pool: &PgPool,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: LeaveStatus,
) -> i64 {
    leave::create(pool, &NewLeave {
        employee_id,
        leave_type: LeaveType::Vacation,
        start_date,
        end_date,
        reason: String::new(),
        status,
    })
    .await
    .expect("create leave")
}

pub async fn insert_review(pool: &PgPool, employee_id: i64, rating: i16, review_date: NaiveDate) -> i64 {
    review::create(pool, &NewReview {
        employee_id,
        reviewer_id: None,
        review_date,
        rating,
        comments: "Solid quarter".to_string(),
        goals: String::new(),
    })
    .await
    .expect("create review")
}
