use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::models::{department, position};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Demo departments and their positions, used when the store is empty.
const DEMO_STRUCTURE: &[(&str, &str, &[(&str, bool)])] = &[
    ("Engineering", "Building A", &[("Engineering Manager", true), ("Software Engineer", false)]),
    ("Human Resources", "Building B", &[("HR Director", true), ("Recruiter", false)]),
    ("Finance", "Building B", &[("Accountant", false)]),
    ("Sales", "Remote", &[("Sales Lead", true), ("Account Executive", false)]),
];

/// Seed demo departments and positions so the add-employee form has choices.
/// Skips when any department already exists.
pub async fn seed_demo(pool: &PgPool) -> Result<(), sqlx::Error> {
    if department::count(pool).await? > 0 {
        log::info!("Departments already present, skipping demo seed");
        return Ok(());
    }

    for (name, location, positions) in DEMO_STRUCTURE {
        let department_id = department::create(pool, &department::NewDepartment {
            name: name.to_string(),
            location: location.to_string(),
            budget: None,
        }).await?;
        for (position_name, is_leadership) in positions.iter() {
            position::create(pool, &position::NewPosition {
                name: position_name.to_string(),
                department_id,
                is_leadership: *is_leadership,
                description: String::new(),
            }).await?;
        }
    }

    log::info!("Demo seed complete: {} departments", DEMO_STRUCTURE.len());
    Ok(())
}
