//! Department and position store tests, including on-delete behaviour.

#[macro_use]
mod common;

use common::*;
use emp_app::errors::{is_foreign_key_violation, is_unique_violation};
use emp_app::models::department::{self, NewDepartment};
use emp_app::models::employee;
use emp_app::models::position::{self, NewPosition};
use rust_decimal::Decimal;

#[tokio::test]
async fn test_department_list_counts_positions_and_employees() {
    let db = test_db!();
    let pool = db.pool();
    let eng = insert_department(pool, "Engineering").await;
    insert_department(pool, "Empty").await;
    let dev = insert_position(pool, eng, "Developer").await;
    insert_position(pool, eng, "Architect").await;
    insert_employee(pool, "Dev", "One", Some(dev), date(2024, 1, 1)).await;
    insert_employee(pool, "Dev", "Two", Some(dev), date(2024, 1, 1)).await;

    let departments = department::find_all(pool).await.expect("list");
    assert_eq!(departments.len(), 2);
    let engineering = departments.iter().find(|d| d.name == "Engineering").expect("engineering");
    assert_eq!(engineering.position_count, 2);
    assert_eq!(engineering.employee_count, 2);
    assert_eq!(engineering.budget_display(), "10000.00");
    let empty = departments.iter().find(|d| d.name == "Empty").expect("empty");
    assert_eq!(empty.employee_count, 0);

    assert_eq!(department::employee_count(pool, eng).await.expect("count"), 2);
}

#[tokio::test]
async fn test_department_name_is_unique() {
    let db = test_db!();
    let pool = db.pool();
    insert_department(pool, "Legal").await;
    let err = department::create(pool, &NewDepartment {
        name: "Legal".into(),
        location: String::new(),
        budget: None,
    })
    .await
    .expect_err("duplicate name");
    assert!(is_unique_violation(&err));
}

#[tokio::test]
async fn test_missing_budget_defaults_to_zero() {
    let db = test_db!();
    let pool = db.pool();
    let id = department::create(pool, &NewDepartment {
        name: "Ops".into(),
        location: String::new(),
        budget: None,
    })
    .await
    .expect("create");
    let found = department::find_by_id(pool, id).await.expect("query").expect("exists");
    assert_eq!(found.budget, Some(Decimal::ZERO));
    let listed = department::find_all(pool).await.expect("list");
    assert_eq!(listed[0].budget_display(), "0.00");
}

#[tokio::test]
async fn test_position_requires_existing_department() {
    let db = test_db!();
    let pool = db.pool();
    let err = position::create(pool, &NewPosition {
        name: "Ghost".into(),
        department_id: 9999,
        is_leadership: false,
        description: String::new(),
    })
    .await
    .expect_err("unknown department");
    assert!(is_foreign_key_violation(&err));
}

#[tokio::test]
async fn test_deleting_department_cascades_to_positions_and_nulls_employees() {
    let db = test_db!();
    let pool = db.pool();
    let dept = insert_department(pool, "Research").await;
    let pos = insert_position(pool, dept, "Scientist").await;
    let emp = insert_employee(pool, "Marie", "Curie", Some(pos), date(2020, 2, 2)).await;

    assert_eq!(department::delete(pool, dept).await.expect("delete"), 1);

    assert!(position::find_by_id(pool, pos).await.expect("query").is_none());
    let survivor = employee::find_by_id(pool, emp).await.expect("query").expect("employee survives");
    assert_eq!(survivor.position_id, None);
    assert_eq!(survivor.position_label(), "-");
}

#[tokio::test]
async fn test_deleting_position_keeps_employees() {
    let db = test_db!();
    let pool = db.pool();
    let dept = insert_department(pool, "Support").await;
    let pos = insert_position(pool, dept, "Agent").await;
    let emp = insert_employee(pool, "Tim", "Berners", Some(pos), date(2021, 8, 6)).await;

    let listed = position::find_all(pool).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].label(), "Agent (Support)");
    assert_eq!(listed[0].employee_count, 1);

    assert_eq!(position::delete(pool, pos).await.expect("delete"), 1);
    let survivor = employee::find_by_id(pool, emp).await.expect("query").expect("exists");
    assert_eq!(survivor.position_id, None);
    assert!(department::find_by_id(pool, dept).await.expect("query").is_some());
}
