use actix_web::{HttpResponse, web};
use serde::Deserialize;

pub mod dashboard;
pub mod department_handlers;
pub mod employee_handlers;
pub mod leave_handlers;
pub mod position_handlers;
pub mod review_handlers;

/// Body of POST forms that carry nothing but the CSRF token.
#[derive(Deserialize)]
pub struct CsrfOnly {
    #[serde(default)]
    pub csrf_token: String,
}

/// 303 redirect after a POST.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// Register every page route. `/employees/new` and friends go before
/// `/employees/{id}` paths to avoid routing conflicts.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(|| async { see_other("/dashboard") }))
        .route("/dashboard", web::get().to(dashboard::index))
        .route("/api/dashboard", web::get().to(dashboard::api))
        // Employees
        .route("/employees", web::get().to(employee_handlers::list))
        .route("/employees/new", web::get().to(employee_handlers::new_form))
        .route("/employees", web::post().to(employee_handlers::create))
        .route("/employees/remove", web::get().to(employee_handlers::remove_page))
        .route("/employees/filter", web::get().to(employee_handlers::filter_page))
        .route("/employees/filter", web::post().to(employee_handlers::filter_submit))
        .route("/employees/{id}/delete", web::post().to(employee_handlers::delete))
        // Departments and positions
        .route("/departments", web::get().to(department_handlers::list))
        .route("/departments", web::post().to(department_handlers::create))
        .route("/departments/{id}/delete", web::post().to(department_handlers::delete))
        .route("/positions", web::get().to(position_handlers::list))
        .route("/positions", web::post().to(position_handlers::create))
        .route("/positions/{id}/delete", web::post().to(position_handlers::delete))
        // Leaves and reviews
        .route("/leaves", web::get().to(leave_handlers::list))
        .route("/leaves", web::post().to(leave_handlers::create))
        .route("/leaves/{id}/approve", web::post().to(leave_handlers::approve))
        .route("/leaves/{id}/reject", web::post().to(leave_handlers::reject))
        .route("/reviews", web::get().to(review_handlers::list))
        .route("/reviews", web::post().to(review_handlers::create));
}

/// Fallback for unknown paths.
pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
