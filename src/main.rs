use actix_web::{App, HttpServer, middleware, web};

use emp_app::config::{AppName, Config};
use emp_app::{db, handlers, session};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::other(format!("DATABASE_URL must be set: {e}")))?;

    let pool = db::init_pool(&config.database_url, config.max_connections)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to database: {e}")))?;
    db::run_migrations(&pool)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

    if config.seed_demo {
        if let Err(e) = db::seed_demo(&pool).await {
            log::error!("Demo seed failed: {e}");
        }
    }

    let secret_key = session::load_key(config.session_key.as_deref());
    let app_name = web::Data::new(AppName(config.app_name.clone()));
    let pool = web::Data::new(pool);

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(session::middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(pool.clone())
            .app_data(app_name.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
