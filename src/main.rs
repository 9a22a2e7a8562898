use axum::{extract::Request, ServiceExt};
use holonet::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() -> Result<(), holonet::server::error::Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    let app = router::app(AppState { db: db.clone() });
    let listener = startup::bind_listener(&config).await?;

    tracing::info!("Starting server");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database connection");
    db.close().await?;

    Ok(())
}
