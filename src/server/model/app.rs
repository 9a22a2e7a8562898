use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// Holds the database connection pool opened during startup. Cloning is cheap,
/// the pool is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
