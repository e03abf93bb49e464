use sea_orm::DatabaseConnection;

/// Shared handler state. Cloned per request; the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// rows per listing page
    pub page_size: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, page_size: u64) -> Self {
        Self { db, page_size }
    }
}
