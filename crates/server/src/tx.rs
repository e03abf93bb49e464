//! Per-request transaction scoping.
//!
//! A handler body runs inside exactly one transaction: it commits when the
//! body returns `Ok`, and rolls back on `Err` or when the future is dropped.

use std::{future::Future, pin::Pin};

use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, TransactionError, TransactionTrait,
};
use service::errors::ServiceError;

pub type TxFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'c>>;

/// Run `body` in a read-only transaction (listing and form views).
pub async fn read_only<F, T>(db: &DatabaseConnection, body: F) -> Result<T, ServiceError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxFuture<'c, T> + Send,
    T: Send,
{
    db.transaction_with_config(body, None, access_mode(db, AccessMode::ReadOnly))
        .await
        .map_err(flatten)
}

/// Run `body` in a read-write transaction (create, update, delete).
pub async fn read_write<F, T>(db: &DatabaseConnection, body: F) -> Result<T, ServiceError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxFuture<'c, T> + Send,
    T: Send,
{
    db.transaction_with_config(body, None, access_mode(db, AccessMode::ReadWrite))
        .await
        .map_err(flatten)
}

/// SQLite has no per-transaction access mode; sea-orm only warns if asked.
fn access_mode(db: &DatabaseConnection, mode: AccessMode) -> Option<AccessMode> {
    match db.get_database_backend() {
        DbBackend::Sqlite => None,
        _ => Some(mode),
    }
}

fn flatten(e: TransactionError<ServiceError>) -> ServiceError {
    match e {
        TransactionError::Connection(e) => ServiceError::db(e),
        TransactionError::Transaction(e) => e,
    }
}
