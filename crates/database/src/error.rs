use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the reservation store
///
/// Both kinds display the underlying driver message unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is unreachable or no pooled connection could be acquired
    #[error("{0}")]
    Connectivity(DbErr),
    /// The store rejected the statement (constraint violation, bad value, ...)
    #[error("{0}")]
    Query(DbErr),
}

impl StoreError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Connectivity(err),
            _ => Self::Query(err),
        }
    }
}
