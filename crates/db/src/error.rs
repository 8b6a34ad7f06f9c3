/// Failures reported by a [`CatalogStore`](crate::store::CatalogStore).
///
/// Repository operations return these unchanged; nothing in this crate
/// retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Delete batch of {requested} key paths exceeds the maximum of {max}")]
    BatchTooLarge { requested: usize, max: usize },

    #[error("Transaction already committed")]
    TransactionClosed,
}

pub type StoreResult<T> = Result<T, StoreError>;
