#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
