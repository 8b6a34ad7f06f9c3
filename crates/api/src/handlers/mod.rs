pub mod admin;
pub mod channel;
pub mod character;
pub mod show;

use catalog_core::error::CoreError;
use catalog_core::id::EntityId;

use crate::error::{AppError, AppResult};

/// Parse a hex identifier taken from the request path.
pub(crate) fn parse_id(raw: &str) -> AppResult<EntityId> {
    Ok(EntityId::parse(raw)?)
}

pub(crate) fn not_found(entity: &'static str, id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}

/// A freshly written entity could not be read back.
pub(crate) fn vanished(entity: &'static str, id: EntityId) -> AppError {
    AppError::InternalError(format!("{entity} {id} missing right after write"))
}
