use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referential or uniqueness rule would be broken (unknown venue,
    /// duplicate show, deleting a venue that still has shows).
    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
