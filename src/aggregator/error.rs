use crate::registry::RegistryError;

/// Errors surfaced by aggregator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregatorError {
    #[error("Component not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl From<RegistryError> for AggregatorError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ComponentNotFound(id) => AggregatorError::NotFound(id),
            RegistryError::DuplicateComponent(id) => {
                AggregatorError::InvalidInput(format!("Duplicate component id: {}", id))
            }
        }
    }
}
