/// Errors that can occur during registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("component already exists: {0}")]
    DuplicateComponent(String),

    #[error("component not found: {0}")]
    ComponentNotFound(String),
}
