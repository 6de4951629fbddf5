use thiserror::Error;

/// Errors raised by the single store and its handles.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Store already constructed: only one instance is allowed")]
    AlreadyConstructed,
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
