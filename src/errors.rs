use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConventionsError {
    #[error("Unknown stage field: {0}")]
    UnknownField(String),
}
