use thiserror::Error;

/// Canonical result for onceseq.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations. Data conditions (empty input for `first`, a missing
/// element for `index`, ...) are reported through `Option`, never here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{operation}: empty iterator")]
    EmptyInput { operation: &'static str },

    #[error("illegal index: {0}")]
    IllegalIndex(String),
}

impl Error {
    pub fn empty_input(operation: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, "empty input");
        Error::EmptyInput { operation }
    }

    pub fn illegal_index(index: impl std::fmt::Display) -> Self {
        let index = index.to_string();
        #[cfg(feature = "tracing")]
        tracing::debug!(%index, "illegal index");
        Error::IllegalIndex(index)
    }
}
