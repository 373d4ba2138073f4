//! Errors returned by the containers in this crate.

use thiserror::Error;

/// The ways a container operation can fail. Every failing call is checked before any mutation so
/// a returned error always leaves the container untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional access named a slot the container doesn't have.
    #[error("index {index} is out of range for length {length}")]
    IndexOutOfRange {
        /// The index that was asked for.
        index: usize,
        /// The length of the container at the time of the call.
        length: usize,
    },

    /// Something was removed from a container holding nothing.
    #[error("container is empty")]
    EmptyContainer,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
