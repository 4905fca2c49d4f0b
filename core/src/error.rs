//! Public error type for `ArrayMap` operations.
//!
//! Every read is total: a missing slot is reported as `None`, never as an
//! error. The only fallible operation is writing through an index that has to
//! be converted from a foreign representation first (see [`IntoIndex`]).
//!
//! [`IntoIndex`]: crate::IntoIndex

use crate::String;
use thiserror::Error;

/// Errors produced by `arraymap` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The supplied index could not be interpreted as an `i64`.
    #[error("index must be an integer, got {input:?}")]
    InvalidIndex { input: String },
}

impl Error {
    pub(crate) fn invalid_index(input: impl Into<String>) -> Self {
        let input = input.into();
        tracing::debug!(%input, "Rejected index");
        Error::InvalidIndex { input }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

static_assertions::assert_impl_all!(Error: Send, Sync);
