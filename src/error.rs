//! Error types returned while building a DAWG.

use std::io;

use thiserror::Error;

use crate::dawg::DawgChar;

/// Errors that can occur when adding words to a [`Builder`](crate::dawg::builder::Builder).
///
/// A failed `add` leaves the builder exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError<C: DawgChar> {
    /// Words were not provided in strictly increasing lexicographic order.
    ///
    /// Repeating the previous word is reported the same way.
    #[error("OrderViolation - {previous:?} came before {word:?}")]
    OrderViolation {
        /// The last word that was accepted.
        previous: Vec<C>,
        /// The rejected word.
        word: Vec<C>,
    },

    /// The builder was finalized and no longer accepts words.
    #[error("cannot add {word:?}: the builder has already been finalized")]
    Finalized {
        /// The rejected word.
        word: Vec<C>,
    },
}

/// Errors from the line-oriented bulk loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No line source was supplied.
    #[error("InputError - no line source was provided")]
    Input,

    /// The source could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line was rejected by the builder.
    #[error(transparent)]
    Build(#[from] BuilderError<char>),
}
