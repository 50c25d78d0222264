use thiserror::Error;

use crate::grammar::{Conjugation, ConjugationClass};

/// Result alias for conjugation.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while conjugating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The first principal part is too short to hold the suffix its class
    /// strips off to form the root.
    #[error("principal part `{part}` is too short for the {class} conjugation, which strips {required} letters")]
    InvalidPrincipalPart {
        part: String,
        class: ConjugationClass,
        required: usize,
    },
    /// No ending exists for the requested cell.
    #[error("{verb}: no ending for {conjugation} in the {class} conjugation")]
    UnsupportedConjugationCell {
        verb: String,
        class: ConjugationClass,
        conjugation: Conjugation,
    },
    /// A grammatical category was given a name it doesn't have.
    #[error("unknown {kind} `{name}`")]
    UnknownName { kind: &'static str, name: String },
}
