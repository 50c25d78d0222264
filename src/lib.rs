//! Conjugation of Latin verbs in the active indicative of the present system.
//!
//! A [`Verb`] is built from its principal parts and conjugation class, and
//! can then be conjugated into any cell of its paradigm.
//!
//! ```
//! use latin::{ConjugationClass, Number, Person, Tense, Verb};
//!
//! let verb = Verb::new("capiō", "capere", "cēpī", "to take", ConjugationClass::ThirdI)
//!     .with_fourth("captum");
//!
//! assert_eq!(verb.conjugate(Person::First, Number::Plural, Tense::Future)?, "capiēmus");
//! # Ok::<_, latin::Error>(())
//! ```

mod composite;
pub use self::composite::Composite;

pub mod endings;
pub use self::endings::Endings;

mod error;
pub use self::error::{Error, Result};

pub mod grammar;
pub use self::grammar::{Conjugation, ConjugationClass, Number, Person, Tense};

pub mod verb;
pub use self::verb::Verb;
