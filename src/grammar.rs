//! Grammatical categories which index into a verb's paradigm.

#[cfg(test)]
mod tests;

use core::fmt;
use core::str::FromStr;

use fixed_map::Key;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Declare a closed grammatical category.
///
/// Every category gets an `ALL` constant in declaration order, a wire name
/// which is shared by serde, [`FromStr`] and [`fmt::Display`], and a longer
/// title for presentation.
macro_rules! category {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident => $wire:literal, $title:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Key,
        )]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: [$name; category!(@count $($variant)*)] = [$($name::$variant),*];

            /// The wire name of the value.
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)*
                }
            }

            /// Longer title for the value.
            pub fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            #[inline]
            pub(crate) const fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)*
                    _ => Err(Error::UnknownName {
                        kind: $kind,
                        name: s.to_owned(),
                    }),
                }
            }
        }
    };

    (@count) => { 0 };
    (@count $head:ident $($tail:ident)*) => { 1 + category!(@count $($tail)*) };
}

category! {
    /// Grammatical person.
    pub enum Person as "person" {
        First => "first", "first person, I / we",
        Second => "second", "second person, you",
        Third => "third", "third person, he / she / it / they",
    }
}

category! {
    /// Grammatical number.
    pub enum Number as "number" {
        Singular => "singular", "singular",
        Plural => "plural", "plural",
    }
}

category! {
    /// Tenses of the present system in the active indicative.
    ///
    /// Adding a tense here requires the standard ending table to grow a matching
    /// set of cells.
    pub enum Tense as "tense" {
        Present => "present", "present, ~ does / is doing",
        Imperfect => "imperfect", "imperfect, ~ was doing / used to do",
        Future => "future", "future, ~ will do",
    }
}

category! {
    /// The paradigm family a verb is conjugated by.
    pub enum ConjugationClass as "conjugation class" {
        /// Long ā stems, like amō, amāre.
        First => "first", "first conjugation",
        /// Long ē stems, like moneō, monēre.
        Second => "second", "second conjugation",
        /// Consonant stems, like dūcō, dūcere.
        Third => "third", "third conjugation",
        /// Mixed -iō verbs, like capiō, capere.
        ThirdI => "third_i", "third conjugation -iō",
        /// Long ī stems, like audiō, audīre.
        Fourth => "fourth", "fourth conjugation",
    }
}

impl ConjugationClass {
    /// The number of letters the first principal part carries after the root.
    pub const fn stem_suffix_len(self) -> usize {
        match self {
            ConjugationClass::First | ConjugationClass::Third => 1,
            ConjugationClass::Second | ConjugationClass::ThirdI | ConjugationClass::Fourth => 2,
        }
    }
}

/// A single cell in a verb's paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Conjugation {
    pub person: Person,
    pub number: Number,
    pub tense: Tense,
}

impl Conjugation {
    /// The number of cells in a paradigm.
    pub const COUNT: usize = Person::ALL.len() * Number::ALL.len() * Tense::ALL.len();

    /// Every cell, with person varying slowest and tense fastest.
    pub const ALL: [Conjugation; Conjugation::COUNT] = {
        let first = Conjugation::new(Person::First, Number::Singular, Tense::Present);
        let mut all = [first; Conjugation::COUNT];
        let inner = Number::ALL.len() * Tense::ALL.len();
        let mut n = 0;

        while n < Conjugation::COUNT {
            all[n] = Conjugation::new(
                Person::ALL[n / inner],
                Number::ALL[(n / Tense::ALL.len()) % Number::ALL.len()],
                Tense::ALL[n % Tense::ALL.len()],
            );

            n += 1;
        }

        all
    };

    /// Construct a new conjugation.
    pub const fn new(person: Person, number: Number, tense: Tense) -> Self {
        Self {
            person,
            number,
            tense,
        }
    }

    /// Iterate over every cell of a paradigm.
    ///
    /// Each call starts over from the first cell.
    pub fn all() -> impl Iterator<Item = Conjugation> + Clone {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Conjugation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.person, self.number, self.tense)
    }
}
