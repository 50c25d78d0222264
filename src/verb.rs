//! Module which performs verb conjugation, based on a verb's class.


use core::fmt;

use serde::{Deserialize, Serialize};

use crate::endings::Endings;
use crate::error::{Error, Result};
use crate::grammar::{Conjugation, ConjugationClass, Number, Person, Tense};
use crate::Composite;

/// A verb as it appears in a dictionary.
///
/// The serialized form uses compact keys, with `"1"` through `"4"` holding
/// the principal parts, `"t"` the translation and `"c"` the conjugation class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verb {
    #[serde(rename = "1")]
    first: String,
    #[serde(rename = "2")]
    second: String,
    #[serde(rename = "3")]
    third: String,
    /// Verbs without a supine have no fourth principal part.
    #[serde(rename = "4", default, skip_serializing_if = "Option::is_none")]
    fourth: Option<String>,
    #[serde(rename = "t")]
    translation: String,
    #[serde(rename = "c")]
    class: ConjugationClass,
}

impl Verb {
    /// Construct a verb from its first three principal parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use latin::{ConjugationClass, Verb};
    ///
    /// let verb = Verb::new("amō", "amāre", "amāvī", "to love", ConjugationClass::First)
    ///     .with_fourth("amātum");
    ///
    /// assert_eq!(verb.to_string(), "amō, amāre, amāvī, amātum");
    /// ```
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
        translation: impl Into<String>,
        class: ConjugationClass,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            third: third.into(),
            fourth: None,
            translation: translation.into(),
            class,
        }
    }

    /// Set the fourth principal part.
    pub fn with_fourth(self, fourth: impl Into<String>) -> Self {
        Self {
            fourth: Some(fourth.into()),
            ..self
        }
    }

    /// The first principal part, which is also the dictionary form.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The second principal part, the present infinitive.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// The third principal part, the first person singular perfect.
    pub fn third(&self) -> &str {
        &self.third
    }

    /// The fourth principal part, the supine, if the verb has one.
    pub fn fourth(&self) -> Option<&str> {
        self.fourth.as_deref()
    }

    /// Iterate over available principal parts.
    pub fn principal_parts(&self) -> impl Iterator<Item = &str> + '_ {
        [&self.first, &self.second, &self.third]
            .into_iter()
            .map(String::as_str)
            .chain(self.fourth())
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn class(&self) -> ConjugationClass {
        self.class
    }

    /// Derive the root which endings are attached to.
    ///
    /// This strips the letters of the first principal part which mark its
    /// conjugation class.
    pub fn root(&self) -> Result<&str> {
        let required = self.class.stem_suffix_len();

        let Some(root) = strip_letters(&self.first, required) else {
            return Err(Error::InvalidPrincipalPart {
                part: self.first.clone(),
                class: self.class,
                required,
            });
        };

        Ok(root)
    }

    /// Conjugate the verb into the given cell of its paradigm.
    ///
    /// # Examples
    ///
    /// ```
    /// use latin::{ConjugationClass, Number, Person, Tense, Verb};
    ///
    /// let verb = Verb::new("amō", "amāre", "amāvī", "to love", ConjugationClass::First);
    /// let form = verb.conjugate(Person::Third, Number::Singular, Tense::Present)?;
    /// assert_eq!(form, "amat");
    /// # Ok::<_, latin::Error>(())
    /// ```
    pub fn conjugate(&self, person: Person, number: Number, tense: Tense) -> Result<String> {
        self.conjugate_with(Endings::standard(), person, number, tense)
    }

    /// Conjugate the verb using a custom table of endings.
    pub fn conjugate_with(
        &self,
        endings: &Endings,
        person: Person,
        number: Number,
        tense: Tense,
    ) -> Result<String> {
        let form = self.inflect_with(endings, Conjugation::new(person, number, tense))?;
        Ok(form.to_string())
    }

    /// Inflect the verb without allocating, borrowing the root from the verb.
    #[inline]
    pub fn inflect(&self, conjugation: Conjugation) -> Result<Composite<'_, 2>> {
        self.inflect_with(Endings::standard(), conjugation)
    }

    /// Inflect the verb using a custom table of endings.
    pub fn inflect_with(
        &self,
        endings: &Endings,
        conjugation: Conjugation,
    ) -> Result<Composite<'_, 2>> {
        let Conjugation {
            person,
            number,
            tense,
        } = conjugation;

        let Some(ending) = endings.get(self.class, tense, person, number) else {
            tracing::trace!(verb = %self.first, %conjugation, class = %self.class, "Missing ending");

            return Err(Error::UnsupportedConjugationCell {
                verb: self.first.clone(),
                class: self.class,
                conjugation,
            });
        };

        let root = self.root()?;
        Ok(Composite::new([root, ending]))
    }

    /// Iterate over every cell of the verb's paradigm.
    pub fn paradigm(
        &self,
    ) -> impl Iterator<Item = (Conjugation, Result<Composite<'_, 2>>)> + '_ {
        Conjugation::all().map(move |c| (c, self.inflect(c)))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.principal_parts();

        if let Some(part) = it.next() {
            f.write_str(part)?;
        }

        for part in it {
            write!(f, ", {part}")?;
        }

        Ok(())
    }
}

/// Strip `count` letters from the end of `string`, where a letter includes
/// any combining marks which follow it.
fn strip_letters(string: &str, count: usize) -> Option<&str> {
    let mut it = string.char_indices().rev();
    let mut end = string.len();

    for _ in 0..count {
        loop {
            let (index, c) = it.next()?;
            end = index;

            if !is_combining_mark(c) {
                break;
            }
        }
    }

    Some(&string[..end])
}

/// Combining diacritical marks, such as U+0304 COMBINING MACRON.
///
/// Only the Combining Diacritical Marks block is covered, which holds every
/// mark used to write Latin. A mark with no base letter before it is not a
/// letter of its own.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}
