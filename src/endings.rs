//! Table of personal endings, indexed by conjugation class, tense, person and
//! number.


use crate::grammar::{ConjugationClass, Number, Person, Tense};

type Cells = [[[Option<&'static str>; Number::ALL.len()]; Person::ALL.len()]; Tense::ALL.len()];

/// Build a table of endings, where each person lists its singular ending
/// followed by its plural ending.
macro_rules! endings {
    ($(
        $class:ident {
            $($tense:ident {
                $($person:ident: $singular:literal $plural:literal),* $(,)?
            }),* $(,)?
        }
    ),* $(,)?) => {{
        let mut endings = Endings::empty();

        $($($(
            endings.cells[ConjugationClass::$class.index()][Tense::$tense.index()][Person::$person.index()] =
                [Some($singular), Some($plural)];
        )*)*)*

        endings
    }};
}

/// The endings of the active indicative in the present system.
static STANDARD: Endings = endings! {
    First {
        Present {
            First: "ō" "āmus",
            Second: "ās" "ātis",
            Third: "at" "ant",
        },
        Imperfect {
            First: "ābam" "ābāmus",
            Second: "ābās" "ābātis",
            Third: "ābat" "ābant",
        },
        Future {
            First: "ābō" "ābimus",
            Second: "ābis" "ābitis",
            Third: "ābit" "ābunt",
        },
    },
    Second {
        Present {
            First: "eō" "ēmus",
            Second: "ēs" "ētis",
            Third: "et" "ent",
        },
        Imperfect {
            First: "ēbam" "ēbāmus",
            Second: "ēbās" "ēbātis",
            Third: "ēbat" "ēbant",
        },
        Future {
            First: "ēbō" "ēbimus",
            Second: "ēbis" "ēbitis",
            Third: "ēbit" "ēbunt",
        },
    },
    Third {
        Present {
            First: "ō" "imus",
            Second: "is" "itis",
            Third: "it" "unt",
        },
        Imperfect {
            First: "ēbam" "ēbāmus",
            Second: "ēbās" "ēbātis",
            Third: "ēbat" "ēbant",
        },
        Future {
            First: "am" "ēmus",
            Second: "ēs" "ētis",
            Third: "et" "ent",
        },
    },
    ThirdI {
        Present {
            First: "iō" "imus",
            Second: "is" "itis",
            Third: "it" "iunt",
        },
        Imperfect {
            First: "iēbam" "iēbāmus",
            Second: "iēbās" "iēbātis",
            Third: "iēbat" "iēbant",
        },
        Future {
            First: "iam" "iēmus",
            Second: "iēs" "iētis",
            Third: "iet" "ient",
        },
    },
    Fourth {
        Present {
            First: "iō" "īmus",
            Second: "īs" "ītis",
            Third: "it" "iunt",
        },
        Imperfect {
            First: "iēbam" "iēbāmus",
            Second: "iēbās" "iēbātis",
            Third: "iēbat" "iēbant",
        },
        Future {
            First: "iam" "iēmus",
            Second: "iēs" "iētis",
            Third: "iet" "ient",
        },
    },
};

/// A table of personal endings.
///
/// Cells which have not been populated are absent, and looking them up
/// returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endings {
    cells: [Cells; ConjugationClass::ALL.len()],
}

impl Endings {
    /// Construct a table with no endings in it.
    pub const fn empty() -> Self {
        Self {
            cells: [[[[None; Number::ALL.len()]; Person::ALL.len()]; Tense::ALL.len()];
                ConjugationClass::ALL.len()],
        }
    }

    /// The standard table of endings.
    ///
    /// Every cell of every conjugation class is populated.
    #[inline]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Get the ending for the given cell.
    #[inline]
    pub fn get(
        &self,
        class: ConjugationClass,
        tense: Tense,
        person: Person,
        number: Number,
    ) -> Option<&'static str> {
        self.cells[class.index()][tense.index()][person.index()][number.index()]
    }

    /// Insert an ending, returning the ending which was previously in the
    /// cell.
    pub fn insert(
        &mut self,
        class: ConjugationClass,
        tense: Tense,
        person: Person,
        number: Number,
        ending: &'static str,
    ) -> Option<&'static str> {
        self.cells[class.index()][tense.index()][person.index()][number.index()]
            .replace(ending)
    }

    /// Count the number of populated cells.
    pub fn len(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Test if no cells are populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Endings {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}
