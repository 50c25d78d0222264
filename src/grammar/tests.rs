use std::collections::HashSet;

use super::{Conjugation, ConjugationClass, Number, Person, Tense};
use crate::Error;

#[test]
fn all_conjugations() {
    let all = Conjugation::all().collect::<Vec<_>>();
    assert_eq!(all.len(), 18);
    assert_eq!(all.iter().collect::<HashSet<_>>().len(), 18);

    assert_eq!(
        &all[..4],
        &[
            Conjugation::new(Person::First, Number::Singular, Tense::Present),
            Conjugation::new(Person::First, Number::Singular, Tense::Imperfect),
            Conjugation::new(Person::First, Number::Singular, Tense::Future),
            Conjugation::new(Person::First, Number::Plural, Tense::Present),
        ]
    );

    assert_eq!(
        all.last(),
        Some(&Conjugation::new(Person::Third, Number::Plural, Tense::Future))
    );
}

#[test]
fn all_conjugations_restart() {
    let iter = Conjugation::all();
    let a = iter.clone().collect::<Vec<_>>();
    let b = iter.collect::<Vec<_>>();
    let c = Conjugation::all().collect::<Vec<_>>();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a, Conjugation::ALL);
}

#[test]
fn wire_names() {
    for class in ConjugationClass::ALL {
        assert_eq!(class.name().parse::<ConjugationClass>(), Ok(class));
    }

    assert_eq!(ConjugationClass::ThirdI.to_string(), "third_i");
    assert_eq!("imperfect".parse::<Tense>(), Ok(Tense::Imperfect));

    assert_eq!(
        "fifth".parse::<ConjugationClass>(),
        Err(Error::UnknownName {
            kind: "conjugation class",
            name: String::from("fifth"),
        })
    );
}

#[test]
fn serde_names() {
    assert_eq!(
        serde_json::to_string(&ConjugationClass::ThirdI).unwrap(),
        "\"third_i\""
    );

    assert_eq!(
        serde_json::from_str::<Person>("\"second\"").unwrap(),
        Person::Second
    );
}

#[test]
fn stem_suffix_len() {
    assert_eq!(ConjugationClass::First.stem_suffix_len(), 1);
    assert_eq!(ConjugationClass::Third.stem_suffix_len(), 1);
    assert_eq!(ConjugationClass::Second.stem_suffix_len(), 2);
    assert_eq!(ConjugationClass::ThirdI.stem_suffix_len(), 2);
    assert_eq!(ConjugationClass::Fourth.stem_suffix_len(), 2);
}

#[test]
fn display() {
    let c = Conjugation::new(Person::Second, Number::Plural, Tense::Future);
    assert_eq!(c.to_string(), "second plural future");
}

#[test]
fn category_sets() {
    let mut set = fixed_map::Set::<ConjugationClass>::new();
    assert!(set.is_empty());

    set.insert(ConjugationClass::ThirdI);
    set.insert(ConjugationClass::First);

    assert!(set.contains(ConjugationClass::ThirdI));
    assert!(!set.contains(ConjugationClass::Fourth));
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        [ConjugationClass::First, ConjugationClass::ThirdI]
    );
}
