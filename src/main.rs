use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use fixed_map::Key;
use fixed_map::Set;
use flate2::read::GzDecoder;
use latin::{Conjugation, ConjugationClass, Number, Person, Tense, Verb};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Principal parts of the verb to conjugate, like `amō amāre amāvī
    /// amātum`. The fourth principal part is optional.
    #[arg(name = "parts")]
    parts: Vec<String>,
    /// Conjugation class of the verb given as arguments. One of `first`,
    /// `second`, `third`, `third_i` or `fourth`.
    #[arg(long)]
    class: Option<ConjugationClass>,
    /// Translation of the verb given as arguments.
    #[arg(long)]
    translation: Option<String>,
    /// Load verbs from a JSON file instead. Files ending in `.gz` are
    /// decompressed.
    #[arg(long)]
    verbs: Option<PathBuf>,
    /// Only show the given persons.
    #[arg(long = "person", name = "person")]
    persons: Vec<Person>,
    /// Only show the given numbers.
    #[arg(long = "number", name = "number")]
    numbers: Vec<Number>,
    /// Only show the given tenses.
    #[arg(long = "tense", name = "tense")]
    tenses: Vec<Tense>,
}

/// Filter over cells in a paradigm, where an empty filter matches
/// everything.
struct Filter {
    persons: Set<Person>,
    numbers: Set<Number>,
    tenses: Set<Tense>,
}

impl Filter {
    fn new(args: &Args) -> Self {
        Self {
            persons: to_set(&args.persons),
            numbers: to_set(&args.numbers),
            tenses: to_set(&args.tenses),
        }
    }

    fn matches(&self, c: Conjugation) -> bool {
        test(&self.persons, c.person)
            && test(&self.numbers, c.number)
            && test(&self.tenses, c.tense)
    }
}

fn to_set<T>(values: &[T]) -> Set<T>
where
    T: Copy + Key,
{
    let mut set = Set::new();

    for &value in values {
        set.insert(value);
    }

    set
}

fn test<T>(set: &Set<T>, value: T) -> bool
where
    T: Key,
{
    set.is_empty() || set.contains(value)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "gz")
}

fn load_verbs(path: &Path) -> Result<Vec<Verb>> {
    let input = File::open(path).with_context(|| path.display().to_string())?;
    read_verbs(BufReader::new(input), is_gzip(path))
        .with_context(|| format!("{}: decoding verbs", path.display()))
}

/// Read a JSON array of verb records, optionally gzipped.
fn read_verbs<R>(mut input: R, gzip: bool) -> Result<Vec<Verb>>
where
    R: Read,
{
    let mut string = String::new();

    if gzip {
        GzDecoder::new(input).read_to_string(&mut string)?;
    } else {
        input.read_to_string(&mut string)?;
    }

    Ok(serde_json::from_str(&string)?)
}

fn verb_from_args(args: &Args) -> Result<Verb> {
    let Some(class) = args.class else {
        bail!("Missing `--class <class>` for the verb `{}`", args.parts.join(", "));
    };

    let translation = args.translation.as_deref().unwrap_or_default();

    let verb = match &args.parts[..] {
        [first, second, third] => Verb::new(first, second, third, translation, class),
        [first, second, third, fourth] => {
            Verb::new(first, second, third, translation, class).with_fourth(fourth)
        }
        parts => bail!("Expected three or four principal parts, but got {}", parts.len()),
    };

    Ok(verb)
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let mut verbs = Vec::new();

    if let Some(path) = &args.verbs {
        verbs.extend(load_verbs(path)?);
        tracing::debug!(path = %path.display(), count = verbs.len(), "Loaded verbs");
    }

    if !args.parts.is_empty() {
        verbs.push(verb_from_args(&args)?);
    }

    if verbs.is_empty() {
        bail!("No verbs to conjugate, pass principal parts or `--verbs <path>`");
    }

    let filter = Filter::new(&args);

    for verb in &verbs {
        print!("{verb} ({})", verb.class().title());

        if !verb.translation().is_empty() {
            print!(" - {}", verb.translation());
        }

        println!();

        for (c, form) in verb.paradigm() {
            if !filter.matches(c) {
                continue;
            }

            match form {
                Ok(form) => {
                    println!("  {c}: {form}");
                }
                Err(error) => {
                    tracing::warn!(%error);
                    println!("  {c}: -");
                }
            }
        }
    }

    Ok(())
}
