use crate::engine::{RunResult, StageTrace, StepSet, Stemmer};
use crate::error::Result;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::time::Duration;

static DEFAULT_STEMMER: Lazy<Stemmer> = Lazy::new(Stemmer::default);

/// How input outside the lowercase ASCII alphabet is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Classify any other character as a consonant and carry it through.
    #[default]
    Lenient,
    /// Reject the word with [`crate::StemError::InvalidInput`].
    Strict,
}

/// Where the Step 2 `iviti → ive` entry may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IvitiMatch {
    /// At the end of the word, like every other table entry.
    #[default]
    Anchored,
    /// Anywhere in the word (first occurrence), as in the legacy table.
    Unanchored,
}

/// What counts as a double consonant in Step 1b-extra and Step 5b.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoubleConsonant {
    /// The CV shape ends in `CC`; the two letters may differ (`hunt`).
    #[default]
    Shape,
    /// The CV shape ends in `CC` and both letters are the same (`hopp`).
    SameLetter,
}

/// Options that affect stemming.
///
/// The rule tables themselves are fixed; these only cover input handling
/// and the two conditions with more than one published reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub validation: Validation,
    pub iviti: IvitiMatch,
    pub double: DoubleConsonant,
}

/// Additional details returned by [`stem_verbose_with`].
#[derive(Debug, Clone)]
pub struct StemDetails {
    /// Elapsed time for the whole run.
    pub total: Duration,
    /// Stages that changed the word.
    pub fired: StepSet,
    /// True when the word was too short to stem.
    pub bypassed: bool,
    /// One entry per executed stage, in order.
    pub stages: Vec<StageTrace>,
}

/// Result from [`stem_verbose_with`].
#[derive(Debug, Clone)]
pub struct StemResultVerbose {
    pub word: String,
    pub stem: String,
    pub details: StemDetails,
}

/// Stem `word` with the default [`Options`].
///
/// The input is expected to be a lowercase ASCII word; anything else is
/// carried through (see [`Validation::Lenient`]).
///
/// # Example
/// ```
/// use porter_stem::stem;
///
/// assert_eq!(stem("caresses"), "caress");
/// assert_eq!(stem("motoring"), "motor");
/// ```
pub fn stem(word: &str) -> String {
    DEFAULT_STEMMER.apply(word)
}

/// Stem `word` using the provided `options`.
///
/// Only fails with [`Validation::Strict`].
pub fn stem_with(word: &str, options: &Options) -> Result<String> {
    Stemmer::new(options.clone()).run(word)
}

/// Stem `word`, rejecting anything that is not a lowercase ASCII word.
///
/// # Example
/// ```
/// use porter_stem::{InvalidInputKind, StemError, try_stem};
///
/// assert_eq!(try_stem("ponies").unwrap(), "poni");
/// assert!(matches!(
///     try_stem("Ponies"),
///     Err(StemError::InvalidInput { kind: InvalidInputKind::Uppercase, .. })
/// ));
/// ```
pub fn try_stem(word: &str) -> Result<String> {
    stem_with(word, &Options { validation: Validation::Strict, ..Options::default() })
}

/// Stem `word` with `options` and return a per-stage trace.
///
/// The default [`stem_with`] path does not allocate these traces.
pub fn stem_verbose_with(word: &str, options: &Options) -> Result<StemResultVerbose> {
    let RunResult { stem, stages, metrics } = Stemmer::new(options.clone()).run_with_metrics(word)?;

    Ok(StemResultVerbose {
        word: word.to_string(),
        stem,
        details: StemDetails { total: metrics.total, fired: metrics.fired, bypassed: metrics.bypassed, stages },
    })
}

/// Stem each word independently, preserving order.
pub fn stem_batch<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| DEFAULT_STEMMER.apply(w.as_ref())).collect()
}

/// Stem each word with `options`, preserving order.
///
/// Fails on the first word rejected by validation.
pub fn stem_batch_with<S: AsRef<str>>(words: &[S], options: &Options) -> Result<Vec<String>> {
    let stemmer = Stemmer::new(options.clone());
    words.iter().map(|w| stemmer.run(w.as_ref())).collect()
}

/// Stem each word on the rayon thread pool. Output order matches input order.
pub fn stem_batch_par<S: AsRef<str> + Sync>(words: &[S]) -> Vec<String> {
    words.par_iter().map(|w| DEFAULT_STEMMER.apply(w.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InvalidInputKind, StemError, Step};

    #[test]
    fn stem_uses_lenient_defaults() {
        assert_eq!(stem("happy"), "happi");
        assert_eq!(stem("it's"), "it'");
        assert_eq!(Options::default().validation, Validation::Lenient);
        assert_eq!(Options::default().iviti, IvitiMatch::Anchored);
        assert_eq!(Options::default().double, DoubleConsonant::Shape);
    }

    #[test]
    fn stem_with_strict_options_validates() {
        let opts = Options { validation: Validation::Strict, ..Options::default() };
        assert_eq!(stem_with("ponies", &opts).unwrap(), "poni");
        assert!(stem_with("pon1es", &opts).is_err());
        assert_eq!(stem_with("pon1es", &Options::default()).unwrap(), "pon1");
    }

    #[test]
    fn stem_verbose_reports_stages() {
        let res = stem_verbose_with("electrical", &Options::default()).unwrap();

        assert_eq!(res.word, "electrical");
        assert_eq!(res.stem, "electr");
        assert!(!res.details.bypassed);
        assert_eq!(res.details.fired.steps(), vec![Step::Step3, Step::Step4]);

        let step4 = res.details.stages.iter().find(|s| s.step == Step::Step4).unwrap();
        assert_eq!((step4.input.as_str(), step4.output.as_str()), ("electric", "electr"));
        assert_eq!(step4.rule, Some("ic"));
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let words = ["caresses", "ponies", "sky", "at", "motoring"];
        let expected = vec!["caress", "poni", "sky", "at", "motor"];

        assert_eq!(stem_batch(&words), expected);
        assert_eq!(stem_batch_par(&words), expected);
        assert_eq!(stem_batch_with(&words, &Options::default()).unwrap(), expected);
        assert!(stem_batch::<&str>(&[]).is_empty());
    }

    #[test]
    fn strict_batch_fails_on_first_invalid_word() {
        let opts = Options { validation: Validation::Strict, ..Options::default() };
        let err = stem_batch_with(&["cats", "Dogs", "b1rds"], &opts).unwrap_err();
        assert!(matches!(err, StemError::InvalidInput { ref word, kind: InvalidInputKind::Uppercase, .. } if word == "Dogs"));
    }
}
