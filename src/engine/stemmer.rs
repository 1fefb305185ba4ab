//! The stage orchestrator.
//!
//! Stages run in a fixed order, each one handed the previous stage's word:
//!
//! ```text
//! 1a → 1b → 1c → 2 → 3 → 4 → 5a → 5b
//! ```
//!
//! No stage is retried and there is no shared state between stages or
//! between words, so a `Stemmer` can be shared freely across threads. Words
//! of two characters or fewer skip the cascade entirely.

use super::metrics::{RunMetrics, RunResult, StageTrace, StepSet};
use crate::error::{InvalidInputKind, Result, StemError};
use crate::rules::{cleanup, derivational, inflectional};
use crate::{Options, Outcome, Step, Validation};
use std::time::Instant;
use tracing::{debug, trace};

type Stage = fn(&str, &Options) -> Outcome;

/// Stage order. Step 1b-extra is reached from inside Step 1b.
const STAGES: [(Step, Stage); 8] = [
    (Step::Step1a, inflectional::step1a),
    (Step::Step1b, inflectional::step1b),
    (Step::Step1c, inflectional::step1c),
    (Step::Step2, derivational::step2),
    (Step::Step3, derivational::step3),
    (Step::Step4, derivational::step4),
    (Step::Step5a, cleanup::step5a),
    (Step::Step5b, cleanup::step5b),
];

/// Words at or below this many characters are returned unchanged.
const MIN_STEMMED_LEN: usize = 2;

/// Runs the stage cascade with a fixed set of [`Options`].
///
/// Usage: create with `Stemmer::new(options)` then call `run(word)`.
#[derive(Debug, Clone, Default)]
pub struct Stemmer {
    options: Options,
}

impl Stemmer {
    pub fn new(options: Options) -> Self {
        Stemmer { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate `word` according to the options, then stem it.
    pub fn run(&self, word: &str) -> Result<String> {
        self.check(word)?;
        Ok(self.apply(word))
    }

    /// Stem `word` without validating it.
    ///
    /// Characters outside `a..z` are classified as consonants and carried
    /// through untouched.
    pub fn apply(&self, word: &str) -> String {
        if is_short(word) {
            trace!(word, "short word, cascade skipped");
            return word.to_string();
        }
        self.drive(word, |_, _, _| {})
    }

    /// Like [`Stemmer::run`], also returning a trace of every stage.
    pub fn run_with_metrics(&self, word: &str) -> Result<RunResult> {
        let start = Instant::now();
        self.check(word)?;

        let mut stages = Vec::new();
        let mut fired = StepSet::empty();
        let bypassed = is_short(word);

        let stem = if bypassed {
            word.to_string()
        } else {
            self.drive(word, |step, input, outcome| {
                if outcome.word != input {
                    fired |= StepSet::of(step);
                }
                if outcome.extra.is_some() {
                    fired |= StepSet::STEP_1B_EXTRA;
                }
                stages.push(StageTrace {
                    step,
                    input: input.to_string(),
                    output: outcome.word.clone(),
                    rule: outcome.rule,
                    extra: outcome.extra,
                });
            })
        };

        Ok(RunResult { stem, stages, metrics: RunMetrics { total: start.elapsed(), fired, bypassed } })
    }

    /// Run every stage in order, reporting each outcome to `on_stage`.
    fn drive(&self, word: &str, mut on_stage: impl FnMut(Step, &str, &Outcome)) -> String {
        let mut current = word.to_string();

        for (step, stage) in STAGES {
            let outcome = stage(&current, &self.options);
            if outcome.fired() {
                trace!(%step, rule = outcome.rule, extra = outcome.extra, from = %current, to = %outcome.word, "rule applied");
            }
            on_stage(step, &current, &outcome);
            current = outcome.word;
        }

        current
    }

    fn check(&self, word: &str) -> Result<()> {
        match self.options.validation {
            Validation::Lenient => Ok(()),
            Validation::Strict => validate(word),
        }
    }
}

fn is_short(word: &str) -> bool {
    word.chars().count() <= MIN_STEMMED_LEN
}

/// Reject anything that is not a lowercase ASCII letter.
fn validate(word: &str) -> Result<()> {
    match word.char_indices().find(|(_, c)| !c.is_ascii_lowercase()) {
        None => Ok(()),
        Some((position, found)) => {
            let kind = InvalidInputKind::of(found);
            debug!(word, %kind, position, "rejected input");
            Err(StemError::InvalidInput { word: word.to_string(), kind, found, position })
        }
    }
}
