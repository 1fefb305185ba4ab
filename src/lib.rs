use regex::Regex;
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{
    DoubleConsonant, IvitiMatch, Options, StemDetails, StemResultVerbose, Validation, stem, stem_batch, stem_batch_par,
    stem_batch_with, stem_verbose_with, stem_with, try_stem,
};
pub use engine::{CvString, RunMetrics, RunResult, StageTrace, StepSet, Stemmer, cv, measure};
pub use error::{InvalidInputKind, Result, StemError};

// --- Stages -----------------------------------------------------------------

/// The stages of the cascade, in execution order.
///
/// `Step1bExtra` never runs on its own: it is the post-processing that
/// Step 1b hands the bare stem to after stripping `ed` or `ing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Step1a,
    Step1b,
    Step1bExtra,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5a,
    Step5b,
}

impl Step {
    /// Every stage, in the order the cascade visits them.
    pub const ALL: [Step; 9] = [
        Step::Step1a,
        Step::Step1b,
        Step::Step1bExtra,
        Step::Step1c,
        Step::Step2,
        Step::Step3,
        Step::Step4,
        Step::Step5a,
        Step::Step5b,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::Step1a => "1a",
            Step::Step1b => "1b",
            Step::Step1bExtra => "1b*",
            Step::Step1c => "1c",
            Step::Step2 => "2",
            Step::Step3 => "3",
            Step::Step4 => "4",
            Step::Step5a => "5a",
            Step::Step5b => "5b",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.name())
    }
}

// --- Internal types ---------------------------------------------------------

/// One entry of a suffix rule table: a pattern and its replacement.
///
/// Tables are ordered; the first entry whose pattern matches wins and the
/// rest of the table is never consulted. Patterns are normally anchored at
/// the end of the word (see the `rule!` macro in `src/macros.rs`).
#[derive(Debug)]
pub(crate) struct Rule {
    /// The suffix as written in the table, used in traces.
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub replacement: &'static str,
}

/// What a single stage did to the word it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Outcome {
    /// The word after the stage (equal to the input when nothing fired).
    pub word: String,
    /// Table entry whose replacement was applied, if any.
    pub rule: Option<&'static str>,
    /// Step 1b-extra branch taken after `ed`/`ing` removal.
    pub extra: Option<&'static str>,
}

impl Outcome {
    pub fn unchanged(word: &str) -> Self {
        Outcome { word: word.to_string(), rule: None, extra: None }
    }

    pub fn rewritten(word: String, rule: &'static str) -> Self {
        Outcome { word, rule: Some(rule), extra: None }
    }

    /// True when a table entry (or structural rewrite) was applied.
    pub fn fired(&self) -> bool {
        self.rule.is_some()
    }
}
