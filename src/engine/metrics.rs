//! Per-stage run traces.
//!
//! `Stemmer::run` only returns the stem. `Stemmer::run_with_metrics` also
//! keeps a [`StageTrace`] for every stage it executed, which is what the CLI
//! `--trace` report and [`crate::stem_verbose_with`] are built from.
//!
//! Traces allocate two strings per stage, so they stay off the default path.

use crate::Step;
use std::time::Duration;

bitflags::bitflags! {
    /// Set of stages that applied a rewrite during one run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StepSet: u16 {
        const STEP_1A       = 1 << 0;
        const STEP_1B       = 1 << 1;
        const STEP_1B_EXTRA = 1 << 2;
        const STEP_1C       = 1 << 3;
        const STEP_2        = 1 << 4;
        const STEP_3        = 1 << 5;
        const STEP_4        = 1 << 6;
        const STEP_5A       = 1 << 7;
        const STEP_5B       = 1 << 8;
    }
}

impl Default for StepSet {
    fn default() -> Self {
        StepSet::empty()
    }
}

impl StepSet {
    /// The single-stage set for `step`.
    pub fn of(step: Step) -> Self {
        match step {
            Step::Step1a => StepSet::STEP_1A,
            Step::Step1b => StepSet::STEP_1B,
            Step::Step1bExtra => StepSet::STEP_1B_EXTRA,
            Step::Step1c => StepSet::STEP_1C,
            Step::Step2 => StepSet::STEP_2,
            Step::Step3 => StepSet::STEP_3,
            Step::Step4 => StepSet::STEP_4,
            Step::Step5a => StepSet::STEP_5A,
            Step::Step5b => StepSet::STEP_5B,
        }
    }

    /// Stages in this set, in cascade order.
    pub fn steps(&self) -> Vec<Step> {
        Step::ALL.into_iter().filter(|step| self.contains(StepSet::of(*step))).collect()
    }
}

/// What one stage received and produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    pub step: Step,
    pub input: String,
    pub output: String,
    /// Table entry whose replacement was applied.
    pub rule: Option<&'static str>,
    /// Step 1b-extra branch, only ever set on the Step 1b trace.
    pub extra: Option<&'static str>,
}

impl StageTrace {
    pub fn changed(&self) -> bool {
        self.input != self.output
    }
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Elapsed time for [`crate::Stemmer::run_with_metrics`].
    pub total: Duration,
    /// Stages that applied a rewrite.
    pub fired: StepSet,
    /// True when the word was short enough to skip the cascade.
    pub bypassed: bool,
}

/// Stemmer output bundled with its trace.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub stem: String,
    /// One entry per executed stage; empty when the cascade was bypassed.
    pub stages: Vec<StageTrace>,
    pub metrics: RunMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_set_lists_steps_in_cascade_order() {
        let set = StepSet::STEP_5A | StepSet::STEP_1B | StepSet::STEP_1B_EXTRA;
        assert_eq!(set.steps(), vec![Step::Step1b, Step::Step1bExtra, Step::Step5a]);
        assert!(StepSet::default().steps().is_empty());
    }

    #[test]
    fn every_step_has_its_own_bit() {
        let all = Step::ALL.iter().fold(StepSet::empty(), |acc, step| acc | StepSet::of(*step));
        assert_eq!(all, StepSet::all());
        assert_eq!(all.bits().count_ones() as usize, Step::ALL.len());
    }
}
