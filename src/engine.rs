//! Stemming engine.
//!
//! This module is the entry point for the machinery the rule tables run on.
//! The tables themselves live under `src/rules/**`; everything here is
//! table-agnostic.
//!
//! ## How the parts work together
//!
//! Stemming a word is a straight-line pipeline of pure stages:
//!
//! ```text
//! word ── Stemmer::run ── validate (strict only)
//!                           │
//!                           ├─ len <= 2 ──────────────────────────> word
//!                           v
//!          1a → 1b(→1b*) → 1c → 2 → 3 → 4 → 5a → 5b ──────────────> stem
//!           │     each stage: match_suffix (matcher.rs)
//!           │                 + guard on CvString of the bare stem (shape.rs)
//!           v
//!       StageTrace per stage (metrics.rs, only with run_with_metrics)
//! ```
//!
//! No stage sees anything but the current word. Shapes and measures are
//! recomputed from the bare stem under test every time a guard needs them.
//!
//! ## Responsibilities by module
//!
//! - `shape.rs`: the consonant/vowel classifier (`CvString`) and the measure.
//! - `matcher.rs`: first-match-wins suffix matching over an ordered table.
//! - `stemmer.rs`: input validation, the short-word bypass, and the fixed
//!   stage order.
//! - `metrics.rs`: per-stage traces and the `StepSet` of stages that fired.
//!
//! ## Debugging
//!
//! Every rewrite is logged at `trace` level through `tracing`; run the CLI
//! with `RUST_LOG=porter_stem=trace` to see them.

#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/shape.rs"]
mod shape;
#[path = "engine/stemmer.rs"]
mod stemmer;

pub(crate) use matcher::match_suffix;
pub use metrics::{RunMetrics, RunResult, StageTrace, StepSet};
pub use shape::{CvString, cv, measure};
pub use stemmer::Stemmer;
