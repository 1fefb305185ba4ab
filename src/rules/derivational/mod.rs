//! Steps 2 to 4: derivational suffixes, gated on the measure of the stem.

pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub(crate) use rules::{step2, step3, step4};
