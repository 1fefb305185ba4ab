//! Steps 1a to 1c: plurals, past tenses, gerunds and a trailing `y`.

pub(crate) mod rules;


pub(crate) use rules::{step1a, step1b, step1c};
