//! Steps 5a and 5b: a final `e` and a final `ll`.

pub(crate) mod rules;


pub(crate) use rules::{step5a, step5b};
