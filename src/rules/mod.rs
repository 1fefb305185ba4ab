//! Rule tables and the stages built on them.
//!
//! - `inflectional`: Steps 1a, 1b (with 1b-extra) and 1c.
//! - `derivational`: Steps 2, 3 and 4.
//! - `cleanup`: Steps 5a and 5b.

pub(crate) mod cleanup;
pub(crate) mod derivational;
pub(crate) mod helpers;
pub(crate) mod inflectional;
pub(crate) mod predicates;
