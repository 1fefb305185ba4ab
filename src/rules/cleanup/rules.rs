use once_cell::sync::Lazy;

use crate::engine::{CvString, match_suffix};
use crate::rules::helpers::{drop_last, last_letter};
use crate::rules::predicates::ends_with_double_consonant;
use crate::{Options, Outcome, Rule};

static STEP5A_RULES: Lazy<Vec<Rule>> = Lazy::new(|| vec![rule!("e" => "")]);

/// Step 5a. Drops a final `e` when m(stem) > 1, or when m(stem) = 1 and the
/// stem shape does not end in `CVC`.
pub fn step5a(word: &str, _options: &Options) -> Outcome {
    match_suffix(word, &STEP5A_RULES).apply_if(word, |_, shape, _| {
        let m = shape.measure();
        m > 1 || (m == 1 && !shape.ends_with("CVC"))
    })
}

/// Step 5b. Drops a final `l` after another consonant when m > 1.
///
/// There is no suffix to strip here, so the guard reads the current word
/// rather than a bare stem.
pub fn step5b(word: &str, options: &Options) -> Outcome {
    let shape = CvString::of(word);
    let doubled_l = last_letter(word) == Some('l') && ends_with_double_consonant(word, &shape, options.double);
    if shape.measure() > 1 && doubled_l {
        Outcome::rewritten(drop_last(word.to_string()), "l")
    } else {
        Outcome::unchanged(word)
    }
}
