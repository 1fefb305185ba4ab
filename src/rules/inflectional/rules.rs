use once_cell::sync::Lazy;

use crate::engine::{CvString, match_suffix};
use crate::rules::helpers::drop_last;
use crate::rules::predicates::{ends_with_any, ends_with_cvc_not_wxy, ends_with_double_consonant};
use crate::{Options, Outcome, Rule};

// Tables
/// Step 1a: plural endings.
static STEP1A_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule!("sses" => "ss"),
        rule!("ies" => "i"),
        // Identity entry: keeps `s → ""` away from a double s.
        rule!("ss" => "ss"),
        rule!("s" => ""),
    ]
});

/// Step 1b: past tense and gerund endings.
static STEP1B_RULES: Lazy<Vec<Rule>> = Lazy::new(|| vec![rule!("eed" => "ee"), rule!("ed" => ""), rule!("ing" => "")]);

/// Step 1b-extra: endings restored after `ed`/`ing` removal.
static STEP1B_EXTRA_RULES: Lazy<Vec<Rule>> =
    Lazy::new(|| vec![rule!("at" => "ate"), rule!("bl" => "ble"), rule!("iz" => "ize")]);

/// Step 1c: terminal `y`.
static STEP1C_RULES: Lazy<Vec<Rule>> = Lazy::new(|| vec![rule!("y" => "i")]);

/// Letters whose doubling survives Step 1b-extra.
const KEEP_DOUBLED: [char; 3] = ['l', 's', 'z'];

// Stages
/// Step 1a. Unconditional.
pub fn step1a(word: &str, _options: &Options) -> Outcome {
    match_suffix(word, &STEP1A_RULES).apply_if(word, |_, _, _| true)
}

/// Step 1b.
///
/// Three mutually exclusive branches:
///
/// ```text
/// eed  -> m(stem) > 0         ? ee-form : unchanged
/// ed   -> stem has a vowel    ? step1b_extra(stem) : unchanged
/// ing  -> stem has a vowel    ? step1b_extra(stem) : unchanged
/// ```
pub fn step1b(word: &str, options: &Options) -> Outcome {
    let found = match_suffix(word, &STEP1B_RULES);
    let Some(rule) = found.rule else {
        return Outcome::unchanged(word);
    };
    let shape = found.stem_shape();

    match rule.name {
        "eed" if shape.measure() > 0 => Outcome::rewritten(found.replaced, rule.name),
        "eed" => Outcome::unchanged(word),
        _ if shape.contains_vowel() => {
            let (word, extra) = step1b_extra(found.stem, &shape, options);
            Outcome { word, rule: Some(rule.name), extra }
        }
        _ => Outcome::unchanged(word),
    }
}

/// Step 1b-extra, run on the bare stem left by `ed`/`ing` removal.
///
/// Returns the new word and the name of the branch that fired. Checks run in
/// order and at most one fires.
fn step1b_extra(stem: String, shape: &CvString, options: &Options) -> (String, Option<&'static str>) {
    let restored = match_suffix(&stem, &STEP1B_EXTRA_RULES);
    if let Some(rule) = restored.rule {
        return (restored.replaced, Some(rule.name));
    }

    if ends_with_double_consonant(&stem, shape, options.double) && !ends_with_any(&stem, &KEEP_DOUBLED) {
        return (drop_last(stem), Some("undouble"));
    }

    if shape.measure() == 1 && ends_with_cvc_not_wxy(&stem, shape) {
        return (stem + "e", Some("restore-e"));
    }

    (stem, None)
}

/// Step 1c. `y → i` when the stem has a vowel.
pub fn step1c(word: &str, _options: &Options) -> Outcome {
    match_suffix(word, &STEP1C_RULES).apply_if(word, |_, shape, _| shape.contains_vowel())
}
