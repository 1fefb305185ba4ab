use once_cell::sync::Lazy;

use crate::engine::match_suffix;
use crate::rules::predicates::ends_with_s_or_t;
use crate::{IvitiMatch, Options, Outcome, Rule};

// Tables
/// Step 2 table. `bli → ble` replaces the older `abli → able` entry and
/// `logi → log` is a later addition.
fn step2_table(iviti: IvitiMatch) -> Vec<Rule> {
    vec![
        rule!("ational" => "ate"),
        rule!("tional" => "tion"),
        rule!("enci" => "ence"),
        rule!("anci" => "ance"),
        rule!("izer" => "ize"),
        rule!("bli" => "ble"),
        rule!("alli" => "al"),
        rule!("entli" => "ent"),
        rule!("eli" => "e"),
        rule!("ousli" => "ous"),
        rule!("ization" => "ize"),
        rule!("ation" => "ate"),
        rule!("ator" => "ate"),
        rule!("alism" => "al"),
        rule!("iveness" => "ive"),
        rule!("fulness" => "ful"),
        rule!("ousness" => "ous"),
        rule!("aliti" => "al"),
        match iviti {
            IvitiMatch::Anchored => rule!("iviti" => "ive"),
            IvitiMatch::Unanchored => rule!(unanchored "iviti" => "ive"),
        },
        rule!("biliti" => "ble"),
        rule!("logi" => "log"),
    ]
}

static STEP2_RULES: Lazy<Vec<Rule>> = Lazy::new(|| step2_table(IvitiMatch::Anchored));
static STEP2_LEGACY_RULES: Lazy<Vec<Rule>> = Lazy::new(|| step2_table(IvitiMatch::Unanchored));

static STEP3_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule!("icate" => "ic"),
        rule!("ative" => ""),
        rule!("alize" => "al"),
        rule!("iciti" => "ic"),
        rule!("ical" => "ic"),
        rule!("ful" => ""),
        rule!("ness" => ""),
    ]
});

static STEP4_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule!("al" => ""),
        rule!("ance" => ""),
        rule!("ence" => ""),
        rule!("er" => ""),
        rule!("ic" => ""),
        rule!("able" => ""),
        rule!("ible" => ""),
        rule!("ant" => ""),
        rule!("ement" => ""),
        rule!("ment" => ""),
        rule!("ent" => ""),
        rule!("ion" => ""),
        rule!("ou" => ""),
        rule!("ism" => ""),
        rule!("ate" => ""),
        rule!("iti" => ""),
        rule!("ous" => ""),
        rule!("ive" => ""),
        rule!("ize" => ""),
    ]
});

// Stages
/// Step 2. Applies when m(stem) > 0.
pub fn step2(word: &str, options: &Options) -> Outcome {
    let table: &[Rule] = match options.iviti {
        IvitiMatch::Anchored => STEP2_RULES.as_slice(),
        IvitiMatch::Unanchored => STEP2_LEGACY_RULES.as_slice(),
    };
    match_suffix(word, table).apply_if(word, |_, shape, _| shape.measure() > 0)
}

/// Step 3. Applies when m(stem) > 0.
pub fn step3(word: &str, _options: &Options) -> Outcome {
    match_suffix(word, &STEP3_RULES).apply_if(word, |_, shape, _| shape.measure() > 0)
}

/// Step 4. Applies when m(stem) > 1; `ion` also needs the stem to end in
/// `s` or `t`.
pub fn step4(word: &str, _options: &Options) -> Outcome {
    match_suffix(word, &STEP4_RULES).apply_if(word, |stem, shape, rule| {
        shape.measure() > 1 && (rule.name != "ion" || ends_with_s_or_t(stem))
    })
}
