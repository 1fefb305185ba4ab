//! First-match-wins suffix matching.
//!
//! A rule table is an ordered slice of [`Rule`]s. Matching walks the table
//! from the top and stops at the first pattern that matches; it never looks
//! for a longer or shorter alternative further down. Tables rely on that
//! ordering (for example `ss → ss` sits above `s → ""` so that a double `s`
//! is never stripped).
//!
//! A match yields two candidates:
//!
//! ```text
//! word      = "conflated"        rule: ed → ""
//! stem      = "conflat"          (suffix removed, used for guards)
//! replaced  = "conflat"          (suffix replaced, returned when the guard holds)
//! ```
//!
//! Stages decide between `replaced` and the untouched word by evaluating
//! their guard on the bare stem.

use super::shape::CvString;
use crate::{Outcome, Rule};

/// Result of running a word against one rule table.
#[derive(Debug, Clone)]
pub(crate) struct SuffixMatch<'r> {
    /// The word with the matched suffix removed; the word itself on a miss.
    pub stem: String,
    /// The word with the matched suffix replaced; the word itself on a miss.
    pub replaced: String,
    /// The rule that matched, if any.
    pub rule: Option<&'r Rule>,
}

impl<'r> SuffixMatch<'r> {
    pub fn stem_shape(&self) -> CvString {
        CvString::of(&self.stem)
    }

    /// Keep `replaced` when a rule matched and `guard` accepts the bare stem
    /// and its shape; otherwise leave `word` as it was.
    pub fn apply_if(self, word: &str, guard: impl FnOnce(&str, &CvString, &Rule) -> bool) -> Outcome {
        match self.rule {
            Some(rule) if guard(&self.stem, &self.stem_shape(), rule) => Outcome::rewritten(self.replaced, rule.name),
            _ => Outcome::unchanged(word),
        }
    }
}

/// Find the first rule in `rules` whose pattern matches `word`.
///
/// For an unanchored pattern only the first occurrence is removed or
/// replaced; the rest of the word is kept on both sides.
pub(crate) fn match_suffix<'r>(word: &str, rules: &'r [Rule]) -> SuffixMatch<'r> {
    for rule in rules {
        if let Some(m) = rule.pattern.find(word) {
            let (head, tail) = (&word[..m.start()], &word[m.end()..]);
            return SuffixMatch {
                stem: [head, tail].concat(),
                replaced: [head, rule.replacement, tail].concat(),
                rule: Some(rule),
            };
        }
    }

    SuffixMatch { stem: word.to_string(), replaced: word.to_string(), rule: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plural_rules() -> Vec<Rule> {
        vec![rule!("ss" => "ss"), rule!("s" => "")]
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = plural_rules();
        let m = match_suffix("caress", &rules);

        assert!(m.rule.is_some());
        assert_eq!(m.rule.map(|r| r.name), Some("ss"));
        assert_eq!(m.stem, "care");
        assert_eq!(m.replaced, "caress");
    }

    #[test]
    fn later_rule_matches_when_earlier_ones_miss() {
        let rules = plural_rules();
        let m = match_suffix("cats", &rules);

        assert_eq!(m.rule.map(|r| r.name), Some("s"));
        assert_eq!(m.stem, "cat");
        assert_eq!(m.replaced, "cat");
    }

    #[test]
    fn table_order_beats_suffix_length() {
        // `s` is listed first, so the longer `ss` entry is never reached.
        let rules = vec![rule!("s" => ""), rule!("ss" => "ss")];
        let m = match_suffix("caress", &rules);

        assert_eq!(m.rule.map(|r| r.name), Some("s"));
        assert_eq!(m.replaced, "cares");
    }

    #[test]
    fn miss_returns_word_for_both_candidates() {
        let rules = plural_rules();
        let m = match_suffix("tree", &rules);

        assert!(m.rule.is_none());
        assert_eq!(m.stem, "tree");
        assert_eq!(m.replaced, "tree");
    }

    #[test]
    fn anchored_rules_ignore_inner_occurrences() {
        let rules = vec![rule!("ss" => "")];
        assert!(match_suffix("assert", &rules).rule.is_none());
    }

    #[test]
    fn unanchored_rule_rewrites_first_occurrence_in_place() {
        let rules = vec![rule!(unanchored "iviti" => "ive")];
        let m = match_suffix("activitism", &rules);

        assert_eq!(m.rule.map(|r| r.name), Some("iviti"));
        assert_eq!(m.stem, "actsm");
        assert_eq!(m.replaced, "activesm");
    }

    #[test]
    fn apply_if_respects_the_guard() {
        let rules = vec![rule!("ing" => "")];

        let kept = match_suffix("sing", &rules).apply_if("sing", |_, shape, _| shape.contains_vowel());
        assert_eq!(kept, Outcome::unchanged("sing"));

        let stripped = match_suffix("motoring", &rules).apply_if("motoring", |_, shape, _| shape.contains_vowel());
        assert_eq!(stripped.word, "motor");
        assert_eq!(stripped.rule, Some("ing"));
        assert!(stripped.fired());
    }
}
