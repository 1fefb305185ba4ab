use crate::DoubleConsonant;
use crate::engine::CvString;
use crate::rules::helpers::last_letter;

/// Returns true when `word` ends in a double consonant.
///
/// With [`DoubleConsonant::Shape`] any two consonants qualify; with
/// [`DoubleConsonant::SameLetter`] they must also be the same letter (`*d`).
pub fn ends_with_double_consonant(word: &str, shape: &CvString, reading: DoubleConsonant) -> bool {
    if !shape.ends_with("CC") {
        return false;
    }
    match reading {
        DoubleConsonant::Shape => true,
        DoubleConsonant::SameLetter => {
            let mut tail = word.chars().rev();
            matches!((tail.next(), tail.next()), (Some(a), Some(b)) if a == b)
        }
    }
}

/// Returns true when `word` ends consonant-vowel-consonant and the final
/// consonant is not `w`, `x` or `y` (`*o`).
pub fn ends_with_cvc_not_wxy(word: &str, shape: &CvString) -> bool {
    shape.ends_with("CVC") && !matches!(last_letter(word), Some('w' | 'x' | 'y'))
}

/// Returns true when the last letter of `word` is one of `letters`.
pub fn ends_with_any(word: &str, letters: &[char]) -> bool {
    last_letter(word).is_some_and(|c| letters.contains(&c))
}

/// Returns true when `word` ends in `s` or `t` (`*S` or `*T`).
pub fn ends_with_s_or_t(word: &str) -> bool {
    ends_with_any(word, &['s', 't'])
}
