//! Consonant/vowel shape of a word.
//!
//! A word is encoded position by position into `C` and `V`. The letters
//! `a e i o u` are vowels; `y` is a vowel only when the letter before it was
//! classified as a consonant, so a leading `y` is always `C`. Anything else,
//! including characters outside `a..z`, is a consonant.
//!
//! The *measure* `m` of a shape is the number of `VC` occurrences, read as
//! `[C](VC)^m[V]`. It is a rough syllable count that gates most rewrites.

use std::fmt;

/// Positional `C`/`V` encoding of a word, one symbol per character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CvString(String);

impl CvString {
    /// Classify every character of `word`.
    pub fn of(word: &str) -> Self {
        let mut shape = String::with_capacity(word.len());
        let mut prev_consonant = false;

        for ch in word.chars() {
            let vowel = match ch {
                'a' | 'e' | 'i' | 'o' | 'u' => true,
                'y' => prev_consonant,
                _ => false,
            };
            shape.push(if vowel { 'V' } else { 'C' });
            prev_consonant = !vowel;
        }

        CvString(shape)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `VC` occurrences.
    pub fn measure(&self) -> usize {
        measure(&self.0)
    }

    /// True when at least one position is a vowel.
    pub fn contains_vowel(&self) -> bool {
        self.0.contains('V')
    }

    pub fn ends_with(&self, pattern: &str) -> bool {
        self.0.ends_with(pattern)
    }
}

impl fmt::Display for CvString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Consonant/vowel shape of `word`.
///
/// # Example
/// ```
/// use porter_stem::cv;
///
/// assert_eq!(cv("syzygy").as_str(), "CVCVCV");
/// ```
pub fn cv(word: &str) -> CvString {
    CvString::of(word)
}

/// Count `VC` in a shape, scanning left to right without overlap.
///
/// # Example
/// ```
/// use porter_stem::measure;
///
/// assert_eq!(measure("CVCCVC"), 2);
/// ```
pub fn measure(cv: &str) -> usize {
    cv.matches("VC").count()
}
