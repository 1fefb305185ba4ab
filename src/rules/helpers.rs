/// Last character of `word`.
pub fn last_letter(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// `word` without its final character.
pub fn drop_last(mut word: String) -> String {
    word.pop();
    word
}
