/// Compile `$pat` once into a `static` and return a `&'static Regex`.
macro_rules! regex {
    ($pat:expr) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build one suffix rule.
///
/// `rule!("sses" => "ss")` anchors the suffix at the end of the word.
/// `rule!(unanchored "iviti" => "ive")` matches the first occurrence anywhere.
macro_rules! rule {
    ($suffix:literal => $replacement:literal) => {
        $crate::Rule {
            name: $suffix,
            pattern: regex!(concat!($suffix, "$")),
            replacement: $replacement,
        }
    };
    (unanchored $pat:literal => $replacement:literal) => {
        $crate::Rule { name: $pat, pattern: regex!($pat), replacement: $replacement }
    };
}
