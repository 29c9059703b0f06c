use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref LETTERS_RE: Regex = Regex::new(r"\p{L}+").unwrap();
}

/// Capitalizes the first letter of every run of letters and lower-cases the
/// rest. Anything that is not a letter (space, digit, apostrophe, underscore,
/// hyphen) starts a new run, so `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(input: &str) -> String {
    LETTERS_RE
        .replace_all(input, |caps: &Captures| {
            let mut chars = caps[0].chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Trims and title-cases a user-entered headword.
pub fn normalize_word(input: &str) -> String {
    title_case(input.trim())
}

/// Splits a comma-separated synonym list, dropping blank pieces.
pub fn parse_synonyms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(title_case)
        .collect()
}
