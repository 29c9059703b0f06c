use crate::data::models::Table;

/// Lookup over a [`Table`].
///
/// Every query is a linear scan in table order. Callers only see canonical
/// words, so a case-folded index can replace the scans without changing them.
pub struct Resolver;

impl Resolver {
    /// Canonical word whose key or synonym equals `token`, ignoring case.
    /// The first match in table order wins.
    pub fn resolve_key<'a>(table: &'a Table, token: &str) -> Option<&'a str> {
        let token = token.to_lowercase();
        table
            .iter()
            .find(|(word, entry)| {
                word.to_lowercase() == token
                    || entry.synonyms.iter().any(|syn| syn.to_lowercase() == token)
            })
            .map(|(word, _)| word)
    }

    /// Words whose key or any synonym contains `term`, ignoring case, in table order.
    pub fn search_contains(table: &Table, term: &str) -> Vec<String> {
        let term = term.to_lowercase();
        table
            .iter()
            .filter(|(word, entry)| {
                word.to_lowercase().contains(&term)
                    || entry
                        .synonyms
                        .iter()
                        .any(|syn| syn.to_lowercase().contains(&term))
            })
            .map(|(word, _)| word.to_string())
            .collect()
    }
}
