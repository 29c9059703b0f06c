use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::data::models::Entry;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub results: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct WordView {
    pub word: String,
    pub definitions: Vec<String>,
    pub synonyms: BTreeSet<String>,
}

impl WordView {
    pub fn new(word: String, entry: Entry) -> Self {
        Self {
            word,
            definitions: entry.definitions,
            synonyms: entry.synonyms,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub word: String,
}
