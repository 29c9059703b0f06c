use parking_lot::RwLock;

use super::normalize::{normalize_word, parse_synonyms};
use super::resolver::Resolver;
use crate::data::models::{DictionaryError, Entry, Result, Table};
use crate::data::repositories::DefinitionsStore;

/// The dictionary table together with the file that backs it.
///
/// Reads share a read lock. Each mutation holds the write lock while it edits a
/// staged copy, flushes the copy and swaps it in, so a failed flush leaves the
/// in-memory table untouched.
pub struct Dictionary {
    store: DefinitionsStore,
    table: RwLock<Table>,
}

impl Dictionary {
    /// Loads the table from `store`.
    pub fn open(store: DefinitionsStore) -> Result<Self> {
        let table = store.load()?;
        Ok(Self::new(store, table))
    }

    pub fn new(store: DefinitionsStore, table: Table) -> Self {
        Self {
            store,
            table: RwLock::new(table),
        }
    }

    pub fn resolve_key(&self, token: &str) -> Option<String> {
        let table = self.table.read();
        Resolver::resolve_key(&table, token).map(str::to_string)
    }

    /// Exact-key lookup.
    pub fn get_entry(&self, word: &str) -> Option<Entry> {
        self.table.read().get(word).cloned()
    }

    /// Resolves `token` and returns its canonical word and entry from one snapshot.
    pub fn lookup(&self, token: &str) -> Option<(String, Entry)> {
        let table = self.table.read();
        let word = Resolver::resolve_key(&table, token)?;
        table
            .get(word)
            .map(|entry| (word.to_string(), entry.clone()))
    }

    pub fn search_contains(&self, term: &str) -> Vec<String> {
        Resolver::search_contains(&self.table.read(), term)
    }

    pub fn snapshot(&self) -> Table {
        self.table.read().clone()
    }

    pub fn create_word(&self, word: &str, first_definition: &str) -> Result<String> {
        let word = normalize_word(word);
        let definition = first_definition.trim();
        if word.is_empty() {
            return Err(DictionaryError::Validation("Word must not be blank".into()));
        }
        if definition.is_empty() {
            return Err(DictionaryError::Validation(
                "Definition must not be blank".into(),
            ));
        }

        self.mutate(|table| {
            if table.contains_key(&word) {
                return Err(DictionaryError::AlreadyExists(word.clone()));
            }
            if let Some(owner) = Resolver::resolve_key(table, &word) {
                return Err(DictionaryError::Validation(format!(
                    "'{}' is already used by '{}'",
                    word, owner
                )));
            }
            table.insert(word.clone(), Entry::new(definition));
            Ok(word.clone())
        })
        .inspect(|word| log::info!("Added word '{}'", word))
    }

    pub fn append_definition(&self, token: &str, new_definition: &str) -> Result<String> {
        let definition = new_definition.trim();
        if definition.is_empty() {
            return Err(DictionaryError::Validation(
                "Definition must not be blank".into(),
            ));
        }

        self.mutate(|table| {
            let word = Self::resolve_owned(table, token)?;
            if let Some(entry) = table.get_mut(&word) {
                entry.definitions.push(definition.to_string());
            }
            Ok(word)
        })
        .inspect(|word| log::info!("Added definition to '{}'", word))
    }

    /// Adds each synonym in the comma-separated `raw_synonyms` to the entry
    /// `token` resolves to. Synonyms the entry already has, in any casing, are
    /// skipped; one that belongs to another entry rejects the whole request.
    pub fn add_synonyms(&self, token: &str, raw_synonyms: &str) -> Result<String> {
        let synonyms = parse_synonyms(raw_synonyms);

        self.mutate(|table| {
            let word = Self::resolve_owned(table, token)?;
            if synonyms.is_empty() {
                return Err(DictionaryError::Validation(
                    "No synonyms were given".into(),
                ));
            }

            for synonym in &synonyms {
                match Resolver::resolve_key(table, synonym) {
                    Some(owner) if owner == word => {
                        log::debug!("'{}' already names '{}', skipping", synonym, word);
                    }
                    Some(owner) => {
                        return Err(DictionaryError::Validation(format!(
                            "'{}' is already used by '{}'",
                            synonym, owner
                        )));
                    }
                    None => {
                        if let Some(entry) = table.get_mut(&word) {
                            entry.synonyms.insert(synonym.clone());
                        }
                    }
                }
            }
            Ok(word)
        })
        .inspect(|word| log::info!("Added synonyms to '{}'", word))
    }

    fn resolve_owned(table: &Table, token: &str) -> Result<String> {
        let token = token.trim();
        Resolver::resolve_key(table, token)
            .map(str::to_string)
            .ok_or_else(|| DictionaryError::NotFound(token.to_string()))
    }

    fn mutate<T>(&self, apply: impl FnOnce(&mut Table) -> Result<T>) -> Result<T> {
        let mut table = self.table.write();
        let mut staged = table.clone();

        let value = apply(&mut staged).inspect_err(|e| log::warn!("Rejected change: {}", e))?;

        self.store.flush(&staged).inspect_err(|e| {
            log::error!("{}; in-memory dictionary left unchanged", e);
        })?;

        *table = staged;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn create_test_dictionary() -> (Dictionary, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = DefinitionsStore::new(temp_dir.path().join("definitions.json"));
        let dictionary = Dictionary::open(store).unwrap();
        (dictionary, temp_dir)
    }

    fn reload(temp_dir: &TempDir) -> Table {
        DefinitionsStore::new(temp_dir.path().join("definitions.json"))
            .load()
            .unwrap()
    }

    #[test]
    fn create_word_title_cases_and_persists() {
        let (dictionary, temp_dir) = create_test_dictionary();

        let word = dictionary
            .create_word("  futurism2000 ", " A newer movement. ")
            .unwrap();
        assert_eq!(word, "Futurism2000");
        assert_eq!(dictionary.resolve_key("FUTURISM2000").as_deref(), Some("Futurism2000"));

        let entry = dictionary.get_entry("Futurism2000").unwrap();
        assert_eq!(entry.definitions, vec!["A newer movement."]);
        assert!(entry.synonyms.is_empty());

        let persisted = reload(&temp_dir);
        assert_eq!(persisted, dictionary.snapshot());
        assert_eq!(persisted.words().last(), Some("Futurism2000"));
    }

    #[test]
    fn create_existing_word_fails() {
        let (dictionary, temp_dir) = create_test_dictionary();
        let err = dictionary.create_word("futurism", "Again.").unwrap_err();
        assert!(matches!(err, DictionaryError::AlreadyExists(ref w) if w == "Futurism"));
        assert_eq!(err.to_string(), "'Futurism' already exists in the dictionary.");
        // nothing was flushed
        assert!(!temp_dir.path().join("definitions.json").exists());
    }

    #[test]
    fn create_blank_word_fails() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        assert!(matches!(
            dictionary.create_word("", "empty test"),
            Err(DictionaryError::Validation(_))
        ));
        assert!(matches!(
            dictionary.create_word("   ", "empty test"),
            Err(DictionaryError::Validation(_))
        ));
        assert!(matches!(
            dictionary.create_word("Dadaism", "  "),
            Err(DictionaryError::Validation(_))
        ));
        assert_eq!(dictionary.snapshot(), Table::seed());
    }

    #[test]
    fn create_word_that_is_a_synonym_fails() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        let err = dictionary.create_word("bard", "A poet.").unwrap_err();
        assert!(matches!(err, DictionaryError::Validation(ref m) if m.contains("Shakespeare")));
    }

    #[test]
    fn create_word_with_case_only_key_clash_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = DefinitionsStore::new(temp_dir.path().join("definitions.json"));
        let mut table = Table::new();
        table.insert("McDonald".to_string(), Entry::new("A surname."));
        let dictionary = Dictionary::new(store, table);

        let err = dictionary.create_word("mcdonald", "Again.").unwrap_err();
        assert!(matches!(err, DictionaryError::Validation(_)));
    }

    #[test]
    fn create_word_matches_existing_title_cased_key() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        dictionary.create_word("o'neil", "A surname.").unwrap();
        assert!(dictionary.get_entry("O'Neil").is_some());

        let err = dictionary.create_word("O'NEIL", "Again.").unwrap_err();
        assert!(matches!(err, DictionaryError::AlreadyExists(ref w) if w == "O'Neil"));
    }

    #[test]
    fn concurrent_mutations_are_not_lost() {
        let (dictionary, temp_dir) = create_test_dictionary();
        let dictionary = Arc::new(dictionary);
        const WRITERS: usize = 16;

        let handles: Vec<_> = (0..WRITERS)
            .map(|i| {
                let dictionary = Arc::clone(&dictionary);
                thread::spawn(move || {
                    dictionary
                        .append_definition("Futurism", &format!("Definition {}", i))
                        .unwrap();
                    dictionary
                        .add_synonyms("Shakespeare", &format!("Poet {}", i))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let check = |table: &Table| {
            let futurism = table.get("Futurism").unwrap();
            assert_eq!(futurism.definitions.len(), WRITERS + 1);
            let shakespeare = table.get("Shakespeare").unwrap();
            assert_eq!(shakespeare.synonyms.len(), WRITERS + 2);
            for i in 0..WRITERS {
                assert!(futurism.definitions.contains(&format!("Definition {}", i)));
                assert!(shakespeare.synonyms.contains(&format!("Poet {}", i)));
            }
        };
        check(&dictionary.snapshot());
        check(&reload(&temp_dir));
        assert_eq!(reload(&temp_dir), dictionary.snapshot());
    }

    #[test]
    fn append_definition_through_synonym() {
        let (dictionary, temp_dir) = create_test_dictionary();

        let word = dictionary
            .append_definition("future movement", "A stylistic era.")
            .unwrap();
        assert_eq!(word, "Futurism");

        let entry = dictionary.get_entry("Futurism").unwrap();
        assert_eq!(entry.definitions.len(), 2);
        assert_eq!(entry.definitions[1], "A stylistic era.");
        assert_eq!(reload(&temp_dir).get("Futurism"), Some(&entry));
    }

    #[test]
    fn append_definition_keeps_duplicates() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        dictionary.append_definition("Bard", "Same.").unwrap();
        dictionary.append_definition("bard", "Same.").unwrap();
        let entry = dictionary.get_entry("Shakespeare").unwrap();
        assert_eq!(&entry.definitions[1..], ["Same.", "Same."]);
    }

    #[test]
    fn append_definition_unknown_word() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        let err = dictionary.append_definition(" Dadaism ", "Art.").unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound(ref t) if t == "Dadaism"));
        assert_eq!(err.to_string(), "'Dadaism' is not in the dictionary.");
    }

    #[test]
    fn add_synonyms_collapses_duplicates() {
        let (dictionary, temp_dir) = create_test_dictionary();

        let word = dictionary
            .add_synonyms("Shakespeare", "Bard, bard, THE BARD")
            .unwrap();
        assert_eq!(word, "Shakespeare");

        let synonyms: Vec<String> = dictionary
            .get_entry("Shakespeare")
            .unwrap()
            .synonyms
            .into_iter()
            .collect();
        assert_eq!(synonyms, vec!["Bard", "The Bard", "William Shakespeare"]);
        assert_eq!(dictionary.search_contains("bard"), vec!["Shakespeare"]);
        assert_eq!(reload(&temp_dir), dictionary.snapshot());
    }

    #[test]
    fn add_synonyms_skips_own_key() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        dictionary.add_synonyms("futurism", "FUTURISM, Velocity").unwrap();
        let synonyms = dictionary.get_entry("Futurism").unwrap().synonyms;
        assert!(synonyms.contains("Velocity"));
        assert!(!synonyms.contains("Futurism"));
    }

    #[test]
    fn add_synonyms_owned_elsewhere_rejects_all() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        let err = dictionary
            .add_synonyms("Futurism", "Speed, bard")
            .unwrap_err();
        assert!(matches!(err, DictionaryError::Validation(ref m) if m.contains("Shakespeare")));
        assert!(!dictionary.get_entry("Futurism").unwrap().synonyms.contains("Speed"));
    }

    #[test]
    fn add_synonyms_requires_a_synonym() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        assert!(matches!(
            dictionary.add_synonyms("Futurism", " , ,"),
            Err(DictionaryError::Validation(_))
        ));
        assert!(matches!(
            dictionary.add_synonyms("Dadaism", " , ,"),
            Err(DictionaryError::NotFound(_))
        ));
    }

    #[test]
    fn lookup_returns_word_and_entry() {
        let (dictionary, _temp_dir) = create_test_dictionary();
        let (word, entry) = dictionary.lookup("william shakespeare").unwrap();
        assert_eq!(word, "Shakespeare");
        assert_eq!(entry.synonyms.len(), 2);
        assert!(dictionary.lookup("nobody").is_none());
    }

    #[test]
    fn failed_flush_leaves_table_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        let dictionary = Dictionary::new(DefinitionsStore::new(&target), Table::seed());

        let err = dictionary.create_word("Dadaism", "Art.").unwrap_err();
        assert!(matches!(err, DictionaryError::Persistence(_)));
        assert!(dictionary.resolve_key("Dadaism").is_none());

        assert!(dictionary.append_definition("Futurism", "More.").is_err());
        assert!(dictionary.add_synonyms("Futurism", "Speed").is_err());
        assert_eq!(dictionary.snapshot(), Table::seed());
    }

    #[test]
    fn open_corrupt_store_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("definitions.json");
        fs::write(&path, "{\"Futurism\": ").unwrap();
        assert!(matches!(
            Dictionary::open(DefinitionsStore::new(path)),
            Err(DictionaryError::CorruptStore { .. })
        ));
    }
}
