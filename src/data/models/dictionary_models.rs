use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// One dictionary headword's data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub synonyms: BTreeSet<String>,
}

impl Entry {
    pub fn new(first_definition: impl Into<String>) -> Self {
        Self {
            definitions: vec![first_definition.into()],
            synonyms: BTreeSet::new(),
        }
    }
}

/// Canonical word -> entry, kept in insertion order.
///
/// Serializes as a JSON object whose keys appear in the same order they were
/// loaded or inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    entries: Vec<(String, Entry)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table used when no definitions file exists yet.
    pub fn seed() -> Self {
        let mut table = Self::new();

        let mut futurism = Entry::new(
            "A movement that emphasizes themes of the future, technology, speed, and change.",
        );
        futurism.synonyms.insert("Future Movement".to_string());
        table.insert("Futurism".to_string(), futurism);

        let mut shakespeare = Entry::new(
            "An iconic English playwright known for his influential plays and sonnets.",
        );
        shakespeare.synonyms.insert("Bard".to_string());
        shakespeare.synonyms.insert("William Shakespeare".to_string());
        table.insert("Shakespeare".to_string(), shakespeare);

        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(word, entry)| (word.as_str(), entry))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.position(word).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, word: &str) -> Option<&mut Entry> {
        self.position(word).map(move |i| &mut self.entries[i].1)
    }

    /// Inserts or replaces. A replaced entry keeps its original position.
    pub fn insert(&mut self, word: String, entry: Entry) -> Option<Entry> {
        match self.position(&word) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, entry)),
            None => {
                self.entries.push((word, entry));
                None
            }
        }
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.entries.iter().position(|(w, _)| w == word)
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, entry) in &self.entries {
            map.serialize_entry(word, entry)?;
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = Table;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of words to dictionary entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Table, A::Error> {
        let mut table = Table::new();
        while let Some((word, entry)) = access.next_entry::<String, Entry>()? {
            if table.contains_key(&word) {
                return Err(de::Error::custom(format!("duplicate word '{}'", word)));
            }
            table.entries.push((word, entry));
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Table, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}
