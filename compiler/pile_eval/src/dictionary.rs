//! Word dictionaries.
//!
//! The runtime owns the global dictionary; every context owns a local one
//! that shadows it.

use rustc_hash::FxHashMap;

use crate::value::{Properties, Value, Word};

#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: FxHashMap<String, Word>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `word`, replacing any word with the same name.
    pub fn insert(&mut self, word: Word) {
        self.words.insert(word.id().to_string(), word);
    }

    pub fn get(&self, id: &str) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.words.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words sorted by name.
    pub fn words(&self) -> Vec<&Word> {
        let mut words: Vec<_> = self.words.values().collect();
        words.sort_by(|a, b| a.id().cmp(b.id()));
        words
    }

    /// Name-to-word object, as returned by `globals` and `locals`.
    pub fn to_properties(&self) -> Properties {
        self.words()
            .into_iter()
            .map(|word| (word.id().to_string(), Value::Word(word.clone())))
            .collect()
    }
}

impl Extend<Word> for Dictionary {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}
