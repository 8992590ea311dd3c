use boruca_types::{Dataset, DictionaryEntry, Direction};

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Dictionary lookup operations
pub trait Dictionary {
    /// Case-insensitive exact match against the field selected by `direction`
    fn lookup_exact(&self, query: &str, direction: Direction) -> Vec<&DictionaryEntry>;
}

impl Dictionary for Dataset {
    fn lookup_exact(&self, query: &str, direction: Direction) -> Vec<&DictionaryEntry> {
        let preprocessor = DefaultPreprocessor;
        let key = preprocessor.process(query);

        self.words
            .iter()
            .filter(|entry| {
                let field = match direction {
                    Direction::Boruca => &entry.boruca_word,
                    Direction::Spanish => &entry.spanish_translation,
                };
                preprocessor.process(field) == key
            })
            .collect()
    }
}

/// All entries matching `term`, in dataset order
pub fn search<'a>(term: &str, direction: Direction, dataset: &'a Dataset) -> Vec<&'a DictionaryEntry> {
    let matches = dataset.lookup_exact(term, direction);
    tracing::debug!("search '{}' ({}): {} matches", term, direction, matches.len());
    matches
}
