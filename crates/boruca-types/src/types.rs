use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Missing and `null` both read as the empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One sense of a Boruca headword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub boruca_word: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spanish_translation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub example_sentence_boruca: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub example_sentence_spanish: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DictionaryEntry {
    /// Comment text, `None` when absent or empty
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// Whole word list, shaped `{ "words": [...] }` on the wire and on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub words: Vec<DictionaryEntry>,
}

impl Dataset {
    pub fn new(words: Vec<DictionaryEntry>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Which language the search term is written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Boruca,
    Spanish,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Boruca => "Boruca",
            Direction::Spanish => "Español",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search direction: {}", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boruca" | "brn" => Ok(Direction::Boruca),
            "español" | "espanol" | "spanish" | "es" => Ok(Direction::Spanish),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// Display model for one matched sense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenseView {
    /// 1-based position inside its group
    pub index: usize,
    pub part_of_speech: String,
    pub translation: String,
    pub example_boruca: String,
    pub example_spanish: String,
    pub comment: Option<String>,
}

/// All matched senses sharing a headword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordGroup {
    pub headword: String,
    pub senses: Vec<SenseView>,
}

/// Groups in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedView {
    pub groups: Vec<WordGroup>,
}

impl GroupedView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, headword: &str) -> Option<&[SenseView]> {
        self.groups
            .iter()
            .find(|g| g.headword == headword)
            .map(|g| g.senses.as_slice())
    }

    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.headword.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    ShowResults { query: String, view: GroupedView },
    DirectionChanged(Direction),
    ShowHelp,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchText(String),
    SetDirection(Direction),
    Help,
    Close,
}
