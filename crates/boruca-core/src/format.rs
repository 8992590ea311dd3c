use boruca_types::{DictionaryEntry, GroupedView, SenseView, WordGroup};

/// Group matches by raw headword, keeping first-seen group order and match order within a group
pub fn format(matches: &[&DictionaryEntry]) -> GroupedView {
    let mut groups: Vec<WordGroup> = Vec::new();

    for entry in matches {
        let position = match groups.iter().position(|g| g.headword == entry.boruca_word) {
            Some(pos) => pos,
            None => {
                groups.push(WordGroup {
                    headword: entry.boruca_word.clone(),
                    senses: Vec::new(),
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[position];
        group.senses.push(SenseView {
            index: group.senses.len() + 1,
            part_of_speech: entry.part_of_speech.clone(),
            translation: entry.spanish_translation.clone(),
            example_boruca: entry.example_sentence_boruca.clone(),
            example_spanish: entry.example_sentence_spanish.clone(),
            comment: entry.comment_text().map(str::to_string),
        });
    }

    GroupedView { groups }
}

/// First character upper-cased, the rest lower-cased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
