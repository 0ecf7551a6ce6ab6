use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A vocabulary entry: one source-language text paired with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}

impl Word {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            part_of_speech: None,
        }
    }

    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    /// Part of speech tag, empty when the word carries none
    pub fn part_of_speech(&self) -> &str {
        self.part_of_speech.as_deref().unwrap_or("")
    }
}

/// Which side of a word is shown and which side has to be picked
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QuestionDirection {
    #[default]
    SourceToTarget,
    TargetToSource,
}

impl QuestionDirection {
    /// The text a player has to pick for `word`
    pub fn answer<'a>(&self, word: &'a Word) -> &'a str {
        match self {
            QuestionDirection::SourceToTarget => &word.target,
            QuestionDirection::TargetToSource => &word.source,
        }
    }

    /// The text shown to the player for `word`
    pub fn prompt<'a>(&self, word: &'a Word) -> &'a str {
        match self {
            QuestionDirection::SourceToTarget => &word.source,
            QuestionDirection::TargetToSource => &word.target,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            QuestionDirection::SourceToTarget => QuestionDirection::TargetToSource,
            QuestionDirection::TargetToSource => QuestionDirection::SourceToTarget,
        }
    }
}

/// Map a free-form part of speech label from a word list to its short tag.
///
/// Word lists spell the same class many ways (`noun`, `n.`, `(N)`, `isim`), so
/// punctuation, whitespace and case are ignored. Turkish labels are accepted
/// with or without their diacritics. Unknown labels map to `None`
/// which the selector treats the same as a missing tag.
pub fn normalize_part_of_speech(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '.') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .filter(|c| *c != '\u{307}')
        .collect();

    let tag = match cleaned.as_str() {
        "n" | "noun" | "isim" => "n",
        "v" | "verb" | "fiil" => "v",
        "adj" | "adjective" | "sıfat" | "sifat" => "adj",
        "adv" | "adverb" | "zarf" => "adv",
        "prep" | "preposition" | "edat" => "prep",
        "conj" | "conjunction" | "bağlaç" | "baglac" => "conj",
        "pron" | "pronoun" | "zamir" => "pron",
        "interj" | "interjection" | "ünlem" | "unlem" => "interj",
        "det" | "determiner" | "belirteç" | "belirtec" => "det",
        "phr" | "phrase" | "deyim" => "phr",
        _ => return None,
    };
    Some(tag.to_string())
}
