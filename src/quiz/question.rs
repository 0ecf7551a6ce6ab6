use super::normalize::normalize_text;
use super::selector::DistractorSelector;
use super::shuffle::{shuffled, Shuffle};
use crate::word::{QuestionDirection, Word};
use serde::Serialize;

/// A multiple-choice question: one correct option mixed in with distractors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultipleChoiceQuestion {
    pub word_id: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    pub direction: QuestionDirection,
    /// Presentation order, correct answer included
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl MultipleChoiceQuestion {
    /// Build a question for `target` with distractors drawn from `pool`.
    ///
    /// The presentation order is shuffled separately from distractor ranking,
    /// so the best distractor is not always in the same slot.
    pub fn build(
        target: &Word,
        pool: &[Word],
        direction: QuestionDirection,
        max_options: usize,
        selector: &dyn DistractorSelector,
        shuffle: &mut dyn Shuffle,
    ) -> Self {
        let correct_answer = direction.answer(target).to_string();
        let distractors = selector.select(target, pool, direction, max_options, shuffle);

        let mut all = Vec::with_capacity(distractors.len() + 1);
        all.push(correct_answer.clone());
        all.extend(distractors);
        let options = shuffled(shuffle, &all).into_iter().cloned().collect();

        Self {
            word_id: target.id.clone(),
            prompt: direction.prompt(target).to_string(),
            part_of_speech: target.part_of_speech.clone(),
            direction,
            options,
            correct_answer,
        }
    }

    /// Position of the correct answer within `options`
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        normalize_text(choice) == normalize_text(&self.correct_answer)
    }

    pub fn distractor_count(&self) -> usize {
        self.options.len().saturating_sub(1)
    }

    /// True when the pool could not supply `max_options` distractors
    pub fn is_short(&self, max_options: usize) -> bool {
        self.distractor_count() < max_options
    }
}
