use crate::{
    quiz::{
        shuffle::shuffled, DistractorSelector, MultipleChoiceQuestion, RandomSelector, Shuffle,
        TieredSelector, DEFAULT_MAX_OPTIONS,
    },
    word::{QuestionDirection, Word},
};

/// Configuration for quiz generation
#[derive(Debug, Clone, PartialEq)]
pub struct QuizGenConfig {
    /// Number of questions; `None` asks about every word in the pool
    pub question_count: Option<usize>,
    pub max_options: usize,
    pub direction: QuestionDirection,
    pub random_distractors: bool,
}

impl Default for QuizGenConfig {
    fn default() -> Self {
        Self {
            question_count: None,
            max_options: DEFAULT_MAX_OPTIONS,
            direction: QuestionDirection::SourceToTarget,
            random_distractors: false,
        }
    }
}

/// Builds batches of multiple-choice questions from a word pool
pub struct QuizGenerator {
    config: QuizGenConfig,
}

impl QuizGenerator {
    pub fn new(config: QuizGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuizGenConfig {
        &self.config
    }

    /// Pick words in shuffled order and build one question for each.
    ///
    /// Every question draws its distractors from the whole pool, not only from
    /// the words picked for the quiz. Questions with fewer distractors than
    /// requested are kept and reported with a warning.
    pub fn generate(&self, pool: &[Word], shuffle: &mut dyn Shuffle) -> Vec<MultipleChoiceQuestion> {
        let count = self.config.question_count.unwrap_or(pool.len());
        let chosen: Vec<&Word> = shuffled(shuffle, pool).into_iter().take(count).collect();

        let mut questions = Vec::with_capacity(chosen.len());
        for word in chosen {
            questions.push(self.question_for(word, pool, shuffle));
        }
        questions
    }

    /// Build a single question for `word`
    pub fn question_for(
        &self,
        word: &Word,
        pool: &[Word],
        shuffle: &mut dyn Shuffle,
    ) -> MultipleChoiceQuestion {
        let question = MultipleChoiceQuestion::build(
            word,
            pool,
            self.config.direction,
            self.config.max_options,
            self.selector(),
            shuffle,
        );

        if question.is_short(self.config.max_options) {
            log::warn!(
                "word '{}' only has {} of {} distractors",
                word.id,
                question.distractor_count(),
                self.config.max_options
            );
        }
        question
    }

    fn selector(&self) -> &'static dyn DistractorSelector {
        if self.config.random_distractors {
            &RandomSelector
        } else {
            &TieredSelector
        }
    }
}
