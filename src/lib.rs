// Library surface for the binary and for integration tests.
pub mod config;
pub mod pool;
pub mod quiz;
pub mod quiz_generator;
pub mod word;

pub use pool::{PoolError, WordPool};
pub use quiz::{
    select_distractors, DistractorSelector, IdentityShuffle, MultipleChoiceQuestion,
    RandomSelector, RandomShuffle, Shuffle, Tier, TieredSelector, DEFAULT_MAX_OPTIONS,
};
pub use quiz_generator::{QuizGenConfig, QuizGenerator};
pub use word::{QuestionDirection, Word};
