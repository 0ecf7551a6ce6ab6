pub mod normalize;
pub mod question;
pub mod selector;
pub mod shuffle;
pub mod tier;

pub use normalize::normalize_text;
pub use question::MultipleChoiceQuestion;
pub use selector::{
    select_distractors, DistractorSelector, RandomSelector, TieredSelector, DEFAULT_MAX_OPTIONS,
};
pub use shuffle::{IdentityShuffle, RandomShuffle, Shuffle};
pub use tier::{AnswerProfile, Tier};
