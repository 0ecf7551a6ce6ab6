use super::normalize::{normalize_text, text_length};
use crate::word::{QuestionDirection, Word};

/// Maximum difference in characters for two answers to count as similar in length
pub const LENGTH_TOLERANCE: usize = 2;

/// Distractor quality buckets, best first
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Tier {
    /// Same part of speech and similar length
    SamePosAndLength,
    /// Same part of speech only
    SamePos,
    /// Similar length only
    SimilarLength,
    Other,
}

impl Tier {
    /// Every tier, in the order candidates are drawn from them
    pub const ALL: [Tier; 4] = [
        Tier::SamePosAndLength,
        Tier::SamePos,
        Tier::SimilarLength,
        Tier::Other,
    ];
}

/// What a candidate is compared against: the correct answer of the word under test
#[derive(Debug, Clone)]
pub struct AnswerProfile<'a> {
    pub answer: &'a str,
    pub normalized: String,
    pub length: usize,
    pub part_of_speech: &'a str,
}

impl<'a> AnswerProfile<'a> {
    pub fn new(target: &'a Word, direction: QuestionDirection) -> Self {
        let answer = direction.answer(target);
        Self {
            answer,
            normalized: normalize_text(answer),
            length: text_length(answer),
            part_of_speech: target.part_of_speech(),
        }
    }

    /// Place a candidate answer into exactly one tier
    pub fn classify(&self, candidate: &str, candidate_pos: &str) -> Tier {
        let same_pos = self.same_part_of_speech(candidate_pos);
        let similar_length = self.similar_length(candidate);

        match (same_pos, similar_length) {
            (true, true) => Tier::SamePosAndLength,
            (true, false) => Tier::SamePos,
            (false, true) => Tier::SimilarLength,
            (false, false) => Tier::Other,
        }
    }

    /// A missing tag on either side never matches
    fn same_part_of_speech(&self, candidate_pos: &str) -> bool {
        !self.part_of_speech.is_empty()
            && !candidate_pos.is_empty()
            && self.part_of_speech == candidate_pos
    }

    fn similar_length(&self, candidate: &str) -> bool {
        if self.answer.is_empty() || candidate.is_empty() {
            return false;
        }
        text_length(candidate).abs_diff(self.length) <= LENGTH_TOLERANCE
    }
}
