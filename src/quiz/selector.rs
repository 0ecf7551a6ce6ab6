use super::normalize::{is_blank, normalize_text};
use super::shuffle::{shuffled, Shuffle};
use super::tier::{AnswerProfile, Tier};
use crate::word::{QuestionDirection, Word};
use itertools::Itertools;
use std::collections::HashSet;

/// Number of wrong options a multiple-choice question asks for by default
pub const DEFAULT_MAX_OPTIONS: usize = 3;

/// Trait for different distractor selection strategies
pub trait DistractorSelector {
    /// Pick up to `max_options` wrong answers for `target` from `pool`.
    ///
    /// Results never repeat each other or the correct answer under
    /// [`normalize_text`], and never contain blank texts. `target` itself may
    /// be part of `pool`; it is skipped by id.
    fn select(
        &self,
        target: &Word,
        pool: &[Word],
        direction: QuestionDirection,
        max_options: usize,
        shuffle: &mut dyn Shuffle,
    ) -> Vec<String>;
}

/// Candidate answer text of some other word in the pool
#[derive(Debug, Clone)]
struct Candidate<'a> {
    text: &'a str,
    normalized: String,
    tier: Tier,
}

/// Accumulates distinct distractors until the requested count is reached
struct Picks {
    used: HashSet<String>,
    chosen: Vec<String>,
    wanted: usize,
}

impl Picks {
    fn new(correct_normalized: &str, wanted: usize) -> Self {
        let mut used = HashSet::new();
        used.insert(correct_normalized.to_string());
        Self {
            used,
            chosen: Vec::with_capacity(wanted),
            wanted,
        }
    }

    fn is_full(&self) -> bool {
        self.chosen.len() >= self.wanted
    }

    /// Scan candidates in the given order, keeping each unused one until full
    fn scan<'c, 'a: 'c>(&mut self, candidates: impl IntoIterator<Item = &'c Candidate<'a>>) {
        for candidate in candidates {
            if self.is_full() {
                return;
            }
            if self.used.insert(candidate.normalized.clone()) {
                self.chosen.push(candidate.text.to_string());
            }
        }
    }
}

/// Every other word's answer text, blanks dropped, each tagged with its tier
fn collect_candidates<'a>(
    target: &Word,
    pool: &'a [Word],
    direction: QuestionDirection,
    profile: &AnswerProfile<'_>,
) -> Vec<Candidate<'a>> {
    pool.iter()
        .filter(|word| word.id != target.id)
        .filter_map(|word| {
            let text = direction.answer(word);
            if is_blank(text) {
                return None;
            }
            Some(Candidate {
                text,
                normalized: normalize_text(text),
                tier: profile.classify(text, word.part_of_speech()),
            })
        })
        .collect()
}

/// Random selection among all other words, ignoring tiers
pub struct RandomSelector;

impl RandomSelector {
    fn fill(&self, candidates: &[Candidate<'_>], picks: &mut Picks, shuffle: &mut dyn Shuffle) {
        if picks.is_full() {
            return;
        }
        picks.scan(shuffled(shuffle, candidates));
    }
}

impl DistractorSelector for RandomSelector {
    fn select(
        &self,
        target: &Word,
        pool: &[Word],
        direction: QuestionDirection,
        max_options: usize,
        shuffle: &mut dyn Shuffle,
    ) -> Vec<String> {
        let profile = AnswerProfile::new(target, direction);
        let candidates = collect_candidates(target, pool, direction, &profile);
        let mut picks = Picks::new(&profile.normalized, max_options);

        self.fill(&candidates, &mut picks, shuffle);
        picks.chosen
    }
}

/// Tiered selection: prefer same part of speech and similar length, then
/// progressively weaker matches, then a random pass over everything
pub struct TieredSelector;

impl DistractorSelector for TieredSelector {
    fn select(
        &self,
        target: &Word,
        pool: &[Word],
        direction: QuestionDirection,
        max_options: usize,
        shuffle: &mut dyn Shuffle,
    ) -> Vec<String> {
        let profile = AnswerProfile::new(target, direction);
        let candidates = collect_candidates(target, pool, direction, &profile);
        let mut picks = Picks::new(&profile.normalized, max_options);

        for tier in Tier::ALL {
            if picks.is_full() {
                break;
            }
            let bucket: Vec<&Candidate<'_>> =
                candidates.iter().filter(|c| c.tier == tier).collect();
            picks.scan(shuffled(shuffle, &bucket).into_iter().copied());
        }

        // Fallback over all candidates with tiers merged
        RandomSelector.fill(&candidates, &mut picks, shuffle);

        log::debug!(
            "distractors for '{}' ({}): tiers {:?}, picked {}/{}",
            target.id,
            direction,
            candidates.iter().map(|c| c.tier).counts(),
            picks.chosen.len(),
            max_options
        );

        picks.chosen
    }
}

/// Pick distractors for `target` with [`TieredSelector`]
pub fn select_distractors(
    target: &Word,
    pool: &[Word],
    direction: QuestionDirection,
    max_options: usize,
    shuffle: &mut dyn Shuffle,
) -> Vec<String> {
    TieredSelector.select(target, pool, direction, max_options, shuffle)
}
