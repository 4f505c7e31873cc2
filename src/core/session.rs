use std::collections::HashMap;

use rand::Rng;

use super::{
    catalog::KanaSet,
    romaji::{
        build_romaji_map,
        RomajiMap,
    },
    shuffle::shuffled,
};

/// Outcome of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Unanswered,
    Correct,
    Incorrect,
}

/// Per-character progress within one session.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttemptRecord {
    pub attempts: u32,
    pub solved: bool,
}

/// One round of the drill: a shuffled ordering of the active set plus the
/// scorekeeping for it.
///
/// Sessions are created whole and never partially initialized. `reset` and
/// `switch_set` rebuild everything, which is what unlocks and clears every
/// card in the UI.
pub struct DrillSession {
    set: KanaSet,
    order: Vec<char>,
    romaji: RomajiMap,
    records: HashMap<char, AttemptRecord>,
    correct_count: usize,
    won: bool,
}

impl DrillSession {
    pub fn new(set: KanaSet, rng: &mut impl Rng) -> Self {
        let definition = set.definition();
        let order = shuffled(&definition.flat_symbols(), rng);
        let records = order.iter().map(|&symbol| (symbol, AttemptRecord::default())).collect();

        Self {
            set,
            order,
            romaji: build_romaji_map(definition),
            records,
            correct_count: 0,
            won: false,
        }
    }

    /// Reshuffles the current set and discards all progress.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Self::new(self.set, rng);
    }

    /// Starts over with a different set. Progress does not carry across.
    pub fn switch_set(&mut self, set: KanaSet, rng: &mut impl Rng) {
        *self = Self::new(set, rng);
    }

    /// Normalization applied to every submission before comparison.
    pub fn normalize(submitted: &str) -> String {
        submitted.trim().to_ascii_lowercase()
    }

    /// Scores one submission for one character.
    ///
    /// Whitespace-only submissions and symbols outside the session change
    /// nothing and return `None`. Otherwise the attempt is counted, and the
    /// first correct answer for a character bumps the score exactly once.
    /// The win flag is checked against the score as it stands after that
    /// bump, so the final card wins the round immediately.
    pub fn record_attempt(&mut self, symbol: char, submitted: &str) -> Option<Verdict> {
        let normalized = Self::normalize(submitted);
        if normalized.is_empty() {
            return None;
        }
        let expected = *self.romaji.get(&symbol)?;
        let record = self.records.get_mut(&symbol)?;

        record.attempts += 1;

        if normalized != expected {
            return Some(Verdict::Incorrect);
        }

        if !record.solved {
            record.solved = true;
            self.correct_count += 1;
            if self.correct_count == self.order.len() {
                self.won = true;
            }
        }
        Some(Verdict::Correct)
    }

    pub fn set(&self) -> KanaSet {
        self.set
    }

    /// The shuffled ordering the cards render in.
    pub fn order(&self) -> &[char] {
        &self.order
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn expected_romaji(&self, symbol: char) -> Option<&'static str> {
        self.romaji.get(&symbol).copied()
    }

    pub fn record(&self, symbol: char) -> Option<&AttemptRecord> {
        self.records.get(&symbol)
    }

    /// Submissions across all characters, for the end-of-round stats.
    pub fn total_attempts(&self) -> u32 {
        self.records.values().map(|record| record.attempts).sum()
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn session(set: KanaSet) -> DrillSession {
        DrillSession::new(set, &mut StdRng::seed_from_u64(99))
    }

    /// Answers every character in order, returning the verdict of the last.
    fn solve_all(session: &mut DrillSession) -> Option<Verdict> {
        let order = session.order().to_vec();
        let mut last = None;
        for symbol in order {
            let expected = session.expected_romaji(symbol).unwrap();
            last = session.record_attempt(symbol, expected);
        }
        last
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = session(KanaSet::Hiragana);
        assert_eq!(session.total(), 46);
        assert_eq!(session.correct_count(), 0);
        assert!(!session.won());
        assert_eq!(session.total_attempts(), 0);
        for &symbol in session.order() {
            let record = session.record(symbol).unwrap();
            assert_eq!(record.attempts, 0);
            assert!(!record.solved);
        }
    }

    #[test]
    fn test_correct_answer_scores_once() {
        let mut session = session(KanaSet::Hiragana);
        assert_eq!(session.record_attempt('あ', "a"), Some(Verdict::Correct));
        assert_eq!(session.correct_count(), 1);
        assert!(session.record('あ').unwrap().solved);

        // Answering again stays correct but the score is untouched.
        assert_eq!(session.record_attempt('あ', "a"), Some(Verdict::Correct));
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn test_normalization_trims_and_lowercases() {
        let mut session = session(KanaSet::Hiragana);
        assert_eq!(session.record_attempt('あ', " A "), Some(Verdict::Correct));
        assert_eq!(session.record_attempt('い', "\tI\n"), Some(Verdict::Correct));
        assert_eq!(session.correct_count(), 2);
    }

    #[test]
    fn test_blank_submission_changes_nothing() {
        let mut session = session(KanaSet::Hiragana);
        assert_eq!(session.record_attempt('あ', ""), None);
        assert_eq!(session.record_attempt('あ', "   "), None);
        assert_eq!(session.record('あ').unwrap().attempts, 0);
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn test_unknown_symbol_changes_nothing() {
        let mut session = session(KanaSet::Hiragana);
        assert_eq!(session.record_attempt('ア', "a"), None);
        assert_eq!(session.total_attempts(), 0);
    }

    #[test]
    fn test_incorrect_then_correct() {
        let mut session = session(KanaSet::Hiragana);
        assert_eq!(session.record_attempt('か', "ga"), Some(Verdict::Incorrect));
        assert_eq!(session.correct_count(), 0);
        assert!(!session.record('か').unwrap().solved);

        assert_eq!(session.record_attempt('か', "ka"), Some(Verdict::Correct));
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.record('か').unwrap().attempts, 2);
    }

    #[test]
    fn test_win_fires_on_final_correct_card() {
        let mut session = session(KanaSet::VoicedHiragana);
        let order = session.order().to_vec();

        // Everything but the last card.
        for &symbol in &order[..order.len() - 1] {
            let expected = session.expected_romaji(symbol).unwrap();
            session.record_attempt(symbol, expected);
            assert!(!session.won());
        }
        assert_eq!(session.correct_count(), order.len() - 1);

        // The very submission that completes the set wins the round. No
        // extra submission is needed afterwards.
        let last = *order.last().unwrap();
        let expected = session.expected_romaji(last).unwrap();
        assert_eq!(session.record_attempt(last, expected), Some(Verdict::Correct));
        assert!(session.won());
        assert_eq!(session.correct_count(), order.len());
    }

    #[test]
    fn test_wrong_final_answer_does_not_win() {
        let mut session = session(KanaSet::VoicedHiragana);
        let order = session.order().to_vec();
        for &symbol in &order[..order.len() - 1] {
            let expected = session.expected_romaji(symbol).unwrap();
            session.record_attempt(symbol, expected);
        }

        // One card left: a wrong answer counts an attempt but wins nothing.
        let last = *order.last().unwrap();
        assert_eq!(session.record_attempt(last, "xq"), Some(Verdict::Incorrect));
        assert!(!session.won());
        assert_eq!(session.correct_count(), order.len() - 1);
    }

    #[test]
    fn test_win_survives_further_calls() {
        let mut session = session(KanaSet::VoicedKatakana);
        solve_all(&mut session);
        assert!(session.won());

        assert_eq!(session.record_attempt('ガ', "ga"), Some(Verdict::Correct));
        assert!(session.won());
        assert_eq!(session.correct_count(), session.total());
    }

    #[test]
    fn test_reset_reshuffles_and_clears() {
        // Seeds chosen so the reset draw produces a different ordering.
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = DrillSession::new(KanaSet::Hiragana, &mut rng);
        let first_order = session.order().to_vec();

        session.record_attempt('あ', "a");
        session.record_attempt('か', "no");
        assert_eq!(session.correct_count(), 1);

        session.reset(&mut rng);
        assert_eq!(session.correct_count(), 0);
        assert!(!session.won());
        assert_eq!(session.total_attempts(), 0);
        assert_eq!(session.set(), KanaSet::Hiragana);
        assert_ne!(session.order(), first_order.as_slice());
    }

    #[test]
    fn test_switch_set_discards_progress() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = DrillSession::new(KanaSet::Hiragana, &mut rng);
        session.record_attempt('あ', "a");

        session.switch_set(KanaSet::Katakana, &mut rng);
        assert_eq!(session.set(), KanaSet::Katakana);
        assert_eq!(session.total(), 46);
        assert_eq!(session.correct_count(), 0);
        // The old set's symbols are gone.
        assert_eq!(session.record_attempt('あ', "a"), None);
        assert_eq!(session.record_attempt('ア', "a"), Some(Verdict::Correct));
    }

    #[test]
    fn test_score_is_monotonic_over_a_full_round() {
        let mut session = session(KanaSet::Katakana);
        let order = session.order().to_vec();
        let mut previous = 0;
        for &symbol in &order {
            // A wrong answer first, then the right one.
            session.record_attempt(symbol, "xx");
            let expected = session.expected_romaji(symbol).unwrap();
            session.record_attempt(symbol, expected);
            let current = session.correct_count();
            assert!(current >= previous);
            previous = current;
        }
        assert!(session.won());
        assert_eq!(session.total_attempts(), 2 * order.len() as u32);
    }
}
