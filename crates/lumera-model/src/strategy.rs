//! Typed adaptive strategies persisted with each session.
//!
//! Both strategies are plain values: the engines load them, call [`DiagnosticStrategy::record`] or
//! [`PracticeStrategy::record`] and store them back. Nothing here touches storage.

use crate::bloom::BloomLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AnswerOutcome {
    #[serde(rename = "C")]
    Correct,
    #[serde(rename = "I")]
    Incorrect,
}

impl From<bool> for AnswerOutcome {
    fn from(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticStrategy {
    pub current_level: BloomLevel,
    /// Objectives to probe. Fixed by the first next-question call and never grows afterwards.
    #[serde(default)]
    pub objectives: Option<Vec<i32>>,
    #[serde(default)]
    pub evaluated: Vec<i32>,
    #[serde(default)]
    pub correct_streak: u32,
    #[serde(default)]
    pub incorrect_streak: u32,
    #[serde(default)]
    pub pattern: Vec<AnswerOutcome>,
}

impl DiagnosticStrategy {
    #[must_use]
    pub fn new(initial_level: BloomLevel) -> Self {
        Self {
            current_level: initial_level,
            objectives: None,
            evaluated: Vec::new(),
            correct_streak: 0,
            incorrect_streak: 0,
            pattern: Vec::new(),
        }
    }

    /// Sets the objectives to probe unless they are already fixed.
    pub fn fix_objectives(&mut self, objectives: Vec<i32>) -> &[i32] {
        self.objectives.get_or_insert(objectives)
    }

    #[must_use]
    pub fn objective_count(&self) -> usize {
        self.objectives.as_ref().map_or(0, Vec::len)
    }

    /// First objective that has not been asked about yet.
    #[must_use]
    pub fn next_objective(&self) -> Option<i32> {
        self.objectives
            .as_deref()?
            .iter()
            .copied()
            .find(|objective| !self.evaluated.contains(objective))
    }

    pub fn mark_evaluated(&mut self, objective_id: i32) {
        if !self.evaluated.contains(&objective_id) {
            self.evaluated.push(objective_id);
        }
    }

    /// Moves one level up on a correct answer and one level down otherwise.
    pub fn record(&mut self, correct: bool) -> BloomLevel {
        if correct {
            self.correct_streak += 1;
            self.incorrect_streak = 0;
            self.current_level = self.current_level.raise();
        } else {
            self.incorrect_streak += 1;
            self.correct_streak = 0;
            self.current_level = self.current_level.lower();
        }
        self.pattern.push(correct.into());
        self.current_level
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LevelTally {
    pub correct: u32,
    pub incorrect: u32,
}

impl LevelTally {
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.correct + self.incorrect
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeStrategy {
    pub current_level: BloomLevel,
    #[serde(default)]
    pub correct_streak: u32,
    #[serde(default)]
    pub incorrect_streak: u32,
    /// Keyed by the level of the question actually asked.
    #[serde(default)]
    pub tallies: BTreeMap<BloomLevel, LevelTally>,
    #[serde(default)]
    pub pattern: Vec<AnswerOutcome>,
}

impl PracticeStrategy {
    #[must_use]
    pub fn new(initial_level: BloomLevel) -> Self {
        Self {
            current_level: initial_level,
            correct_streak: 0,
            incorrect_streak: 0,
            tallies: BTreeMap::new(),
            pattern: Vec::new(),
        }
    }

    /// Records one answer and adapts the level once a streak reaches `threshold`.
    ///
    /// A streak is only reset when it actually moved the level. At the top or bottom level it keeps
    /// counting.
    pub fn record(&mut self, question_level: BloomLevel, correct: bool, threshold: u32) -> BloomLevel {
        let tally = self.tallies.entry(question_level).or_default();
        if correct {
            tally.correct += 1;
            self.correct_streak += 1;
            self.incorrect_streak = 0;
            if self.correct_streak >= threshold && self.current_level < BloomLevel::HIGHEST {
                self.current_level = self.current_level.raise();
                self.correct_streak = 0;
            }
        } else {
            tally.incorrect += 1;
            self.incorrect_streak += 1;
            self.correct_streak = 0;
            if self.incorrect_streak >= threshold && self.current_level > BloomLevel::LOWEST {
                self.current_level = self.current_level.lower();
                self.incorrect_streak = 0;
            }
        }
        self.pattern.push(correct.into());
        self.current_level
    }

    #[must_use]
    pub fn correct_by_level(&self) -> BTreeMap<BloomLevel, u32> {
        self.tallies.iter().map(|(level, tally)| (*level, tally.correct)).collect()
    }

    #[must_use]
    pub fn incorrect_by_level(&self) -> BTreeMap<BloomLevel, u32> {
        self.tallies.iter().map(|(level, tally)| (*level, tally.incorrect)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_level_stays_in_range() {
        let mut strategy = DiagnosticStrategy::new(BloomLevel::Understand);
        for _ in 0..20 {
            strategy.record(true);
        }
        assert_eq!(strategy.current_level, BloomLevel::Create);
        for _ in 0..20 {
            strategy.record(false);
        }
        assert_eq!(strategy.current_level, BloomLevel::Remember);
        assert_eq!(strategy.incorrect_streak, 20);
        assert_eq!(strategy.pattern.len(), 40);

        // alternating answers never escape the range either
        for i in 0..50 {
            let level = strategy.record(i % 3 != 0);
            assert!((BloomLevel::LOWEST..=BloomLevel::HIGHEST).contains(&level));
        }
    }

    #[test]
    fn test_objectives_fixed_once() {
        let mut strategy = DiagnosticStrategy::new(BloomLevel::Understand);
        assert_eq!(strategy.next_objective(), None);
        strategy.fix_objectives(vec![4, 7]);
        strategy.fix_objectives(vec![1, 2, 3]);
        assert_eq!(strategy.objectives.as_deref(), Some(&[4, 7][..]));

        assert_eq!(strategy.next_objective(), Some(4));
        strategy.mark_evaluated(4);
        strategy.mark_evaluated(4);
        assert_eq!(strategy.evaluated, vec![4]);
        assert_eq!(strategy.next_objective(), Some(7));
        strategy.mark_evaluated(7);
        assert_eq!(strategy.next_objective(), None);
    }

    #[test]
    fn test_practice_level_moves_after_two_in_a_row() {
        let mut strategy = PracticeStrategy::new(BloomLevel::Apply);

        assert_eq!(strategy.record(BloomLevel::Apply, true, 2), BloomLevel::Apply);
        assert_eq!(strategy.record(BloomLevel::Apply, false, 2), BloomLevel::Apply);
        assert_eq!(strategy.correct_streak, 0);
        assert_eq!(strategy.record(BloomLevel::Apply, true, 2), BloomLevel::Apply);
        assert_eq!(strategy.record(BloomLevel::Apply, true, 2), BloomLevel::Analyze);
        assert_eq!((strategy.correct_streak, strategy.incorrect_streak), (0, 0));

        assert_eq!(strategy.record(BloomLevel::Analyze, false, 2), BloomLevel::Analyze);
        assert_eq!(strategy.record(BloomLevel::Analyze, false, 2), BloomLevel::Apply);
        assert_eq!((strategy.correct_streak, strategy.incorrect_streak), (0, 0));

        assert_eq!(
            strategy.tallies.get(&BloomLevel::Apply),
            Some(&LevelTally { correct: 3, incorrect: 1 })
        );
        assert_eq!(
            strategy.tallies.get(&BloomLevel::Analyze),
            Some(&LevelTally { correct: 0, incorrect: 2 })
        );
    }

    #[test]
    fn test_practice_streak_kept_at_cap() {
        let mut strategy = PracticeStrategy::new(BloomLevel::Evaluate);
        strategy.record(BloomLevel::Evaluate, true, 2);
        assert_eq!(strategy.record(BloomLevel::Evaluate, true, 2), BloomLevel::Create);
        strategy.record(BloomLevel::Create, true, 2);
        assert_eq!(strategy.record(BloomLevel::Create, true, 2), BloomLevel::Create);
        assert_eq!(strategy.correct_streak, 2);
    }

    #[test]
    fn test_practice_strategy_json() {
        let mut strategy = PracticeStrategy::new(BloomLevel::Understand);
        strategy.record(BloomLevel::Understand, true, 2);
        strategy.record(BloomLevel::Remember, false, 2);

        let json = serde_json::to_value(&strategy).unwrap();
        assert_eq!(json["current_level"], 2);
        assert_eq!(json["pattern"], serde_json::json!(["C", "I"]));
        assert_eq!(json["tallies"]["1"]["incorrect"], 1);

        let parsed: PracticeStrategy = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, strategy);
    }
}
