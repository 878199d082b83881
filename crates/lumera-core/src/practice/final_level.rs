use lumera_model::bloom::BloomLevel;
use lumera_model::strategy::LevelTally;
use num_traits::ToPrimitive;
use std::collections::BTreeMap;

/// Accuracy weighted mean of the levels answered, rounded down. `None` without a correct answer.
#[must_use]
pub fn weighted_level(tallies: &BTreeMap<BloomLevel, LevelTally>) -> Option<i64> {
    let (weighted_sum, total_weight) = tallies
        .iter()
        .filter(|(_, tally)| tally.attempts() > 0)
        .fold((0.0, 0.0), |(weighted_sum, total_weight), (level, tally)| {
            let attempts = f64::from(tally.attempts());
            let weight = attempts * (f64::from(tally.correct) / attempts);
            (
                weighted_sum + weight * f64::from(level.number()),
                total_weight + weight,
            )
        });
    if total_weight > 0.0 {
        (weighted_sum / total_weight).floor().to_i64()
    } else {
        None
    }
}

/// Final level of a practice session.
///
/// Starts from [`weighted_level`], or `initial` without weight, then moves one level up at 80 %
/// overall accuracy or one down below 50 %.
#[must_use]
pub fn final_level(tallies: &BTreeMap<BloomLevel, LevelTally>, initial: BloomLevel, accuracy: f64) -> BloomLevel {
    let mut level = weighted_level(tallies).unwrap_or_else(|| i64::from(initial.number()));
    if accuracy >= 80.0 && level < 6 {
        level += 1;
    } else if accuracy < 50.0 && level > 1 {
        level -= 1;
    }
    BloomLevel::clamped(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies(entries: &[(BloomLevel, u32, u32)]) -> BTreeMap<BloomLevel, LevelTally> {
        entries
            .iter()
            .map(|(level, correct, incorrect)| {
                (
                    *level,
                    LevelTally {
                        correct: *correct,
                        incorrect: *incorrect,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_weighted_level() {
        let tallies = tallies(&[(BloomLevel::Apply, 4, 1), (BloomLevel::Analyze, 2, 2)]);
        assert_eq!(weighted_level(&tallies), Some(3));
        // 6 of 9 correct is neither above 80 % nor below 50 %
        assert_eq!(final_level(&tallies, BloomLevel::Apply, 6.0 / 9.0 * 100.0), BloomLevel::Apply);
    }

    #[test]
    fn test_accuracy_adjustment() {
        let strong = tallies(&[(BloomLevel::Analyze, 5, 0)]);
        assert_eq!(final_level(&strong, BloomLevel::Understand, 100.0), BloomLevel::Evaluate);

        let top = tallies(&[(BloomLevel::Create, 5, 0)]);
        assert_eq!(final_level(&top, BloomLevel::Create, 100.0), BloomLevel::Create);

        let weak = tallies(&[(BloomLevel::Understand, 1, 4)]);
        assert_eq!(final_level(&weak, BloomLevel::Apply, 20.0), BloomLevel::Remember);
        let bottom = tallies(&[(BloomLevel::Remember, 1, 4)]);
        assert_eq!(final_level(&bottom, BloomLevel::Remember, 20.0), BloomLevel::Remember);
    }

    #[test]
    fn test_no_correct_answers_fall_back_to_initial() {
        let none = tallies(&[(BloomLevel::Analyze, 0, 3)]);
        assert_eq!(weighted_level(&none), None);
        assert_eq!(final_level(&none, BloomLevel::Analyze, 0.0), BloomLevel::Apply);
        assert_eq!(final_level(&BTreeMap::new(), BloomLevel::Apply, 0.0), BloomLevel::Understand);
    }
}
