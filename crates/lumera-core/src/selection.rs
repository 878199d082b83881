use lumera_entity::objective_level::Model as ObjectiveLevel;
use lumera_model::bloom::BloomLevel;
use rand::{rng, seq::IndexedRandom};

/// Uniformly random pick.
pub(crate) fn pick<T: Clone>(candidates: &[T]) -> Option<T> {
    candidates.choose(&mut rng()).cloned()
}

/// The level record closest to `target`, an exact match if there is one. Ties go to the lowest id.
pub(crate) fn nearest_level(levels: Vec<ObjectiveLevel>, target: BloomLevel) -> Option<ObjectiveLevel> {
    let target = i32::from(target.number());
    levels
        .into_iter()
        .min_by_key(|level| ((i32::from(level.bloom_level) - target).abs(), level.id))
}

/// Distinct objective ids in first seen order, at most `limit`.
pub(crate) fn distinct_objectives(levels: &[ObjectiveLevel], limit: usize) -> Vec<i32> {
    let mut objectives = Vec::with_capacity(limit);
    for level in levels {
        if objectives.len() >= limit {
            break;
        }
        if !objectives.contains(&level.objective_id) {
            objectives.push(level.objective_id);
        }
    }
    objectives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: i32, objective_id: i32, bloom_level: i16) -> ObjectiveLevel {
        ObjectiveLevel {
            id,
            objective_id,
            bloom_level,
            specific_objective: String::new(),
        }
    }

    #[test]
    fn test_nearest_level() {
        let levels = vec![level(10, 1, 1), level(11, 1, 4), level(12, 1, 2)];
        assert_eq!(nearest_level(levels.clone(), BloomLevel::Analyze).map(|l| l.id), Some(11));
        assert_eq!(nearest_level(levels.clone(), BloomLevel::Create).map(|l| l.id), Some(11));
        // 2 and 4 are equally close to 3
        assert_eq!(nearest_level(levels, BloomLevel::Apply).map(|l| l.id), Some(11));
        assert!(nearest_level(vec![], BloomLevel::Apply).is_none());
    }

    #[test]
    fn test_distinct_objectives() {
        let levels = vec![level(1, 5, 1), level(2, 5, 2), level(3, 7, 1), level(4, 2, 1), level(5, 9, 1)];
        assert_eq!(distinct_objectives(&levels, 3), vec![5, 7, 2]);
        assert_eq!(distinct_objectives(&levels, 10), vec![5, 7, 2, 9]);
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick::<i32>(&[]), None);
        assert_eq!(pick(&[4]), Some(4));
    }
}
