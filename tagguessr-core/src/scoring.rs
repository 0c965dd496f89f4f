use tagguessr_types::{ScoredTag, TagPopularity};

/// Popularity used when a lookup fails or the service knows nothing about a tag
pub const FALLBACK_COUNT: u64 = 1;

/// Distributes a fixed pool of points across tags, inversely to popularity
pub struct RarityScorer;

impl RarityScorer {
    /// Weight of a tag with the given popularity. Counts below 1 are treated as 1.
    pub fn weight(count: u64) -> f64 {
        1.0 / count.max(FALLBACK_COUNT) as f64
    }

    /// Score every tag, preserving input order.
    ///
    /// Each share is rounded on its own (half up), so the total may drift from
    /// `total_points` by at most half a point per tag.
    pub fn score(popularities: &[TagPopularity], total_points: i32) -> Vec<ScoredTag> {
        let weights: Vec<f64> = popularities
            .iter()
            .map(|p| Self::weight(p.count))
            .collect();
        let total_weight: f64 = weights.iter().sum();

        popularities
            .iter()
            .zip(&weights)
            .map(|(popularity, &weight)| ScoredTag {
                tag: popularity.tag.clone(),
                points: Self::points_for(weight, total_weight, total_points),
            })
            .collect()
    }

    fn points_for(weight: f64, total_weight: f64, total_points: i32) -> i32 {
        if total_weight <= 0.0 {
            return 0;
        }
        let share = weight / total_weight * total_points as f64;
        (share + 0.5).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popularity(tag: &str, count: u64) -> TagPopularity {
        TagPopularity {
            tag: tag.to_string(),
            count,
        }
    }

    fn sum(scored: &[ScoredTag]) -> i32 {
        scored.iter().map(|t| t.points).sum()
    }

    #[test]
    fn test_single_tag_takes_everything() {
        let scored = RarityScorer::score(&[popularity("solo", 5_000_000)], 1000);
        assert_eq!(scored, vec![ScoredTag { tag: "solo".to_string(), points: 1000 }]);
    }

    #[test]
    fn test_inverse_weighting() {
        let scored = RarityScorer::score(
            &[popularity("common", 300), popularity("rare", 100)],
            1000,
        );

        assert_eq!(scored[0].tag, "common");
        assert_eq!(scored[0].points, 250);
        assert_eq!(scored[1].tag, "rare");
        assert_eq!(scored[1].points, 750);
    }

    #[test]
    fn test_rarer_tags_never_score_less() {
        let counts = [1, 2, 7, 7, 40, 1_000, 123_456, 4_000_000];
        let popularities: Vec<_> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| popularity(&format!("tag_{}", i), c))
            .collect();
        let scored = RarityScorer::score(&popularities, 1000);

        for (i, a) in popularities.iter().enumerate() {
            for (j, b) in popularities.iter().enumerate() {
                if a.count < b.count {
                    assert!(
                        scored[i].points >= scored[j].points,
                        "{} (count {}) scored below {} (count {})",
                        a.tag, a.count, b.tag, b.count
                    );
                }
            }
        }
    }

    #[test]
    fn test_sum_within_rounding_tolerance() {
        let cases: Vec<Vec<u64>> = vec![
            vec![1, 1, 1],
            vec![3, 7, 11, 13, 17],
            vec![10, 10_000, 2_500_000, 1, 42, 99, 640],
            (1..=40).collect(),
        ];

        for counts in cases {
            let popularities: Vec<_> = counts
                .iter()
                .enumerate()
                .map(|(i, &c)| popularity(&format!("t{}", i), c))
                .collect();
            let scored = RarityScorer::score(&popularities, 1000);
            let total = sum(&scored);
            let tolerance = scored.len() as f64 / 2.0;

            assert!(scored.iter().all(|t| t.points >= 0));
            assert!(
                ((total - 1000).abs() as f64) <= tolerance,
                "sum {} outside tolerance {} for {:?}",
                total, tolerance, counts
            );
        }
    }

    #[test]
    fn test_ties_round_half_up() {
        // 1000 / 16 = 62.5 per tag
        let popularities: Vec<_> = (0..16).map(|i| popularity(&format!("t{}", i), 1)).collect();
        let scored = RarityScorer::score(&popularities, 1000);

        assert!(scored.iter().all(|t| t.points == 63));
        assert_eq!(sum(&scored), 1008);
    }

    #[test]
    fn test_equal_counts_split_evenly() {
        let scored = RarityScorer::score(
            &[popularity("a", 9), popularity("b", 9), popularity("c", 9)],
            1000,
        );
        assert!(scored.iter().all(|t| t.points == 333));
    }

    #[test]
    fn test_zero_count_treated_as_fallback() {
        assert_eq!(RarityScorer::weight(0), RarityScorer::weight(FALLBACK_COUNT));

        let scored = RarityScorer::score(&[popularity("a", 0), popularity("b", 1)], 1000);
        assert_eq!(scored[0].points, 500);
        assert_eq!(scored[1].points, 500);
    }

    #[test]
    fn test_empty_input() {
        assert!(RarityScorer::score(&[], 1000).is_empty());
    }
}
