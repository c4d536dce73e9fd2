//! Score and interval transition after a graded answer.
//!
//! The oracle grades an answer 0-10. A grade above 6 counts as a pass:
//! - pass: score +1; once the score reaches 3 the interval starts growing
//!   by 1 per pass
//! - fail: score -1 (floor 0) and interval -1 (floor 1), so the card comes
//!   back sooner

use super::Card;
use chrono::{DateTime, Utc};

/// Oracle grade above which an answer counts as correct.
pub const PASS_THRESHOLD: u8 = 6;

/// Score at which the interval begins to grow on a pass.
const INTERVAL_GROWTH_SCORE: u32 = 3;

/// Applies a grading outcome to `card` and stamps `last_answered`.
pub fn apply_grade(card: &mut Card, oracle_score: u8, now: DateTime<Utc>) {
    if oracle_score > PASS_THRESHOLD {
        card.score += 1;
        if card.score >= INTERVAL_GROWTH_SCORE {
            card.interval += 1;
        }
    } else {
        card.score = card.score.saturating_sub(1);
        card.interval = card.interval.saturating_sub(1).max(1);
    }

    card.last_answered = now;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(interval: u32, score: u32) -> Card {
        Card {
            question: "q".to_string(),
            interval,
            score,
            last_answered: "2026-08-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_pass_above_growth_score_bumps_both() {
        let mut c = card(4, 3);
        apply_grade(&mut c, 8, Utc::now());

        assert_eq!(c.score, 4);
        assert_eq!(c.interval, 5);
    }

    #[test]
    fn test_pass_below_growth_score_leaves_interval() {
        let mut c = card(1, 0);
        apply_grade(&mut c, 9, Utc::now());

        assert_eq!(c.score, 1);
        assert_eq!(c.interval, 1);
    }

    #[test]
    fn test_pass_reaching_growth_score_starts_growing() {
        // score 2 -> 3 crosses the threshold, so the interval grows too
        let mut c = card(1, 2);
        apply_grade(&mut c, 8, Utc::now());

        assert_eq!(c.score, 3);
        assert_eq!(c.interval, 2);
    }

    #[test]
    fn test_fail_shrinks_both() {
        let mut c = card(5, 4);
        apply_grade(&mut c, 4, Utc::now());

        assert_eq!(c.score, 3);
        assert_eq!(c.interval, 4);
    }

    #[test]
    fn test_fail_clamps_at_floors() {
        let mut c = card(1, 0);
        apply_grade(&mut c, 4, Utc::now());

        assert_eq!(c.score, 0);
        assert_eq!(c.interval, 1);
    }

    #[test]
    fn test_grade_of_exactly_six_is_a_fail() {
        let mut c = card(2, 2);
        apply_grade(&mut c, 6, Utc::now());

        assert_eq!(c.score, 1);
        assert_eq!(c.interval, 1);
    }

    #[test]
    fn test_last_answered_is_stamped() {
        let now = Utc::now();
        let mut c = card(1, 0);
        apply_grade(&mut c, 10, now);

        assert_eq!(c.last_answered, now);
    }
}
