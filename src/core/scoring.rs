//! Scoring module - line-clear bonus and level progression
//!
//! Behavior notes:
//! - The bonus table value is multiplied by the row count again, so a
//!   four-row clear awards 800 * 4 = 3200.
//! - The level climbs by at most one per scoring pass, once total lines
//!   exceed level * 5.
//! - Soft-drop distance participates in the formula but no input path
//!   records it, so it contributes zero in practice.

use crate::types::{HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_CLEAR_BONUS, SOFT_DROP_POINTS};

/// Per-turn counters accumulated between locks and consumed by one
/// scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveStats {
    pub lines_cleared: u32,
    pub hard_drop_distance: u32,
    pub soft_drop_distance: u32,
}

/// Scoring pass result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub score: u32,
    pub level: u32,
    pub total_lines_cleared: u32,
}

/// Bonus for clearing `lines` rows in one turn (before the count multiplier)
pub fn line_clear_bonus(lines: u32) -> u32 {
    if lines as usize >= LINE_CLEAR_BONUS.len() {
        return 0;
    }
    LINE_CLEAR_BONUS[lines as usize]
}

/// Fold one turn's move stats into the running score, level, and line total
pub fn score_turn(score: u32, level: u32, total_lines_cleared: u32, stats: &MoveStats) -> ScoreUpdate {
    let total_lines_cleared = total_lines_cleared + stats.lines_cleared;

    let level = if total_lines_cleared > level * LINES_PER_LEVEL {
        level + 1
    } else {
        level
    };

    let bonus = line_clear_bonus(stats.lines_cleared) * stats.lines_cleared;
    let score = score
        + bonus
        + stats.soft_drop_distance * SOFT_DROP_POINTS
        + stats.hard_drop_distance * HARD_DROP_POINTS;

    ScoreUpdate {
        score,
        level,
        total_lines_cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(lines: u32) -> MoveStats {
        MoveStats {
            lines_cleared: lines,
            ..MoveStats::default()
        }
    }

    #[test]
    fn test_bonus_table() {
        assert_eq!(line_clear_bonus(0), 0);
        assert_eq!(line_clear_bonus(1), 100);
        assert_eq!(line_clear_bonus(2), 300);
        assert_eq!(line_clear_bonus(3), 500);
        assert_eq!(line_clear_bonus(4), 800);
        assert_eq!(line_clear_bonus(5), 0);
    }

    #[test]
    fn test_single_line_from_zero() {
        let update = score_turn(0, 1, 0, &stats(1));
        assert_eq!(update.score, 100);
        assert_eq!(update.total_lines_cleared, 1);
        assert_eq!(update.level, 1);
    }

    #[test]
    fn test_multi_line_bonus_is_multiplied_by_count() {
        assert_eq!(score_turn(0, 1, 0, &stats(2)).score, 600);
        assert_eq!(score_turn(0, 1, 0, &stats(3)).score, 1500);
        assert_eq!(score_turn(0, 1, 0, &stats(4)).score, 3200);
    }

    #[test]
    fn test_score_accumulates() {
        let update = score_turn(250, 1, 2, &stats(1));
        assert_eq!(update.score, 350);
        assert_eq!(update.total_lines_cleared, 3);
    }

    #[test]
    fn test_level_up_when_total_exceeds_threshold() {
        // Level 1 threshold is 5 lines: reaching 6 crosses it.
        let update = score_turn(0, 1, 5, &stats(1));
        assert_eq!(update.level, 2);
        assert_eq!(update.total_lines_cleared, 6);
    }

    #[test]
    fn test_no_level_up_at_exact_threshold() {
        let update = score_turn(0, 1, 4, &stats(1));
        assert_eq!(update.total_lines_cleared, 5);
        assert_eq!(update.level, 1);
    }

    #[test]
    fn test_level_climbs_at_most_once_per_pass() {
        // Jumping far past the threshold in one pass still gains one level.
        let update = score_turn(0, 1, 4, &stats(4));
        assert_eq!(update.total_lines_cleared, 8);
        assert_eq!(update.level, 2);
    }

    #[test]
    fn test_zero_lines_keeps_level_and_total() {
        let update = score_turn(120, 3, 14, &stats(0));
        assert_eq!(update.score, 120);
        assert_eq!(update.level, 3);
        assert_eq!(update.total_lines_cleared, 14);
    }

    #[test]
    fn test_hard_drop_distance_scores_double() {
        let s = MoveStats {
            hard_drop_distance: 10,
            ..MoveStats::default()
        };
        assert_eq!(score_turn(0, 1, 0, &s).score, 20);
    }

    #[test]
    fn test_soft_drop_distance_scores_single() {
        let s = MoveStats {
            soft_drop_distance: 7,
            ..MoveStats::default()
        };
        assert_eq!(score_turn(0, 1, 0, &s).score, 7);
    }

    #[test]
    fn test_drops_and_lines_combine() {
        let s = MoveStats {
            lines_cleared: 1,
            hard_drop_distance: 5,
            soft_drop_distance: 3,
        };
        assert_eq!(score_turn(50, 1, 0, &s).score, 50 + 100 + 10 + 3);
    }

    #[test]
    fn test_bonus_does_not_scale_with_level() {
        let at_level_1 = score_turn(0, 1, 0, &stats(1)).score;
        let at_level_7 = score_turn(0, 7, 0, &stats(1)).score;
        assert_eq!(at_level_1, at_level_7);
    }
}
