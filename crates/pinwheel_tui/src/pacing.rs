//! AI "thinking" schedule.
//!
//! While the scripted opponent thinks, a focus highlight hops between
//! random empty cells. The move lands when the difficulty's thinking
//! delay expires, which also cuts the sweep short.

use pinwheel_tictactoe::{Board, Difficulty, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Number of focus hops in one sweep.
pub const SCAN_STEPS: usize = 6;

/// How long each focus hop lasts, in ms.
pub const SCAN_STEP_MS: RangeInclusive<u64> = 220..=420;

/// When the AI moves and what it highlights until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkingPlan {
    started_at: Instant,
    ready_at: Instant,
    sweep: Vec<(Instant, Position)>,
    sweep_end: Instant,
}

impl ThinkingPlan {
    /// Draws a thinking delay and a focus sweep over `board`'s empty cells.
    #[instrument(skip(board, rng))]
    pub fn new<R: Rng + ?Sized>(
        difficulty: Difficulty,
        board: &Board,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let ready_at = now + difficulty.thinking_delay(rng);
        let empties: Vec<Position> = board.empty_positions().collect();

        let mut sweep = Vec::with_capacity(SCAN_STEPS);
        let mut at = now;
        if !empties.is_empty() {
            for _ in 0..SCAN_STEPS {
                if let Some(&pos) = empties.choose(rng) {
                    sweep.push((at, pos));
                }
                at += Duration::from_millis(rng.gen_range(SCAN_STEP_MS));
            }
        }

        debug!(
            delay_ms = ready_at.duration_since(now).as_millis() as u64,
            "AI thinking"
        );
        Self {
            started_at: now,
            ready_at,
            sweep,
            sweep_end: at,
        }
    }

    /// Moves immediately, without a sweep.
    pub fn immediate(now: Instant) -> Self {
        Self {
            started_at: now,
            ready_at: now,
            sweep: Vec::new(),
            sweep_end: now,
        }
    }

    /// True once the AI should move.
    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.ready_at
    }

    /// When the AI started thinking.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// When the AI will move.
    pub fn ready_at(&self) -> Instant {
        self.ready_at
    }

    /// Cell highlighted at `now`, if the sweep is still running.
    pub fn focus(&self, now: Instant) -> Option<Position> {
        if self.is_ready(now) || now >= self.sweep_end {
            return None;
        }
        self.sweep
            .iter()
            .take_while(|(start, _)| *start <= now)
            .last()
            .map(|(_, pos)| *pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ready_within_difficulty_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let now = Instant::now();
        let plan = ThinkingPlan::new(Difficulty::Medium, &Board::new(), now, &mut rng);
        assert!(!plan.is_ready(now + Duration::from_millis(699)));
        assert!(plan.is_ready(now + Duration::from_millis(1200)));
    }

    #[test]
    fn test_focus_only_on_empty_cells() {
        let board: Board = "XO_|_X_|O__".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let now = Instant::now();
        let plan = ThinkingPlan::new(Difficulty::Hard, &board, now, &mut rng);

        assert!(plan.focus(now).is_some());
        for ms in (0..1000).step_by(50) {
            if let Some(pos) = plan.focus(now + Duration::from_millis(ms)) {
                assert!(board.is_empty(pos));
            }
        }
        assert_eq!(plan.focus(plan.ready_at()), None);
    }

    #[test]
    fn test_immediate_plan() {
        let now = Instant::now();
        let plan = ThinkingPlan::immediate(now);
        assert!(plan.is_ready(now));
        assert_eq!(plan.focus(now), None);
    }
}
