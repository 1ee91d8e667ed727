//! Time-based animation: mark fade-in, winning-line sweep, focus pulse,
//! result delays.

use pinwheel_tictactoe::Outcome;
use std::time::{Duration, Instant};

/// Durations for every timed effect in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// A placed mark fades in over this long.
    pub mark_fade: Duration,
    /// The winning line sweeps across its cells over this long.
    pub win_sweep: Duration,
    /// The finished winning line stays up this long before the result screen.
    pub win_hold: Duration,
    /// A drawn board stays up this long before the result screen.
    pub draw_hold: Duration,
    /// Whether the AI waits and scans before moving.
    pub ai_pacing: bool,
}

impl Timings {
    /// The regular pacing of the game.
    pub fn standard() -> Self {
        Self {
            mark_fade: Duration::from_millis(360),
            win_sweep: Duration::from_millis(600),
            win_hold: Duration::from_millis(1200),
            draw_hold: Duration::from_millis(1000),
            ai_pacing: true,
        }
    }

    /// Everything happens at once.
    pub fn instant() -> Self {
        Self {
            mark_fade: Duration::ZERO,
            win_sweep: Duration::ZERO,
            win_hold: Duration::ZERO,
            draw_hold: Duration::ZERO,
            ai_pacing: false,
        }
    }

    /// Time from the final move to the result screen.
    ///
    /// The last mark finishes fading in first; a win then sweeps and holds
    /// its line, a draw just holds.
    pub fn result_delay(&self, outcome: &Outcome) -> Duration {
        self.mark_fade
            + match outcome {
                Outcome::Winner(_) => self.win_sweep + self.win_hold,
                Outcome::Draw => self.draw_hold,
            }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single 0 → 1 transition started at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    start: Instant,
    duration: Duration,
}

impl Tween {
    /// Starts a tween at `start` lasting `duration`.
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// Linear progress in `[0, 1]`. Zero-length tweens are complete at once.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Progress shaped by [`fast_out_slow_in`].
    pub fn eased(&self, now: Instant) -> f32 {
        fast_out_slow_in(self.progress(now))
    }

    /// True once the tween has reached 1.
    pub fn is_done(&self, now: Instant) -> bool {
        now >= self.start + self.duration
    }
}

/// A level that swings between a floor and 1 and back, forever.
///
/// Each half-cycle is eased with [`fast_out_slow_in`]; odd half-cycles run
/// it backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    start: Instant,
    half_cycle: Duration,
    floor: f32,
}

impl Pulse {
    /// Starts at `floor` at `start`, reaching 1 after `half_cycle`.
    pub fn new(start: Instant, half_cycle: Duration, floor: f32) -> Self {
        Self {
            start,
            half_cycle,
            floor,
        }
    }

    /// The AI focus highlight: 0.6 to 1 over 900 ms.
    pub fn focus(start: Instant) -> Self {
        Self::new(start, Duration::from_millis(900), 0.6)
    }

    /// Level at `now`, in `[floor, 1]`.
    pub fn level(&self, now: Instant) -> f32 {
        if self.half_cycle.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let cycles = elapsed.as_secs_f64() / self.half_cycle.as_secs_f64();
        let t = cycles.fract() as f32;
        let t = if (cycles as u64) % 2 == 0 { t } else { 1.0 - t };
        self.floor + (1.0 - self.floor) * fast_out_slow_in(t)
    }
}

/// Material "fast out, slow in" easing: cubic Bézier (0.4, 0.0, 0.2, 1.0).
pub fn fast_out_slow_in(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // x(s) is monotonic for these control points, so bisection finds s.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        let mid = (lo + hi) / 2.0;
        if bezier(mid, 0.4, 0.2) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier((lo + hi) / 2.0, 0.0, 1.0)
}

fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints_and_shape() {
        assert_eq!(fast_out_slow_in(0.0), 0.0);
        assert_eq!(fast_out_slow_in(1.0), 1.0);
        assert!(fast_out_slow_in(0.5) > 0.5);

        let mut prev = 0.0;
        for i in 1..=20 {
            let y = fast_out_slow_in(i as f32 / 20.0);
            assert!(y >= prev);
            prev = y;
        }
    }

    #[test]
    fn test_tween_progress() {
        let start = Instant::now();
        let tween = Tween::new(start, Duration::from_millis(400));
        assert_eq!(tween.progress(start), 0.0);
        assert!((tween.progress(start + Duration::from_millis(100)) - 0.25).abs() < 1e-3);
        assert_eq!(tween.progress(start + Duration::from_secs(2)), 1.0);
        assert!(!tween.is_done(start + Duration::from_millis(399)));
        assert!(tween.is_done(start + Duration::from_millis(400)));
    }

    #[test]
    fn test_zero_length_tween_is_complete() {
        let start = Instant::now();
        let tween = Tween::new(start, Duration::ZERO);
        assert_eq!(tween.eased(start), 1.0);
        assert!(tween.is_done(start));
    }

    #[test]
    fn test_focus_pulse_swings_back_and_forth() {
        let start = Instant::now();
        let pulse = Pulse::focus(start);
        assert_eq!(pulse.level(start), 0.6);
        assert!((pulse.level(start + Duration::from_millis(900)) - 1.0).abs() < 1e-3);
        assert!((pulse.level(start + Duration::from_millis(1800)) - 0.6).abs() < 1e-3);

        let rising = pulse.level(start + Duration::from_millis(450));
        let falling = pulse.level(start + Duration::from_millis(1350));
        assert!(rising > 0.8 && rising < 1.0);
        assert!((rising - falling).abs() < 1e-3);
    }

    #[test]
    fn test_result_delay() {
        let timings = Timings::standard();
        assert_eq!(
            timings.result_delay(&Outcome::Draw),
            Duration::from_millis(1360)
        );
        assert_eq!(
            timings.result_delay(&Outcome::Winner(pinwheel_tictactoe::Player::O)),
            Duration::from_millis(2160)
        );
        assert_eq!(
            Timings::instant().result_delay(&Outcome::Draw),
            Duration::ZERO
        );
    }
}
