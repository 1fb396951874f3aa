//! Angle model - the two bounds of the selected arc
//!
//! Head and tail live on an unwrapped 4π domain (two full turns) so the
//! selection can exceed one revolution of the face. The tail angle is the
//! chronological start of the interval, the head its end; because dial
//! angles decrease as time advances, the tail is always the numerically
//! larger of the two.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::convert::HourType;

/// Two full turns of the dial
pub const FULL_CYCLE: f64 = 2.0 * TAU;

/// The head (end) and tail (start) angles bounding the selected arc.
///
/// Invariant after every mutation: `head ∈ [π/2, π/2 + 4π)` and
/// `tail ∈ [head, head + 4π)`. Violations are repaired by shifting whole
/// 4π cycles, never by clamping, so the interval length is preserved
/// modulo two turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleModel {
    head: f64,
    tail: f64,
}

impl Default for AngleModel {
    fn default() -> Self {
        Self {
            head: FRAC_PI_2,
            tail: 0.7 * PI,
        }
    }
}

impl AngleModel {
    pub fn new(head: f64, tail: f64) -> Self {
        let mut model = Self::default();
        model.set_head(head);
        model.set_tail(tail);
        model
    }

    /// End-of-interval angle
    pub fn head(&self) -> f64 {
        self.head
    }

    /// Start-of-interval angle
    pub fn tail(&self) -> f64 {
        self.tail
    }

    /// Move the head, wrapping it back into its domain and re-anchoring the
    /// tail against the new head so the pair invariant survives.
    pub fn set_head(&mut self, angle: f64) {
        self.head = FRAC_PI_2 + (angle - FRAC_PI_2).rem_euclid(FULL_CYCLE);
        self.tail = self.head + (self.tail - self.head).rem_euclid(FULL_CYCLE);
    }

    /// Move the tail, wrapping it into `[head, head + 4π)`.
    pub fn set_tail(&mut self, angle: f64) {
        self.tail = self.head + (angle - self.head).rem_euclid(FULL_CYCLE);
    }

    /// Rotate both bounds by the same delta, keeping the interval length.
    ///
    /// Head moves first; the tail is re-expressed relative to the head it
    /// ends up with.
    pub fn rotate(&mut self, delta: f64) {
        let tail = self.tail;
        self.set_head(self.head + delta);
        self.set_tail(tail + delta);
    }

    /// Angular length of the selection, in `[0, 4π)`.
    ///
    /// A transiently negative difference is read as a full-cycle
    /// wraparound, never surfaced to callers.
    pub fn duration(&self) -> f64 {
        (self.tail - self.head).rem_euclid(FULL_CYCLE)
    }

    /// Selection length in whole minutes for the given hour cycle
    pub fn duration_minutes(&self, hour_type: HourType) -> i64 {
        // grid angles carry float error, so sit a hair above the boundary
        // before flooring
        (self.duration() / TAU * hour_type.cycle_minutes() as f64 + 1e-9).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(model: &AngleModel) {
        assert!(
            model.head() >= FRAC_PI_2 && model.head() < FRAC_PI_2 + FULL_CYCLE,
            "head {} out of domain",
            model.head()
        );
        assert!(
            model.tail() >= model.head() && model.tail() < model.head() + FULL_CYCLE,
            "tail {} out of domain for head {}",
            model.tail(),
            model.head()
        );
    }

    #[test]
    fn test_default_is_in_domain() {
        assert_invariants(&AngleModel::default());
    }

    #[test]
    fn test_invariants_hold_under_mutation() {
        let mut model = AngleModel::default();
        let moves: [(bool, f64); 10] = [
            (true, 1.0),
            (false, -2.5),
            (true, -8.0),
            (false, 20.0),
            (true, FULL_CYCLE + 0.3),
            (false, -FULL_CYCLE),
            (true, 0.0),
            (false, 0.0),
            (true, -0.01),
            (false, 100.0),
        ];
        for (move_head, angle) in moves {
            if move_head {
                model.set_head(model.head() + angle);
            } else {
                model.set_tail(model.tail() + angle);
            }
            assert_invariants(&model);
        }
    }

    #[test]
    fn test_duration_for_half_turn() {
        let mut model = AngleModel::default();
        model.set_head(FRAC_PI_2);
        model.set_tail(FRAC_PI_2 + PI);
        assert_eq!(model.duration_minutes(HourType::TwentyFour), 720);
        assert_eq!(model.duration_minutes(HourType::Twelve), 360);
    }

    #[test]
    fn test_duration_can_exceed_one_revolution() {
        // A 20-hour span on the 24-hour face is more than half of the
        // 4π domain but still well-defined
        let mut model = AngleModel::default();
        model.set_head(FRAC_PI_2);
        model.set_tail(FRAC_PI_2 + TAU * 20.0 / 24.0);
        assert_eq!(model.duration_minutes(HourType::TwentyFour), 1200);
    }

    #[test]
    fn test_backwards_head_move_wraps_instead_of_clamping() {
        let mut model = AngleModel::default();
        model.set_head(FRAC_PI_2 - 0.1);
        assert_invariants(&model);
        assert!((model.head() - (FRAC_PI_2 - 0.1 + FULL_CYCLE)).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_preserves_duration() {
        let mut model = AngleModel::default();
        model.set_head(FRAC_PI_2 + 0.4);
        model.set_tail(FRAC_PI_2 + 2.0);
        let before = model.duration();
        for delta in [0.3, -1.7, TAU, -0.05, 5.1] {
            model.rotate(delta);
            assert_invariants(&model);
            assert!(
                (model.duration() - before).abs() < 1e-9,
                "duration drifted after rotate({})",
                delta
            );
        }
    }

    #[test]
    fn test_head_move_keeps_tail_in_domain() {
        let mut model = AngleModel::default();
        model.set_tail(model.head() + 0.2);
        // Pushing the head past the tail forces the tail to wrap forward
        model.set_head(model.head() + 1.0);
        assert_invariants(&model);
    }
}
