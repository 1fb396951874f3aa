//! Gesture handling - pointer events driving the dial selection
//!
//! A pointer-down claims one of three hit regions (tail handle, head
//! handle, arc body) and installs the matching drag variant; every later
//! pointer-move turns pointer motion into an angle delta, discretized onto
//! the configured grid and applied to the model. All processing is
//! synchronous on the thread delivering the events.

use std::f64::consts::TAU;

use chrono::NaiveDateTime;
use glam::DVec2;

use crate::convert::{angle_to_time, DialConfig};
use crate::model::AngleModel;
use crate::quantize::quantize;

/// Hittable regions on the dial face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Head,
    Tail,
    Arc,
}

/// Notifications observable from outside the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialEvent {
    /// Fired on every pointer-move that mutated the selection
    TimesUpdated {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Fired when a pointer-up ends a gesture
    TimesChanged {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Unit vector pointing along `angle`
fn direction(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Signed angle rotating `from` onto `to`, in `(-π, π]`
pub fn signed_angle(from: DVec2, to: DVec2) -> f64 {
    from.perp_dot(to).atan2(from.dot(to))
}

/// Dial measurements in y-up window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center: DVec2,
    /// Radius of the circle the handles ride on
    pub track_radius: f64,
    /// Radius of each handle disc
    pub button_radius: f64,
    /// Thickness of the selected arc band
    pub path_width: f64,
}

impl DialGeometry {
    /// Project an angle onto the track circle
    pub fn project(&self, angle: f64) -> DVec2 {
        self.center + direction(angle) * self.track_radius
    }

    /// Classify a pointer position against the hittable regions.
    ///
    /// The tail marker sits above the head marker, which sits above the
    /// arc band, matching the draw order.
    pub fn hit_test(&self, pos: DVec2, model: &AngleModel) -> Option<HitRegion> {
        if pos.distance(self.project(model.tail())) <= self.button_radius {
            return Some(HitRegion::Tail);
        }
        if pos.distance(self.project(model.head())) <= self.button_radius {
            return Some(HitRegion::Head);
        }
        let offset = pos - self.center;
        if (offset.length() - self.track_radius).abs() <= self.path_width / 2.0 {
            let span = model.duration();
            if span >= TAU {
                return Some(HitRegion::Arc);
            }
            // The arc runs from the head towards the tail in the
            // increasing-angle direction
            let theta = offset.y.atan2(offset.x);
            if (theta - model.head()).rem_euclid(TAU) <= span {
                return Some(HitRegion::Arc);
            }
        }
        None
    }
}

/// Drag variant installed by a pointer-down. Only the arc drag carries
/// data: the previous pointer sample its incremental delta is measured
/// from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    DraggingHead,
    DraggingTail,
    DraggingArc { last_pos: DVec2 },
}

/// State machine turning pointer events into model mutations
#[derive(Debug, Clone)]
pub struct GestureController {
    gesture: Gesture,
    /// Whether the claimed region may actually move. A claimed-but-inert
    /// gesture still swallows the rest of the pointer sequence.
    armed: bool,
    pub allow_head_move: bool,
    pub allow_tail_move: bool,
    pub allow_rotate: bool,
    pub disabled: bool,
}

impl Default for GestureController {
    fn default() -> Self {
        Self {
            gesture: Gesture::Idle,
            armed: false,
            allow_head_move: true,
            allow_tail_move: true,
            allow_rotate: true,
            disabled: false,
        }
    }
}

impl GestureController {
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Start a pointer sequence. Any gesture left over from a sequence
    /// that never saw its pointer-up is discarded first. While disabled,
    /// no hit-testing happens and the state stays `Idle`.
    pub fn pointer_down(&mut self, pos: DVec2, geometry: &DialGeometry, model: &AngleModel) {
        self.gesture = Gesture::Idle;
        self.armed = false;
        if self.disabled {
            return;
        }
        match geometry.hit_test(pos, model) {
            Some(HitRegion::Tail) => {
                self.gesture = Gesture::DraggingTail;
                self.armed = self.allow_tail_move;
            }
            Some(HitRegion::Head) => {
                self.gesture = Gesture::DraggingHead;
                self.armed = self.allow_head_move;
            }
            Some(HitRegion::Arc) => {
                self.gesture = Gesture::DraggingArc { last_pos: pos };
                // Rotating the arc moves both bounds at once
                self.armed = self.allow_rotate && self.allow_head_move && self.allow_tail_move;
            }
            None => {}
        }
    }

    /// Process a pointer-move against the state left by the previous move.
    ///
    /// Handle drags measure their delta from the handle's own position,
    /// arc drags from the previous pointer sample. Deltas that discretize
    /// to zero mutate nothing and report nothing.
    pub fn pointer_move(
        &mut self,
        pos: DVec2,
        geometry: &DialGeometry,
        model: &mut AngleModel,
        config: &DialConfig,
    ) -> Option<DialEvent> {
        let step = config.angle_step();
        let delta = match self.gesture {
            Gesture::Idle => return None,
            Gesture::DraggingHead => {
                if !self.armed {
                    return None;
                }
                let delta =
                    quantize(signed_angle(direction(model.head()), pos - geometry.center), step);
                if delta != 0.0 {
                    model.set_head(model.head() + delta);
                }
                delta
            }
            Gesture::DraggingTail => {
                if !self.armed {
                    return None;
                }
                let delta =
                    quantize(signed_angle(direction(model.tail()), pos - geometry.center), step);
                if delta != 0.0 {
                    model.set_tail(model.tail() + delta);
                }
                delta
            }
            Gesture::DraggingArc { last_pos } => {
                // The anchor advances on every move, applied or not
                self.gesture = Gesture::DraggingArc { last_pos: pos };
                if !self.armed {
                    return None;
                }
                let delta = quantize(
                    signed_angle(last_pos - geometry.center, pos - geometry.center),
                    step,
                );
                if delta != 0.0 {
                    model.rotate(delta);
                }
                delta
            }
        };
        if delta == 0.0 {
            return None;
        }
        Some(DialEvent::TimesUpdated {
            start: angle_to_time(model.tail(), config),
            end: angle_to_time(model.head(), config),
        })
    }

    /// End the pointer sequence, committing the gesture if one was active.
    pub fn pointer_up(&mut self, model: &AngleModel, config: &DialConfig) -> Option<DialEvent> {
        let was_active = self.gesture != Gesture::Idle;
        self.gesture = Gesture::Idle;
        self.armed = false;
        if !was_active {
            return None;
        }
        Some(DialEvent::TimesChanged {
            start: angle_to_time(model.tail(), config),
            end: angle_to_time(model.head(), config),
        })
    }

    /// Discard the gesture without committing anything. Safe to repeat.
    pub fn pointer_cancel(&mut self) {
        self.gesture = Gesture::Idle;
        self.armed = false;
    }
}
