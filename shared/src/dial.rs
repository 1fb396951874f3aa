//! Dial facade - the public control surface
//!
//! `RangeDial` ties the configuration, the angle model and the gesture
//! controller together behind the surface a host control exposes: start
//! and end times (tail is the start, head the end, uniformly), duration
//! queries, feature flags, and the pointer entry points.

use chrono::NaiveDateTime;
use glam::DVec2;

use crate::convert::{angle_to_time, time_to_angle, DialConfig};
use crate::gesture::{DialEvent, DialGeometry, Gesture, GestureController};
use crate::model::AngleModel;

/// Receives selection notifications. Every method defaults to a no-op, so
/// implementors pick only the events they care about.
pub trait DialObserver {
    /// Called on every pointer-move that changed the selection
    fn times_updated(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        let _ = (start, end);
    }

    /// Called when a gesture ends on pointer-up
    fn times_changed(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        let _ = (start, end);
    }

    /// Route an event to the matching method
    fn notify(&mut self, event: DialEvent) {
        match event {
            DialEvent::TimesUpdated { start, end } => self.times_updated(start, end),
            DialEvent::TimesChanged { start, end } => self.times_changed(start, end),
        }
    }
}

/// The time-range dial control, minus any rendering
#[derive(Debug, Clone)]
pub struct RangeDial {
    config: DialConfig,
    model: AngleModel,
    controller: GestureController,
}

impl Default for RangeDial {
    fn default() -> Self {
        Self::new(DialConfig::default())
    }
}

impl RangeDial {
    pub fn new(config: DialConfig) -> Self {
        Self {
            config,
            model: AngleModel::default(),
            controller: GestureController::default(),
        }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Swap in a new configuration. Configuration never changes during a
    /// gesture, so anything in flight is discarded first.
    pub fn set_config(&mut self, config: DialConfig) {
        self.controller.pointer_cancel();
        self.config = config;
    }

    pub fn model(&self) -> &AngleModel {
        &self.model
    }

    /// Chronological start of the selection (the tail handle)
    pub fn start_time(&self) -> NaiveDateTime {
        angle_to_time(self.model.tail(), &self.config)
    }

    /// Chronological end of the selection (the head handle)
    pub fn end_time(&self) -> NaiveDateTime {
        angle_to_time(self.model.head(), &self.config)
    }

    pub fn set_start_time(&mut self, time: NaiveDateTime) {
        self.model.set_tail(time_to_angle(time, &self.config));
    }

    pub fn set_end_time(&mut self, time: NaiveDateTime) {
        self.model.set_head(time_to_angle(time, &self.config));
    }

    /// Selection length in whole minutes
    pub fn duration_minutes(&self) -> i64 {
        self.model.duration_minutes(self.config.hour_type())
    }

    /// Selection length as the center-title text, e.g. `"8hr 0min"`
    pub fn duration_label(&self) -> String {
        let minutes = self.duration_minutes();
        format!("{}hr {}min", minutes / 60, minutes % 60)
    }

    pub fn disabled(&self) -> bool {
        self.controller.disabled
    }

    /// Store the disabled flag. Hit-testing stops on the next
    /// pointer-down; a gesture already running is unaffected. The caller
    /// owns any display-state refresh.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.controller.disabled = disabled;
    }

    pub fn allow_head_move(&self) -> bool {
        self.controller.allow_head_move
    }

    pub fn set_allow_head_move(&mut self, allow: bool) {
        self.controller.allow_head_move = allow;
    }

    pub fn allow_tail_move(&self) -> bool {
        self.controller.allow_tail_move
    }

    pub fn set_allow_tail_move(&mut self, allow: bool) {
        self.controller.allow_tail_move = allow;
    }

    pub fn allow_rotate(&self) -> bool {
        self.controller.allow_rotate
    }

    pub fn set_allow_rotate(&mut self, allow: bool) {
        self.controller.allow_rotate = allow;
    }

    /// The gesture currently claiming the pointer
    pub fn gesture(&self) -> Gesture {
        self.controller.gesture()
    }

    pub fn pointer_down(&mut self, pos: DVec2, geometry: &DialGeometry) {
        self.controller.pointer_down(pos, geometry, &self.model);
    }

    pub fn pointer_move(&mut self, pos: DVec2, geometry: &DialGeometry) -> Option<DialEvent> {
        self.controller
            .pointer_move(pos, geometry, &mut self.model, &self.config)
    }

    pub fn pointer_up(&mut self) -> Option<DialEvent> {
        self.controller.pointer_up(&self.model, &self.config)
    }

    pub fn pointer_cancel(&mut self) {
        self.controller.pointer_cancel();
    }
}
