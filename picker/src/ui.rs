//! UI module - egui settings and selection panels
//!
//! The settings panel edits a mirror of the dial configuration and reports
//! whether anything changed; the update loop validates and applies it.

use chrono::NaiveDateTime;
use nannou_egui::egui;
use shared::{Gesture, RangeDial};

/// Editable mirror of the dial configuration and feature flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub hour24: bool,
    pub step_minutes: u32,
    pub rotation_degrees: f64,
    pub allow_head_move: bool,
    pub allow_tail_move: bool,
    pub allow_rotate: bool,
    pub disabled: bool,
    pub show_ticks: bool,
    pub show_numerals: bool,
}

/// Draw the settings panel. Returns true when anything changed.
pub fn draw_settings_panel(ctx: &egui::Context, settings: &mut Settings) -> bool {
    let mut changed = false;

    egui::Window::new("Settings")
        .collapsible(true)
        .resizable(false)
        .default_width(230.0)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            ui.label("Clock face:");
            ui.horizontal(|ui| {
                changed |= ui
                    .radio_value(&mut settings.hour24, false, "12-hour")
                    .changed();
                changed |= ui
                    .radio_value(&mut settings.hour24, true, "24-hour")
                    .changed();
            });

            ui.separator();

            changed |= ui
                .add(egui::Slider::new(&mut settings.step_minutes, 1..=60).text("Step (min)"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.rotation_degrees, -180.0..=180.0)
                        .text("Face rotation"),
                )
                .changed();

            ui.separator();

            changed |= ui
                .checkbox(&mut settings.allow_tail_move, "Move start handle")
                .changed();
            changed |= ui
                .checkbox(&mut settings.allow_head_move, "Move end handle")
                .changed();
            changed |= ui
                .checkbox(&mut settings.allow_rotate, "Rotate whole range")
                .changed();
            changed |= ui.checkbox(&mut settings.disabled, "Disabled").changed();

            ui.separator();

            changed |= ui.checkbox(&mut settings.show_ticks, "Show ticks").changed();
            changed |= ui
                .checkbox(&mut settings.show_numerals, "Show numerals")
                .changed();

            ui.separator();
            ui.label("H toggles the face · D toggles disabled");
        });

    changed
}

/// Draw the selection card: live times, active gesture, last commit
pub fn draw_status_panel(
    ctx: &egui::Context,
    dial: &RangeDial,
    live: Option<(NaiveDateTime, NaiveDateTime)>,
    committed: Option<(NaiveDateTime, NaiveDateTime)>,
) {
    let (start, end) = live.unwrap_or_else(|| (dial.start_time(), dial.end_time()));

    egui::Window::new("Selection")
        .collapsible(true)
        .resizable(false)
        .default_width(220.0)
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .show(ctx, |ui| {
            ui.label(format!("Start: {}", start.format("%H:%M")));
            ui.label(format!("End: {}", end.format("%H:%M")));
            ui.label(format!("Duration: {}", dial.duration_label()));

            ui.separator();

            let gesture = match dial.gesture() {
                Gesture::Idle => "idle",
                Gesture::DraggingHead => "dragging end handle",
                Gesture::DraggingTail => "dragging start handle",
                Gesture::DraggingArc { .. } => "rotating range",
            };
            ui.label(format!("Gesture: {}", gesture));

            ui.separator();

            match committed {
                Some((start, end)) => {
                    ui.label(format!(
                        "Last set: {} - {}",
                        start.format("%H:%M"),
                        end.format("%H:%M")
                    ));
                }
                None => {
                    ui.label("Drag a handle or the arc to choose a range.");
                }
            }
        });
}
