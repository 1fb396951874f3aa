//! Time-range picker
//!
//! A circular dual-handle selector: drag the start and end handles around
//! the dial face, or drag the highlighted arc to rotate the whole
//! interval. All angle/time math lives in the shared core; this app only
//! renders the dial and feeds it pointer events.

mod drawing;
mod ui;

use std::time::Instant;

use chrono::{Duration, NaiveDateTime};
use glam::DVec2;
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{start_of_today, DialConfig, DialConfigError, DialEvent, HourType, RangeDial};

use crate::drawing::{colors, dial_geometry, draw_dial, draw_toasts, PickerFace, ToastMessage};
use crate::ui::{draw_settings_panel, draw_status_panel, Settings};

const TOAST_DURATION_SECS: f32 = 3.0;

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    hour_type: u32,
    step_minutes: u32,
    rotation_degrees: f64,
    allow_head_move: bool,
    allow_tail_move: bool,
    allow_rotate: bool,
    show_ticks: bool,
    show_numerals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hour_type: 24,
            step_minutes: 5,
            rotation_degrees: 0.0,
            allow_head_move: true,
            allow_tail_move: true,
            allow_rotate: true,
            show_ticks: true,
            show_numerals: true,
        }
    }
}

/// Application state
struct Model {
    /// The dial control itself
    dial: RangeDial,
    /// Mirror of the configuration edited by the settings panel
    settings: Settings,
    /// Times from the most recent move of the active gesture
    live_times: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Times committed by the last completed gesture
    committed_times: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Toast notifications
    toasts: Vec<ToastMessage>,
    /// egui integration
    egui: Egui,
}

impl Model {
    fn push_toast(&mut self, text: String) {
        self.toasts.push(ToastMessage {
            text,
            created_at: Instant::now(),
            duration_secs: TOAST_DURATION_SECS,
        });
    }

    fn prune_toasts(&mut self) {
        self.toasts
            .retain(|t| t.created_at.elapsed().as_secs_f32() < t.duration_secs);
    }
}

/// Build the dial configuration the settings mirror describes
fn dial_config(settings: &Settings) -> Result<DialConfig, DialConfigError> {
    let hour_type = HourType::from_hours(if settings.hour24 { 24 } else { 12 })?;
    DialConfig::new(
        hour_type,
        settings.rotation_degrees.to_radians(),
        settings.step_minutes,
    )
}

fn settings_from_config(config: &Config) -> Settings {
    Settings {
        hour24: config.hour_type == 24,
        step_minutes: config.step_minutes,
        rotation_degrees: config.rotation_degrees,
        allow_head_move: config.allow_head_move,
        allow_tail_move: config.allow_tail_move,
        allow_rotate: config.allow_rotate,
        disabled: false,
        show_ticks: config.show_ticks,
        show_numerals: config.show_numerals,
    }
}

fn save_config(model: &Model) {
    let config = Config {
        hour_type: if model.settings.hour24 { 24 } else { 12 },
        step_minutes: model.settings.step_minutes,
        rotation_degrees: model.settings.rotation_degrees,
        allow_head_move: model.settings.allow_head_move,
        allow_tail_move: model.settings.allow_tail_move,
        allow_rotate: model.settings.allow_rotate,
        show_ticks: model.settings.show_ticks,
        show_numerals: model.settings.show_numerals,
    };
    if let Err(e) = shared::save_settings(&config) {
        eprintln!("Failed to save settings: {}", e);
    }
}

fn model(app: &App) -> Model {
    // Create window
    let window_id = app
        .new_window()
        .title("Time Range Picker")
        .size(900, 700)
        .min_size(500, 500)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    // Load configuration
    let config: Config = shared::load_settings().ok().flatten().unwrap_or_default();

    let mut settings = settings_from_config(&config);
    let dial_cfg = dial_config(&settings).unwrap_or_else(|e| {
        eprintln!("Invalid saved settings: {}", e);
        settings = settings_from_config(&Config::default());
        DialConfig::new(HourType::TwentyFour, 0.0, 5).unwrap_or_default()
    });

    let mut dial = RangeDial::new(dial_cfg);
    dial.set_allow_head_move(settings.allow_head_move);
    dial.set_allow_tail_move(settings.allow_tail_move);
    dial.set_allow_rotate(settings.allow_rotate);

    // Initial selection: midnight to 08:00
    dial.set_end_time(start_of_today() + Duration::hours(8));
    dial.set_start_time(start_of_today());

    Model {
        dial,
        settings,
        live_times: None,
        committed_times: None,
        toasts: Vec::new(),
        egui,
    }
}

fn apply_settings(model: &mut Model) {
    model.dial.set_allow_head_move(model.settings.allow_head_move);
    model.dial.set_allow_tail_move(model.settings.allow_tail_move);
    model.dial.set_allow_rotate(model.settings.allow_rotate);
    model.dial.set_disabled(model.settings.disabled);

    match dial_config(&model.settings) {
        Ok(config) => {
            if *model.dial.config() != config {
                model.dial.set_config(config);
            }
            save_config(model);
        }
        Err(e) => {
            model.push_toast(format!("{}", e));
        }
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.prune_toasts();

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let settings_changed = draw_settings_panel(&ctx, &mut model.settings);
    draw_status_panel(&ctx, &model.dial, model.live_times, model.committed_times);

    drop(ctx);

    if settings_changed {
        apply_settings(model);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(colors::BACKGROUND);

    let geometry = dial_geometry(window_rect);
    let face = PickerFace {
        hour_type: model.dial.config().hour_type(),
    };
    draw_dial(
        &draw,
        &geometry,
        &model.dial,
        &face,
        model.settings.show_ticks,
        model.settings.show_numerals,
    );

    // Title
    draw.text("TIME RANGE PICKER")
        .x_y(0.0, window_rect.top() - 20.0)
        .color(colors::TEXT_SECONDARY)
        .font_size(14)
        .w(300.0);

    draw_toasts(&draw, &model.toasts, window_rect);

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // H - toggle 12/24-hour face
        Key::H => {
            model.settings.hour24 = !model.settings.hour24;
            apply_settings(model);
        }
        // D - toggle the disabled flag
        Key::D => {
            model.settings.disabled = !model.settings.disabled;
            apply_settings(model);
        }
        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let pos = app.mouse.position();
        let geometry = dial_geometry(app.window_rect());
        model
            .dial
            .pointer_down(DVec2::new(pos.x as f64, pos.y as f64), &geometry);
        model.live_times = None;
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        if let Some(DialEvent::TimesChanged { start, end }) = model.dial.pointer_up() {
            model.committed_times = Some((start, end));
            model.live_times = None;
            model.push_toast(format!(
                "Times changed: {} - {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            ));
        }
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let geometry = dial_geometry(app.window_rect());
    if let Some(DialEvent::TimesUpdated { start, end }) = model
        .dial
        .pointer_move(DVec2::new(pos.x as f64, pos.y as f64), &geometry)
    {
        model.live_times = Some((start, end));
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
