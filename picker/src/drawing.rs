//! Drawing module - dial rendering
//!
//! Renders the time-range dial with nannou's Draw API: track band,
//! selected arc, handle discs, tick dots, numerals and the center title.
//! The angle/gesture core never calls back in here; this module only reads
//! the dial state each frame.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::time::Instant;

use glam::DVec2;
use nannou::prelude::*;
use shared::{DialGeometry, HourType, RangeDial};

/// A toast notification message
pub struct ToastMessage {
    pub text: String,
    pub created_at: Instant,
    pub duration_secs: f32,
}

/// Color palette for the picker theme
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 26,
        green: 26,
        blue: 26,
        standard: std::marker::PhantomData,
    };
    pub const TRACK: Srgb<u8> = Srgb {
        red: 45,
        green: 45,
        blue: 45,
        standard: std::marker::PhantomData,
    };
    pub const ARC_START: Srgb<u8> = Srgb {
        red: 0,
        green: 212,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    pub const ARC_END: Srgb<u8> = Srgb {
        red: 0,
        green: 106,
        blue: 128,
        standard: std::marker::PhantomData,
    };
    pub const HANDLE: Srgb<u8> = Srgb {
        red: 240,
        green: 240,
        blue: 240,
        standard: std::marker::PhantomData,
    };
    pub const HANDLE_TEXT: Srgb<u8> = Srgb {
        red: 26,
        green: 26,
        blue: 26,
        standard: std::marker::PhantomData,
    };
    pub const TICK_NORMAL: Srgb<u8> = Srgb {
        red: 80,
        green: 80,
        blue: 80,
        standard: std::marker::PhantomData,
    };
    pub const TICK_MAJOR: Srgb<u8> = Srgb {
        red: 120,
        green: 120,
        blue: 120,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 240,
        green: 240,
        blue: 240,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 160,
        green: 160,
        blue: 160,
        standard: std::marker::PhantomData,
    };
    pub const TOAST_BG: Srgb<u8> = Srgb {
        red: 50,
        green: 50,
        blue: 50,
        standard: std::marker::PhantomData,
    };
}

/// Content supplied to the face renderer on demand.
///
/// Every method has a documented default, so providers override only what
/// they customize; the angle/gesture core never consumes this.
pub trait FaceContent {
    /// How many numerals ring the face. Defaults to the hour count.
    fn numeral_count(&self, hour_type: HourType) -> usize {
        hour_type.hours() as usize
    }

    /// Label of the numeral one slot clockwise of the top, counting from
    /// zero. Defaults to the slot number itself, so the top reads as the
    /// full hour count.
    fn numeral_text(&self, index: usize, hour_type: HourType) -> String {
        let _ = hour_type;
        format!("{}", index + 1)
    }

    /// Dot markers between the numerals. Defaults to none.
    fn icon_count(&self) -> usize {
        0
    }

    /// Whether the dot at `index` is drawn. Defaults to all of them.
    fn icon_visible(&self, index: usize) -> bool {
        let _ = index;
        true
    }

    /// Two color stops for the selected arc, start side first. Defaults
    /// to the accent pair.
    fn gradient_stops(&self) -> [Srgb<u8>; 2] {
        [colors::ARC_START, colors::ARC_END]
    }

    /// Label on the start (tail) marker
    fn tail_label(&self) -> &str {
        "Start"
    }

    /// Label on the end (head) marker
    fn head_label(&self) -> &str {
        "End"
    }
}

/// Content with every default in place
#[allow(dead_code)]
pub struct DefaultFaceContent;

impl FaceContent for DefaultFaceContent {}

/// The picker's own face: the 24-hour dial shows every third hour with
/// dots in between, the 12-hour dial keeps the plain numerals.
pub struct PickerFace {
    pub hour_type: HourType,
}

impl FaceContent for PickerFace {
    fn numeral_count(&self, hour_type: HourType) -> usize {
        match hour_type {
            HourType::Twelve => 12,
            HourType::TwentyFour => 8,
        }
    }

    fn numeral_text(&self, index: usize, hour_type: HourType) -> String {
        match hour_type {
            HourType::Twelve => format!("{}", index + 1),
            // Every third hour, with midnight written as 0 at the top
            HourType::TwentyFour => {
                let hours = [3, 6, 9, 12, 15, 18, 21, 0];
                format!("{}", hours[index % hours.len()])
            }
        }
    }

    fn icon_count(&self) -> usize {
        match self.hour_type {
            HourType::Twelve => 0,
            HourType::TwentyFour => 24,
        }
    }

    fn icon_visible(&self, index: usize) -> bool {
        // Every third slot already carries a numeral
        (index + 1) % 3 != 0
    }
}

/// Overall inset of the dial within the window
const INSET_AMOUNT: f32 = 40.0;
/// Thickness of the selected arc band, and twice the handle radius
const PATH_WIDTH: f32 = 54.0;

/// Compute the dial geometry for the current window
pub fn dial_geometry(window_rect: Rect) -> DialGeometry {
    let min_dim = window_rect.w().min(window_rect.h());
    DialGeometry {
        center: DVec2::ZERO,
        track_radius: (min_dim / 2.0 - INSET_AMOUNT - PATH_WIDTH / 2.0) as f64,
        button_radius: (PATH_WIDTH / 2.0) as f64,
        path_width: PATH_WIDTH as f64,
    }
}

fn to_point(v: DVec2) -> Point2 {
    pt2(v.x as f32, v.y as f32)
}

/// Map a color to its disabled greyscale
fn painted(color: Srgb<u8>, disabled: bool) -> Srgb<u8> {
    if !disabled {
        return color;
    }
    let grey = (color.red as f32 * 0.299 + color.green as f32 * 0.587 + color.blue as f32 * 0.114)
        as u8;
    srgb(grey, grey, grey)
}

fn lerp_color(a: Srgb<u8>, b: Srgb<u8>, t: f32) -> Srgb<u8> {
    let t = t.clamp(0.0, 1.0);
    srgb(
        (a.red as f32 + (b.red as f32 - a.red as f32) * t) as u8,
        (a.green as f32 + (b.green as f32 - a.green as f32) * t) as u8,
        (a.blue as f32 + (b.blue as f32 - a.blue as f32) * t) as u8,
    )
}

/// Draw the whole dial: track, arc, face decoration, handles and title
pub fn draw_dial(
    draw: &Draw,
    geometry: &DialGeometry,
    dial: &RangeDial,
    content: &dyn FaceContent,
    show_ticks: bool,
    show_numerals: bool,
) {
    let disabled = dial.disabled();
    let center = to_point(geometry.center);
    let track_radius = geometry.track_radius as f32;
    let hour_type = dial.config().hour_type();
    let rotation_offset = dial.config().rotation_offset();

    // Track band under everything
    draw_ring(
        draw,
        center,
        track_radius,
        geometry.path_width as f32,
        painted(colors::TRACK, disabled),
    );

    // Face decoration sits inside the band
    let inner_radius = track_radius - geometry.path_width as f32 / 2.0;
    if show_ticks {
        draw_face_ticks(draw, geometry, hour_type, rotation_offset, disabled);
    }
    if show_numerals {
        draw_face_numerals(
            draw,
            geometry,
            content,
            hour_type,
            rotation_offset,
            disabled,
        );
    }

    // Selected arc from the head round to the tail
    let span = dial.model().duration();
    if span > 0.0 {
        let stops = content.gradient_stops();
        let head = dial.model().head();
        let brush_radius = geometry.path_width as f32 / 2.0 - 4.0;
        let samples = ((span * geometry.track_radius / 5.0).ceil() as usize).max(2);
        for i in 0..=samples {
            let u = i as f64 / samples as f64;
            let pos = geometry.project(head + span * u);
            // The start stop belongs at the tail end of the arc
            let color = lerp_color(stops[1], stops[0], u as f32);
            draw.ellipse()
                .xy(to_point(pos))
                .radius(brush_radius)
                .color(painted(color, disabled));
        }
    }

    // Handles, head below tail to match the hit-test order
    draw_handle(
        draw,
        geometry,
        dial.model().head(),
        content.head_label(),
        disabled,
    );
    draw_handle(
        draw,
        geometry,
        dial.model().tail(),
        content.tail_label(),
        disabled,
    );

    // Center title: interval length and the concrete times
    draw.text(&dial.duration_label())
        .xy(center + vec2(0.0, 12.0))
        .color(painted(colors::TEXT_PRIMARY, disabled))
        .font_size(28)
        .w(inner_radius * 1.4);
    let times = format!(
        "{} - {}",
        dial.start_time().format("%H:%M"),
        dial.end_time().format("%H:%M")
    );
    draw.text(&times)
        .xy(center + vec2(0.0, -20.0))
        .color(painted(colors::TEXT_SECONDARY, disabled))
        .font_size(16)
        .w(inner_radius * 1.4);
}

/// Draw one handle disc with its label
fn draw_handle(draw: &Draw, geometry: &DialGeometry, angle: f64, label: &str, disabled: bool) {
    let pos = to_point(geometry.project(angle));
    let radius = geometry.button_radius as f32;
    draw.ellipse()
        .xy(pos)
        .radius(radius)
        .color(painted(colors::HANDLE, disabled));
    // Inner disc, inset by the button rim
    draw.ellipse()
        .xy(pos)
        .radius(radius - 2.0)
        .color(painted(srgb(255, 255, 255), disabled));
    draw.text(label)
        .xy(pos)
        .color(painted(colors::HANDLE_TEXT, disabled))
        .font_size(11)
        .w(radius * 2.0);
}

/// Draw the hour tick dots, a larger one every third hour
fn draw_face_ticks(
    draw: &Draw,
    geometry: &DialGeometry,
    hour_type: HourType,
    rotation_offset: f64,
    disabled: bool,
) {
    let hours = hour_type.hours() as usize;
    let tick_radius = geometry.track_radius - geometry.path_width / 2.0 - 14.0;
    for i in 0..hours {
        let angle = FRAC_PI_2 + rotation_offset - (i as f64 / hours as f64) * TAU;
        let pos = DVec2::new(angle.cos(), angle.sin()) * tick_radius + geometry.center;
        let is_major = i % 3 == 0;
        let (dot, color) = if is_major {
            (2.5, colors::TICK_MAJOR)
        } else {
            (1.5, colors::TICK_NORMAL)
        };
        draw.ellipse()
            .xy(to_point(pos))
            .radius(dot)
            .color(painted(color, disabled));
    }
}

/// Draw the numerals and the in-between icon dots
fn draw_face_numerals(
    draw: &Draw,
    geometry: &DialGeometry,
    content: &dyn FaceContent,
    hour_type: HourType,
    rotation_offset: f64,
    disabled: bool,
) {
    let numeral_radius = geometry.track_radius - geometry.path_width / 2.0 - 34.0;

    let count = content.numeral_count(hour_type);
    if count > 0 {
        for i in 1..=count {
            let angle = FRAC_PI_2 + rotation_offset - (i as f64 / count as f64) * TAU;
            let pos = DVec2::new(angle.cos(), angle.sin()) * numeral_radius + geometry.center;
            draw.text(&content.numeral_text(i - 1, hour_type))
                .xy(to_point(pos))
                .color(painted(colors::TEXT_SECONDARY, disabled))
                .font_size(14)
                .w(40.0);
        }
    }

    let icons = content.icon_count();
    if icons > 0 {
        for i in 1..=icons {
            if !content.icon_visible(i - 1) {
                continue;
            }
            let angle = FRAC_PI_2 + rotation_offset - (i as f64 / icons as f64) * TAU;
            let pos = DVec2::new(angle.cos(), angle.sin()) * numeral_radius + geometry.center;
            draw.ellipse()
                .xy(to_point(pos))
                .radius(1.5)
                .color(painted(colors::TICK_NORMAL, disabled));
        }
    }
}

/// Draw a ring (circle outline) using line segments
fn draw_ring(draw: &Draw, center: Point2, radius: f32, weight: f32, color: Srgb<u8>) {
    let segments = 180;
    let points: Vec<Point2> = (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            center + vec2(angle.cos(), angle.sin()) * radius
        })
        .collect();

    draw.polyline().weight(weight).color(color).points(points);
}

/// Draw toast notifications, stacking upward from the bottom-right
pub fn draw_toasts(draw: &Draw, toasts: &[ToastMessage], window_rect: Rect) {
    let toast_width = 280.0;
    let toast_height = 36.0;
    let margin = 15.0;

    for (i, toast) in toasts.iter().enumerate() {
        let elapsed = toast.created_at.elapsed().as_secs_f32();
        let progress = elapsed / toast.duration_secs;

        // Fade out over the last fifth of the lifetime
        let alpha = if progress > 0.8 {
            ((1.0 - progress) / 0.2 * 255.0) as u8
        } else {
            255u8
        };

        let y_offset = (i as f32) * (toast_height + margin);
        let pos = pt2(
            window_rect.right() - toast_width / 2.0 - margin,
            window_rect.bottom() + toast_height / 2.0 + margin + y_offset,
        );

        draw.rect().xy(pos).w_h(toast_width, toast_height).color(srgba(
            colors::TOAST_BG.red,
            colors::TOAST_BG.green,
            colors::TOAST_BG.blue,
            alpha,
        ));

        draw.text(&toast.text)
            .xy(pos)
            .color(srgba(
                colors::TEXT_PRIMARY.red,
                colors::TEXT_PRIMARY.green,
                colors::TEXT_PRIMARY.blue,
                alpha,
            ))
            .font_size(14)
            .w(toast_width - 20.0);
    }
}
