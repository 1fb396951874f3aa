//! Time/angle conversion - mapping wall-clock times onto the dial
//!
//! The dial runs clockwise with 12 o'clock (or 0 o'clock on a 24-hour face)
//! at the top, so the angle decreases as the time of day advances. Both
//! conversion directions quantize onto the configured minute grid.

use std::f64::consts::{FRAC_PI_2, TAU};

use chrono::{Duration, Local, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::quantize::quantize;

/// Hour cycle shown on the dial face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourType {
    Twelve,
    TwentyFour,
}

impl HourType {
    /// Hours in one revolution of the dial
    pub fn hours(self) -> u32 {
        match self {
            HourType::Twelve => 12,
            HourType::TwentyFour => 24,
        }
    }

    /// Minutes in one revolution of the dial
    pub fn cycle_minutes(self) -> u32 {
        self.hours() * 60
    }

    /// Parse a raw hour count, as stored in settings files
    pub fn from_hours(hours: u32) -> Result<Self, DialConfigError> {
        match hours {
            12 => Ok(HourType::Twelve),
            24 => Ok(HourType::TwentyFour),
            other => Err(DialConfigError::UnsupportedHourType(other)),
        }
    }
}

impl std::fmt::Display for HourType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-hour", self.hours())
    }
}

/// Error type for dial configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialConfigError {
    /// Hour count other than 12 or 24
    UnsupportedHourType(u32),
    /// Step size of zero, or one that does not divide the hour cycle
    InvalidStepMinutes(u32),
}

impl std::fmt::Display for DialConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialConfigError::UnsupportedHourType(h) => {
                write!(f, "Unsupported hour type: {} (expected 12 or 24)", h)
            }
            DialConfigError::InvalidStepMinutes(m) => {
                write!(f, "Invalid step size: {} minutes", m)
            }
        }
    }
}

impl std::error::Error for DialConfigError {}

/// Dial configuration, immutable for the duration of a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialConfig {
    hour_type: HourType,
    rotation_offset: f64,
    step_minutes: u32,
}

impl DialConfig {
    /// Build a configuration, failing fast on values a gesture could not
    /// safely divide by.
    ///
    /// `step_minutes` must be non-zero and divide the hour cycle, so the
    /// angle grid and the minute grid describe the same set of points.
    pub fn new(
        hour_type: HourType,
        rotation_offset: f64,
        step_minutes: u32,
    ) -> Result<Self, DialConfigError> {
        if step_minutes == 0 || hour_type.cycle_minutes() % step_minutes != 0 {
            return Err(DialConfigError::InvalidStepMinutes(step_minutes));
        }
        Ok(Self {
            hour_type,
            rotation_offset,
            step_minutes,
        })
    }

    pub fn hour_type(&self) -> HourType {
        self.hour_type
    }

    /// Rotation of the whole face, in radians
    pub fn rotation_offset(&self) -> f64 {
        self.rotation_offset
    }

    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    /// Grid points in one revolution (144 for 12h at 5min, 288 for 24h)
    pub fn steps_per_cycle(&self) -> u32 {
        self.hour_type.cycle_minutes() / self.step_minutes
    }

    /// Angular size of one step
    pub fn angle_step(&self) -> f64 {
        TAU / self.steps_per_cycle() as f64
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            hour_type: HourType::Twelve,
            rotation_offset: 0.0,
            step_minutes: 5,
        }
    }
}

/// Convert a time of day to its dial angle.
///
/// Only the hour and minute components matter. The result is snapped onto
/// the angle grid and lies within one revolution below `π/2 + offset`.
pub fn time_to_angle(time: NaiveDateTime, config: &DialConfig) -> f64 {
    let minutes_of_day = (time.hour() * 60 + time.minute()) as f64;
    let cycle = config.hour_type().cycle_minutes() as f64;
    let raw = FRAC_PI_2 + config.rotation_offset() - minutes_of_day / cycle * TAU;
    quantize(raw, config.angle_step())
}

/// Convert a dial angle back to a time, anchored to the current local day.
///
/// The minute count is snapped onto the step grid before being applied to
/// the start of today; angles wrapped past a full cycle land on the
/// adjacent calendar day with the same time of day.
pub fn angle_to_time(angle: f64, config: &DialConfig) -> NaiveDateTime {
    let cycle = config.hour_type().cycle_minutes() as f64;
    let minutes = (FRAC_PI_2 - angle) / TAU * cycle;
    let snapped = quantize(minutes, config.step_minutes() as f64) as i64;
    start_of_today() + Duration::minutes(snapped)
}

/// Midnight at the start of the current local day
pub fn start_of_today() -> NaiveDateTime {
    Local::now().date_naive().and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        start_of_today() + Duration::minutes((hour * 60 + minute) as i64)
    }

    #[test]
    fn test_top_of_dial_is_midnight() {
        let config = DialConfig::new(HourType::TwentyFour, 0.0, 5).unwrap();
        let angle = time_to_angle(at(0, 0), &config);
        assert!((angle - FRAC_PI_2).abs() < 1e-9);
        assert_eq!(angle_to_time(angle, &config), at(0, 0));
    }

    #[test]
    fn test_known_angle_for_eight_oclock() {
        let config = DialConfig::new(HourType::TwentyFour, 0.0, 5).unwrap();
        // 08:00 is a third of the 24h cycle past the top
        let expected = FRAC_PI_2 - TAU / 3.0;
        assert!((time_to_angle(at(8, 0), &config) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_on_the_grid() {
        for hour_type in [HourType::Twelve, HourType::TwentyFour] {
            let config = DialConfig::new(hour_type, 0.0, 5).unwrap();
            // The whole day, so the 12h face covers its second revolution too
            for minutes in (0..1440).step_by(5) {
                let time = at(minutes / 60, minutes % 60);
                let back = angle_to_time(time_to_angle(time, &config), &config);
                assert_eq!(back, time, "{} failed for {}", time, hour_type);
            }
        }
    }

    #[test]
    fn test_off_grid_angle_snaps() {
        let config = DialConfig::default();
        let step = config.angle_step();
        // Slightly off a grid point; the quantized angle must round-trip
        let angle = FRAC_PI_2 - 10.0 * step + step * 0.2;
        let snapped = quantize(angle, step);
        assert_eq!(
            time_to_angle(angle_to_time(angle, &config), &config),
            snapped
        );
    }

    #[test]
    fn test_seconds_are_discarded() {
        let config = DialConfig::default();
        let with_seconds = at(3, 25) + Duration::seconds(42);
        assert_eq!(
            time_to_angle(with_seconds, &config),
            time_to_angle(at(3, 25), &config)
        );
    }

    #[test]
    fn test_rotation_offset_shifts_face() {
        let config = DialConfig::new(HourType::TwentyFour, std::f64::consts::PI, 5).unwrap();
        let angle = time_to_angle(at(0, 0), &config);
        assert!((angle - (FRAC_PI_2 + std::f64::consts::PI)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert_eq!(
            DialConfig::new(HourType::Twelve, 0.0, 0),
            Err(DialConfigError::InvalidStepMinutes(0))
        );
        // 7 does not divide 720
        assert_eq!(
            DialConfig::new(HourType::Twelve, 0.0, 7),
            Err(DialConfigError::InvalidStepMinutes(7))
        );
        assert_eq!(
            HourType::from_hours(13),
            Err(DialConfigError::UnsupportedHourType(13))
        );
        assert_eq!(HourType::from_hours(24), Ok(HourType::TwentyFour));
    }
}
