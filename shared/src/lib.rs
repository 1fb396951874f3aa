//! Core of the circular time-range dial: angle/time mathematics and the
//! pointer gesture state machine, with no rendering dependency.
//!
//! The dial shows a 12- or 24-hour face. Two handles bound a highlighted
//! arc; the tail handle is the start of the selected interval and the head
//! handle its end. Angles live on an unwrapped 4π domain so a selection
//! can span more than one revolution of the face.

pub mod config;
pub mod convert;
pub mod dial;
pub mod gesture;
pub mod model;
pub mod quantize;

pub use config::{load_settings, save_settings, settings_path, SettingsError};
pub use convert::{angle_to_time, start_of_today, time_to_angle, DialConfig, DialConfigError, HourType};
pub use dial::{DialObserver, RangeDial};
pub use gesture::{signed_angle, DialEvent, DialGeometry, Gesture, GestureController, HitRegion};
pub use model::{AngleModel, FULL_CYCLE};
pub use quantize::quantize;
