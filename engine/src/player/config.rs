//! Movement Configuration
//!
//! Static tuning for the locomotion core. Values are in meters, seconds and
//! newtons. Everything can be loaded from JSON; missing fields fall back to
//! [`Default`].
//!
//! # Example
//!
//! ```json
//! {
//!   "speeds": { "walk_speed": 6.0, "sprint_speed": 9.0 },
//!   "slide": { "duration": 1.2 },
//!   "slide_curve": "smooth_step"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timeline::{CurveAsset, TimelineChannel, TimelineError};

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 6.0;

/// Sprint speed in meters per second
pub const SPRINT_SPEED: f32 = 9.0;

/// Capsule half-height while sliding, in meters
pub const SLIDE_HALF_HEIGHT: f32 = 0.35;

/// Camera height above the capsule center while sliding, in meters
pub const SLIDE_EYE_OFFSET: f32 = 0.25;

/// Force pushing a sliding character down slopes, in newtons
pub const SLOPE_FORCE: f32 = 1600.0;

/// Camera tilt (roll) timeline duration in seconds
pub const TILT_DURATION: f32 = 0.25;

/// Slide timeline duration in seconds
pub const SLIDE_DURATION: f32 = 1.0;

/// Errors raised while loading or validating a [`MovementConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{channel} duration must be positive and finite, got {value}")]
    NonPositiveDuration { channel: &'static str, value: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    InvalidSpeed { name: &'static str, value: f32 },

    #[error("sprint speed {sprint} is slower than walk speed {walk}")]
    SprintSlowerThanWalk { walk: f32, sprint: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    InvalidHalfHeight { name: &'static str, value: f32 },

    #[error("slope force must be finite and non-negative, got {0}")]
    InvalidSlopeForce(f32),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Walk and sprint speeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedProfile {
    /// Max horizontal speed while walking (m/s)
    pub walk_speed: f32,
    /// Max horizontal speed while sprinting and sliding (m/s)
    pub sprint_speed: f32,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
        }
    }
}

/// Slide pose, forces and timeline durations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Capsule half-height at full slide collapse (m)
    pub half_height: f32,
    /// Camera vertical offset at full slide collapse (m)
    pub eye_offset: f32,
    /// Magnitude of the downslope force (N)
    pub slope_force: f32,
    /// Slide timeline duration; this alone decides slide length (s)
    pub duration: f32,
    /// Camera tilt timeline duration (s)
    pub tilt_duration: f32,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            half_height: SLIDE_HALF_HEIGHT,
            eye_offset: SLIDE_EYE_OFFSET,
            slope_force: SLOPE_FORCE,
            duration: SLIDE_DURATION,
            tilt_duration: TILT_DURATION,
        }
    }
}

/// Complete tuning for a [`PlayerCharacter`](super::PlayerCharacter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub speeds: SpeedProfile,
    pub slide: SlideConfig,
    /// Camera roll over the tilt timeline, in degrees. `None` disables tilt.
    pub tilt_curve: Option<CurveAsset>,
    /// Collapse amount over the slide timeline (0 = standing, 1 = full slide).
    /// `None` disables sliding.
    pub slide_curve: Option<CurveAsset>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speeds: SpeedProfile::default(),
            slide: SlideConfig::default(),
            tilt_curve: Some(CurveAsset::keyed(&[(0.0, 0.0), (1.0, -8.0)])),
            slide_curve: Some(CurveAsset::keyed(&[(0.0, 0.0), (0.2, 1.0), (1.0, 1.0)])),
        }
    }
}

impl MovementConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: MovementConfig = serde_json::from_str(json)?;
        config.normalize_curves();
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn normalize_curves(&mut self) {
        for curve in [&mut self.tilt_curve, &mut self.slide_curve].into_iter().flatten() {
            curve.normalize();
        }
    }

    /// Reject configurations the core cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let SpeedProfile {
            walk_speed,
            sprint_speed,
        } = self.speeds;
        check_positive(walk_speed, |value| ConfigError::InvalidSpeed {
            name: "walk_speed",
            value,
        })?;
        check_positive(sprint_speed, |value| ConfigError::InvalidSpeed {
            name: "sprint_speed",
            value,
        })?;
        if sprint_speed < walk_speed {
            return Err(ConfigError::SprintSlowerThanWalk {
                walk: walk_speed,
                sprint: sprint_speed,
            });
        }

        check_positive(self.slide.half_height, |value| ConfigError::InvalidHalfHeight {
            name: "slide.half_height",
            value,
        })?;
        if !self.slide.eye_offset.is_finite() {
            return Err(ConfigError::InvalidHalfHeight {
                name: "slide.eye_offset",
                value: self.slide.eye_offset,
            });
        }
        if !self.slide.slope_force.is_finite() || self.slide.slope_force < 0.0 {
            return Err(ConfigError::InvalidSlopeForce(self.slide.slope_force));
        }

        check_positive(self.slide.duration, |value| ConfigError::NonPositiveDuration {
            channel: "slide",
            value,
        })?;
        check_positive(self.slide.tilt_duration, |value| {
            ConfigError::NonPositiveDuration {
                channel: "tilt",
                value,
            }
        })?;
        Ok(())
    }

    /// Build the camera tilt channel.
    pub fn tilt_channel(&self) -> Result<TimelineChannel, ConfigError> {
        build_channel("tilt", self.slide.tilt_duration, self.tilt_curve.clone())
    }

    /// Build the slide collapse channel.
    pub fn slide_channel(&self) -> Result<TimelineChannel, ConfigError> {
        build_channel("slide", self.slide.duration, self.slide_curve.clone())
    }
}

fn check_positive(value: f32, err: impl FnOnce(f32) -> ConfigError) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(err(value))
    }
}

fn build_channel(
    channel: &'static str,
    duration: f32,
    curve: Option<CurveAsset>,
) -> Result<TimelineChannel, ConfigError> {
    let mut timeline = TimelineChannel::new(duration).map_err(|err| match err {
        TimelineError::InvalidDuration(value) => ConfigError::NonPositiveDuration { channel, value },
    })?;
    match curve {
        Some(mut curve) => {
            curve.normalize();
            timeline.set_curve(curve);
        }
        None => log::warn!("no {channel} curve configured; {channel} timeline will not animate"),
    }
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MovementConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.speeds.walk_speed, WALK_SPEED);
        assert_eq!(config.speeds.sprint_speed, SPRINT_SPEED);
    }

    #[test]
    fn test_zero_slide_duration_rejected() {
        let mut config = MovementConfig::default();
        config.slide.duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDuration { channel: "slide", .. })
        ));
    }

    #[test]
    fn test_negative_tilt_duration_rejected() {
        let mut config = MovementConfig::default();
        config.slide.tilt_duration = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDuration { channel: "tilt", .. })
        ));
    }

    #[test]
    fn test_sprint_slower_than_walk_rejected() {
        let mut config = MovementConfig::default();
        config.speeds.sprint_speed = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SprintSlowerThanWalk { .. })
        ));
    }

    #[test]
    fn test_nan_speed_rejected() {
        let mut config = MovementConfig::default();
        config.speeds.walk_speed = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed { name: "walk_speed", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MovementConfig::from_json_str(r#"{"speeds":{"sprint_speed":12.0}}"#).unwrap();
        assert_eq!(config.speeds.walk_speed, WALK_SPEED);
        assert_eq!(config.speeds.sprint_speed, 12.0);
        assert_eq!(config.slide, SlideConfig::default());
    }

    #[test]
    fn test_null_curve_disables_channel() {
        let config = MovementConfig::from_json_str(r#"{"tilt_curve":null}"#).unwrap();
        assert!(config.tilt_curve.is_none());
        assert!(!config.tilt_channel().unwrap().has_curve());
        assert!(config.slide_channel().unwrap().has_curve());
    }

    #[test]
    fn test_invalid_json_reports_parse_error() {
        let err = MovementConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_round_trip_preserves_config() {
        let config = MovementConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(MovementConfig::from_json_str(&json).unwrap(), config);
    }
}
