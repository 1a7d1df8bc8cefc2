//! Propeller options
//!
//! Mirrors the option object of the jQuery-era plugin: every key is optional,
//! keys are camelCase when read from JSON, and `minimalInertia` is still
//! accepted as the old name of `minimalSpeed`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Render threshold used when neither `minimalAngleChange` nor `step` is set
pub const DEFAULT_MINIMAL_ANGLE_CHANGE: f64 = 0.1;

/// Which element receives mouse and touch listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TouchElement {
    /// The rotating element itself
    #[default]
    Target,
    /// A non-rotating container wrapped around the target
    Container,
}

/// CSS transition applied to stepped rotations
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration_ms: f64,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropellerConfig {
    /// Initial angle in degrees
    pub angle: f64,
    /// Initial speed in degrees per tick, only meaningful with inertia
    pub speed: f64,
    /// Per-tick speed multiplier after release; 0 disables inertia
    pub inertia: f64,
    #[serde(alias = "minimalInertia")]
    pub minimal_speed: f64,
    /// Defaults to `step` when stepping, otherwise 0.1
    pub minimal_angle_change: Option<f64>,
    pub step: f64,
    /// Milliseconds; 0 disables the transition and its render cooldown
    pub step_transition_time: f64,
    pub step_transition_easing: String,
    pub rotate_parent_instantly: bool,
    pub touch_element: TouchElement,
}

impl Default for PropellerConfig {
    fn default() -> Self {
        Self {
            angle: 0.0,
            speed: 0.0,
            inertia: 0.0,
            minimal_speed: 0.001,
            minimal_angle_change: None,
            step: 0.0,
            step_transition_time: 0.0,
            step_transition_easing: "linear".to_string(),
            rotate_parent_instantly: false,
            touch_element: TouchElement::Target,
        }
    }
}

impl PropellerConfig {
    /// Parse a JSON option object and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Options as a pretty-printed JSON object with every key filled in.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("angle", self.angle),
            ("speed", self.speed),
            ("inertia", self.inertia),
            ("minimalSpeed", self.minimal_speed),
            ("minimalAngleChange", self.minimal_angle_change.unwrap_or(0.0)),
            ("step", self.step),
            ("stepTransitionTime", self.step_transition_time),
        ];
        for (option, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { option, value });
            }
        }

        if !(0.0..1.0).contains(&self.inertia) {
            return Err(ConfigError::InertiaOutOfRange(self.inertia));
        }

        let non_negative = [
            ("minimalSpeed", self.minimal_speed),
            ("minimalAngleChange", self.minimal_angle_change.unwrap_or(0.0)),
            ("step", self.step),
            ("stepTransitionTime", self.step_transition_time),
        ];
        for (option, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { option, value });
            }
        }

        if self.step_transition_easing.trim().is_empty() {
            return Err(ConfigError::EmptyEasing);
        }
        Ok(())
    }

    pub fn inertia_enabled(&self) -> bool {
        self.inertia > 0.0
    }

    pub fn stepped(&self) -> bool {
        self.step > 0.0
    }

    pub fn effective_minimal_angle_change(&self) -> f64 {
        match self.minimal_angle_change {
            Some(change) => change,
            None if self.stepped() => self.step,
            None => DEFAULT_MINIMAL_ANGLE_CHANGE,
        }
    }

    pub fn transition(&self) -> Option<Transition> {
        (self.step_transition_time > 0.0).then(|| Transition {
            duration_ms: self.step_transition_time,
            easing: self.step_transition_easing.clone(),
        })
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_minimal_speed(mut self, minimal_speed: f64) -> Self {
        self.minimal_speed = minimal_speed;
        self
    }

    pub fn with_minimal_angle_change(mut self, change: f64) -> Self {
        self.minimal_angle_change = Some(change);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_transition(mut self, duration_ms: f64, easing: impl Into<String>) -> Self {
        self.step_transition_time = duration_ms;
        self.step_transition_easing = easing.into();
        self
    }

    pub fn with_touch_element(mut self, touch_element: TouchElement) -> Self {
        self.touch_element = touch_element;
        self
    }

    pub fn with_rotate_parent_instantly(mut self, instantly: bool) -> Self {
        self.rotate_parent_instantly = instantly;
        self
    }
}
