//! Named easing curves
//!
//! Curves map normalized progress `t` in `[0, 1]` to an eased value. The
//! particle layer stores the curve by name and leaves evaluation to whoever
//! drives the visuals, so `apply` is provided but nothing here ticks time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named timing function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    /// Cubic ease-out, the default for particle travel
    #[default]
    EaseOut,
    EaseInOut,
    /// Ease-out with a slight overshoot past the target
    EaseOutBack,
}

impl Easing {
    /// Evaluate the curve at normalized progress `t`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Easing::EaseOutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let shifted = t - 1.0;
                1.0 + C3 * shifted * shifted * shifted + C1 * shifted * shifted
            }
        }
    }

    /// The kebab-case name used in config files
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOutBack => "ease-out-back",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown easing name
#[derive(Debug, thiserror::Error)]
#[error("unknown easing curve: {0:?}")]
pub struct ParseEasingError(pub String);

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Easing::Linear),
            "ease-in" => Ok(Easing::EaseIn),
            "ease-out" => Ok(Easing::EaseOut),
            "ease-in-out" => Ok(Easing::EaseInOut),
            "ease-out-back" => Ok(Easing::EaseOutBack),
            other => Err(ParseEasingError(other.to_string())),
        }
    }
}
