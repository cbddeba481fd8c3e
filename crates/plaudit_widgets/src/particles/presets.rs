//! Built-in particle presets
//!
//! Five named, fully-populated configurations. The exact per-preset values
//! (count, spread geometry, speed, shape, palette) are part of the public
//! contract: hosts and tests rely on them, so changing a number here is an
//! API change.

use plaudit_animation::Easing;
use plaudit_core::sampling::Span;
use plaudit_core::Color;
use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use std::fmt;
use std::str::FromStr;

use super::config::ResolvedParticleConfig;
use super::shape::Shape;

/// The built-in preset names
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticlePreset {
    /// Radial heart burst, the classic like effect
    Burst,
    /// Upward cone of circles, slower rise
    Fountain,
    /// Dense square confetti with a wide palette
    Confetti,
    /// Sparse upward hearts for subtle feedback
    Gentle,
    /// Large fast sparkles over a wide travel range
    Fireworks,
}

impl ParticlePreset {
    pub const ALL: [ParticlePreset; 5] = [
        ParticlePreset::Burst,
        ParticlePreset::Fountain,
        ParticlePreset::Confetti,
        ParticlePreset::Gentle,
        ParticlePreset::Fireworks,
    ];

    /// The preset's fully-populated configuration
    pub fn config(self) -> ResolvedParticleConfig {
        match self {
            ParticlePreset::Burst => ResolvedParticleConfig {
                shape: Shape::Heart,
                colors: smallvec![
                    Color::from_hex(0xFF6B81),
                    Color::from_hex(0xFF4757),
                    Color::from_hex(0xFF6348),
                ],
                count: 12,
                size: Span::from(1.0..1.6),
                speed_ms: 400,
                distance: Span::from(70.0..120.0),
                spread: 360.0,
                spread_offset: 0.0,
                easing: Easing::EaseOut,
                fade_out: true,
            },
            ParticlePreset::Fountain => ResolvedParticleConfig {
                shape: Shape::Circle,
                colors: smallvec![
                    Color::from_hex(0x70A1FF),
                    Color::from_hex(0x1E90FF),
                    Color::from_hex(0x3742FA),
                ],
                count: 10,
                size: Span::from(0.8..1.2),
                speed_ms: 600,
                distance: Span::from(80.0..140.0),
                spread: 120.0,
                spread_offset: -90.0,
                easing: Easing::EaseOut,
                fade_out: true,
            },
            ParticlePreset::Confetti => ResolvedParticleConfig {
                shape: Shape::Square,
                colors: smallvec![
                    Color::from_hex(0xFF6B81),
                    Color::from_hex(0xFFA502),
                    Color::from_hex(0xECCC68),
                    Color::from_hex(0x7BED9F),
                    Color::from_hex(0x70A1FF),
                    Color::from_hex(0xA29BFE),
                ],
                count: 15,
                size: Span::from(0.6..1.2),
                speed_ms: 800,
                distance: Span::from(60.0..140.0),
                spread: 360.0,
                spread_offset: 0.0,
                easing: Easing::EaseOutBack,
                fade_out: true,
            },
            ParticlePreset::Gentle => ResolvedParticleConfig {
                shape: Shape::Heart,
                colors: smallvec![Color::from_hex(0xFFB3C1), Color::from_hex(0xFF8FA3)],
                count: 6,
                size: Span::from(0.8..1.1),
                speed_ms: 700,
                distance: Span::from(40.0..70.0),
                spread: 180.0,
                spread_offset: -90.0,
                easing: Easing::EaseInOut,
                fade_out: true,
            },
            ParticlePreset::Fireworks => ResolvedParticleConfig {
                shape: Shape::Sparkle,
                colors: smallvec![
                    Color::from_hex(0xFFD700),
                    Color::from_hex(0xFF6348),
                    Color::from_hex(0x70A1FF),
                    Color::from_hex(0xFF6B81),
                ],
                count: 16,
                size: Span::from(0.8..2.0),
                speed_ms: 500,
                distance: Span::from(80.0..160.0),
                spread: 360.0,
                spread_offset: 0.0,
                easing: Easing::EaseOut,
                fade_out: true,
            },
        }
    }

    /// The kebab-case name used in config files
    pub fn name(&self) -> &'static str {
        match self {
            ParticlePreset::Burst => "burst",
            ParticlePreset::Fountain => "fountain",
            ParticlePreset::Confetti => "confetti",
            ParticlePreset::Gentle => "gentle",
            ParticlePreset::Fireworks => "fireworks",
        }
    }
}

impl fmt::Display for ParticlePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown preset name
#[derive(Debug, thiserror::Error)]
#[error("unknown particle preset: {0:?}")]
pub struct ParsePresetError(pub String);

impl FromStr for ParticlePreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "burst" => Ok(ParticlePreset::Burst),
            "fountain" => Ok(ParticlePreset::Fountain),
            "confetti" => Ok(ParticlePreset::Confetti),
            "gentle" => Ok(ParticlePreset::Gentle),
            "fireworks" => Ok(ParticlePreset::Fireworks),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}
