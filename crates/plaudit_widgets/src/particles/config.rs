//! Particle configuration and the three-layer resolver
//!
//! Configuration resolves through three layers, lowest precedence first:
//! global defaults, then a named preset (fully populated, overlays every
//! field), then the caller's [`ParticleConfig`] override (overlays only the
//! fields it supplies). The merge is shallow per field: an override span
//! replaces the lower layer's span wholesale, it never inherits half a
//! range.

use plaudit_animation::Easing;
use plaudit_core::sampling::Span;
use plaudit_core::Color;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::presets::ParticlePreset;
use super::shape::Shape;

/// Ordered color palette particles draw from
pub type Palette = SmallVec<[Color; 6]>;

/// Caller-supplied override layer; every field optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub shape: Option<Shape>,
    pub colors: Option<Palette>,
    pub count: Option<u32>,
    pub size: Option<Span>,
    pub speed_ms: Option<u32>,
    pub distance: Option<Span>,
    pub spread: Option<f32>,
    pub spread_offset: Option<f32>,
    pub easing: Option<Easing>,
    pub fade_out: Option<bool>,
}

impl ParticleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = Some(colors.into_iter().collect());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Particle scale multiplier, scalar or range
    pub fn with_size(mut self, size: impl Into<Span>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Animation duration in milliseconds
    pub fn with_speed_ms(mut self, speed_ms: u32) -> Self {
        self.speed_ms = Some(speed_ms);
        self
    }

    /// Travel distance, scalar or range
    pub fn with_distance(mut self, distance: impl Into<Span>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    /// Angular width of the emission cone in degrees
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = Some(spread);
        self
    }

    /// Starting rotation of the emission cone in degrees
    pub fn with_spread_offset(mut self, spread_offset: f32) -> Self {
        self.spread_offset = Some(spread_offset);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_fade_out(mut self, fade_out: bool) -> Self {
        self.fade_out = Some(fade_out);
        self
    }
}

/// A fully-populated configuration, the only input particle synthesis takes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParticleConfig {
    pub shape: Shape,
    pub colors: Palette,
    pub count: u32,
    pub size: Span,
    pub speed_ms: u32,
    pub distance: Span,
    pub spread: f32,
    pub spread_offset: f32,
    pub easing: Easing,
    pub fade_out: bool,
}

impl ResolvedParticleConfig {
    /// The global default configuration
    pub fn defaults() -> Self {
        Self {
            shape: Shape::Heart,
            colors: smallvec![
                Color::from_hex(0xFF6B81),
                Color::from_hex(0xFF4757),
                Color::from_hex(0xFF6348),
            ],
            count: 8,
            size: Span::from(1.0..1.5),
            speed_ms: 500,
            distance: Span::from(60.0..100.0),
            spread: 360.0,
            spread_offset: 0.0,
            easing: Easing::EaseOut,
            fade_out: true,
        }
    }

    fn apply(&mut self, overrides: &ParticleConfig) {
        if let Some(shape) = &overrides.shape {
            self.shape = shape.clone();
        }
        if let Some(colors) = &overrides.colors {
            self.colors = colors.clone();
        }
        if let Some(count) = overrides.count {
            self.count = count;
        }
        if let Some(size) = overrides.size {
            self.size = size;
        }
        if let Some(speed_ms) = overrides.speed_ms {
            self.speed_ms = speed_ms;
        }
        if let Some(distance) = overrides.distance {
            self.distance = distance;
        }
        if let Some(spread) = overrides.spread {
            self.spread = spread;
        }
        if let Some(spread_offset) = overrides.spread_offset {
            self.spread_offset = spread_offset;
        }
        if let Some(easing) = overrides.easing {
            self.easing = easing;
        }
        if let Some(fade_out) = overrides.fade_out {
            self.fade_out = fade_out;
        }
    }

    /// Clamp degenerate caller input so nothing downstream sees an inverted
    /// range or an out-of-bounds spread
    fn sanitize(&mut self) {
        for span in [&mut self.size, &mut self.distance] {
            let range = span.normalize();
            if range.min > range.max {
                tracing::warn!("inverted particle range {range:?}, reordering");
                *span = Span::Range(range.ordered());
            }
        }
        self.spread = self.spread.clamp(0.0, 360.0);
    }
}

impl Default for ResolvedParticleConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Resolve the active configuration for one burst
///
/// Precedence, lowest first: defaults, preset, override. A field omitted
/// from the override (`None`) leaves the lower layer's value untouched.
pub fn resolve(
    preset: Option<ParticlePreset>,
    overrides: Option<&ParticleConfig>,
) -> ResolvedParticleConfig {
    let mut resolved = match preset {
        Some(preset) => preset.config(),
        None => ResolvedParticleConfig::defaults(),
    };
    if let Some(overrides) = overrides {
        resolved.apply(overrides);
    }
    resolved.sanitize();
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaudit_core::sampling::Range;

    #[test]
    fn test_resolve_without_layers_is_the_documented_default() {
        let resolved = resolve(None, None);
        assert_eq!(resolved.shape, Shape::Heart);
        assert_eq!(resolved.colors.len(), 3);
        assert_eq!(resolved.count, 8);
        assert_eq!(resolved.size.normalize(), Range::new(1.0, 1.5));
        assert_eq!(resolved.speed_ms, 500);
        assert_eq!(resolved.distance.normalize(), Range::new(60.0, 100.0));
        assert_eq!(resolved.spread, 360.0);
        assert_eq!(resolved.spread_offset, 0.0);
        assert_eq!(resolved.easing, Easing::EaseOut);
        assert!(resolved.fade_out);
        assert_eq!(resolved, ResolvedParticleConfig::defaults());
    }

    #[test]
    fn test_preset_overlays_every_field() {
        let resolved = resolve(Some(ParticlePreset::Confetti), None);
        assert_eq!(resolved, ParticlePreset::Confetti.config());
    }

    #[test]
    fn test_override_wins_only_on_supplied_fields() {
        let overrides = ParticleConfig::new().with_count(5);
        let resolved = resolve(Some(ParticlePreset::Burst), Some(&overrides));
        assert_eq!(resolved.count, 5);
        // everything the override omitted still comes from the preset
        assert_eq!(resolved.shape, Shape::Heart);
        assert_eq!(resolved.speed_ms, 400);
    }

    #[test]
    fn test_override_on_defaults_without_preset() {
        let overrides = ParticleConfig::new()
            .with_shape(Shape::Star)
            .with_speed_ms(250);
        let resolved = resolve(None, Some(&overrides));
        assert_eq!(resolved.shape, Shape::Star);
        assert_eq!(resolved.speed_ms, 250);
        assert_eq!(resolved.count, 8);
    }

    #[test]
    fn test_span_override_replaces_whole_range() {
        let overrides = ParticleConfig::new().with_distance(40.0);
        let resolved = resolve(Some(ParticlePreset::Fireworks), Some(&overrides));
        // a scalar override does not inherit the preset's max
        assert_eq!(resolved.distance.normalize(), Range::new(40.0, 40.0));
    }

    #[test]
    fn test_inverted_range_is_reordered() {
        let overrides = ParticleConfig::new().with_size(Range::new(2.0, 0.5));
        let resolved = resolve(None, Some(&overrides));
        assert_eq!(resolved.size.normalize(), Range::new(0.5, 2.0));
    }

    #[test]
    fn test_spread_is_clamped_to_a_full_turn() {
        let overrides = ParticleConfig::new().with_spread(720.0);
        assert_eq!(resolve(None, Some(&overrides)).spread, 360.0);
    }

    #[test]
    fn test_config_deserializes_partial_json() {
        let config: ParticleConfig = serde_json::from_str(
            r#"{
                "shape": "square",
                "count": 4,
                "distance": {"min": 10.0, "max": 20.0},
                "size": 2.0,
                "easing": "ease-out-back"
            }"#,
        )
        .unwrap();
        assert_eq!(config.shape, Some(Shape::Square));
        assert_eq!(config.count, Some(4));
        assert_eq!(config.speed_ms, None);
        let resolved = resolve(None, Some(&config));
        assert_eq!(resolved.distance.normalize(), Range::new(10.0, 20.0));
        assert_eq!(resolved.size.normalize(), Range::new(2.0, 2.0));
        assert_eq!(resolved.easing, Easing::EaseOutBack);
    }
}
