//! Particle burst subsystem
//!
//! One qualifying click produces one **burst**: `count` particle instances
//! synthesized from the resolved configuration, inserted into the active
//! set, animated outward, and removed again once their travel duration
//! (plus a fixed cleanup buffer) has elapsed. Bursts from rapid clicks
//! overlap freely; cleanup is keyed by the exact instance ids a burst
//! spawned, never by "the last N".
//!
//! # Example
//!
//! ```rust
//! use plaudit_widgets::particles::{resolve, ParticleField, ParticlePreset};
//!
//! let mut field = ParticleField::new();
//! let config = resolve(Some(ParticlePreset::Burst), None);
//!
//! let mut rng = || 0.25;
//! field.spawn_burst(&config, &mut rng);
//! assert_eq!(field.len(), 12);
//!
//! // two frame boundaries flip the burst into its animating state
//! field.tick(16.0);
//! field.tick(16.0);
//! assert!(field.iter().all(|(_, p)| p.animating));
//!
//! // travel time plus the cleanup buffer removes it again
//! field.tick(400.0 + 100.0);
//! assert!(field.is_empty());
//! ```

pub mod config;
pub mod presets;
pub mod shape;

pub use config::{resolve, Palette, ParticleConfig, ResolvedParticleConfig};
pub use presets::{ParsePresetError, ParticlePreset};
pub use shape::{CustomShape, Shape};

use plaudit_animation::{Easing, FrameQueue, TimerQueue};
use plaudit_core::sampling::random_angle;
use plaudit_core::Color;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

/// Extra delay past the travel duration before a burst is removed, so
/// fade-out transitions finish before their elements disappear
pub const CLEANUP_BUFFER_MS: f64 = 100.0;

/// Frame boundaries between inserting a burst at rest and flipping it to
/// its animated target, so the renderer commits the starting state first
const KICKOFF_FRAMES: u32 = 2;

new_key_type! {
    /// Unique handle to an active particle, stable across overlapping bursts
    pub struct ParticleId;
}

type BurstIds = SmallVec<[ParticleId; 16]>;

/// Deferred work applied on a later tick
enum BurstTask {
    /// Flip a burst's instances to their animated target
    Animate(BurstIds),
    /// Remove a burst's instances from the active set
    Cleanup(BurstIds),
}

/// One active particle, synthesized at click time
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleInstance {
    /// Travel direction in degrees, already normalized to `[0, 360)`
    pub angle: f32,
    /// Travel distance sampled from the configured range
    pub distance: f32,
    /// Scale multiplier sampled from the configured range
    pub scale: f32,
    /// Color drawn uniformly from the configured palette
    pub color: Color,
    pub shape: Shape,
    /// Travel duration in milliseconds
    pub speed_ms: u32,
    pub easing: Easing,
    pub fade_out: bool,
    /// False until the two-frame kickoff flips the instance toward its
    /// target; the renderer transitions between the two states
    pub animating: bool,
}

impl ParticleInstance {
    /// Final displacement from the spawn origin, screen-space (y grows
    /// downward, so an angle of 270 degrees travels straight up)
    pub fn target_offset(&self) -> (f32, f32) {
        let radians = self.angle.to_radians();
        (
            radians.cos() * self.distance,
            radians.sin() * self.distance,
        )
    }
}

/// The active particle set and its deferred lifecycle work
///
/// The field owns both scheduler queues, so dropping it cancels every
/// pending animation flip and cleanup with it; nothing can fire against a
/// torn-down consumer.
pub struct ParticleField {
    particles: SlotMap<ParticleId, ParticleInstance>,
    timers: TimerQueue<BurstTask>,
    frames: FrameQueue<BurstTask>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: SlotMap::with_key(),
            timers: TimerQueue::new(),
            frames: FrameQueue::new(),
        }
    }

    /// Synthesize one burst from a resolved configuration
    ///
    /// Inserts exactly `config.count` instances (zero inserts nothing and
    /// schedules nothing), defers the animation flip by two frames, and
    /// schedules cleanup of exactly these ids after
    /// `speed_ms + CLEANUP_BUFFER_MS`.
    pub fn spawn_burst(
        &mut self,
        config: &ResolvedParticleConfig,
        rng: &mut impl FnMut() -> f32,
    ) -> BurstIds {
        if config.count == 0 {
            tracing::trace!("burst with zero count, nothing to spawn");
            return BurstIds::new();
        }

        let distance = config.distance.normalize();
        let size = config.size.normalize();

        let mut ids = BurstIds::with_capacity(config.count as usize);
        for _ in 0..config.count {
            let angle = random_angle(config.spread, config.spread_offset, rng);
            let color_index =
                ((rng() * config.colors.len() as f32) as usize).min(config.colors.len() - 1);
            let instance = ParticleInstance {
                angle,
                distance: distance.sample(rng),
                scale: size.sample(rng),
                color: config.colors[color_index],
                shape: config.shape.clone(),
                speed_ms: config.speed_ms,
                easing: config.easing,
                fade_out: config.fade_out,
                animating: false,
            };
            ids.push(self.particles.insert(instance));
        }

        self.frames
            .defer(KICKOFF_FRAMES, BurstTask::Animate(ids.clone()));
        self.timers.schedule(
            f64::from(config.speed_ms) + CLEANUP_BUFFER_MS,
            BurstTask::Cleanup(ids.clone()),
        );
        tracing::debug!(count = ids.len(), shape = %config.shape, "spawned particle burst");
        ids
    }

    /// Pump deferred work: one frame boundary plus `dt_ms` of timer time
    pub fn tick(&mut self, dt_ms: f64) {
        let frame_tasks = self.frames.tick();
        for task in frame_tasks {
            self.apply(task);
        }
        let timer_tasks = self.timers.tick(dt_ms);
        for task in timer_tasks {
            self.apply(task);
        }
    }

    fn apply(&mut self, task: BurstTask) {
        match task {
            BurstTask::Animate(ids) => {
                for id in ids {
                    if let Some(particle) = self.particles.get_mut(id) {
                        particle.animating = true;
                    }
                }
            }
            BurstTask::Cleanup(ids) => {
                let mut removed = 0;
                for id in ids {
                    if self.particles.remove(id).is_some() {
                        removed += 1;
                    }
                }
                tracing::trace!(removed, remaining = self.particles.len(), "burst cleaned up");
            }
        }
    }

    /// Cancel all pending work and drop every active instance
    pub fn clear(&mut self) {
        self.timers.clear();
        self.frames.clear();
        self.particles.clear();
    }

    /// Number of deferred tasks still pending
    pub fn pending_tasks(&self) -> usize {
        self.timers.len() + self.frames.len()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, id: ParticleId) -> Option<&ParticleInstance> {
        self.particles.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &ParticleInstance)> {
        self.particles.iter()
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng() -> impl FnMut() -> f32 {
        let mut state = 0x9E3779B9u32;
        move || {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 8) as f32 / (1u32 << 24) as f32
        }
    }

    #[test]
    fn test_burst_spawns_exactly_count_instances() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(Some(ParticlePreset::Burst), None);
        let ids = field.spawn_burst(&config, &mut rng);
        assert_eq!(ids.len(), 12);
        assert_eq!(field.len(), 12);
    }

    #[test]
    fn test_zero_count_spawns_and_schedules_nothing() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(None, Some(&ParticleConfig::new().with_count(0)));
        let ids = field.spawn_burst(&config, &mut rng);
        assert!(ids.is_empty());
        assert!(field.is_empty());
        assert_eq!(field.pending_tasks(), 0);
    }

    #[test]
    fn test_instances_sample_within_configured_ranges() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(Some(ParticlePreset::Fireworks), None);
        field.spawn_burst(&config, &mut rng);
        for (_, particle) in field.iter() {
            assert!((0.0..360.0).contains(&particle.angle));
            assert!((80.0..=160.0).contains(&particle.distance));
            assert!((0.8..=2.0).contains(&particle.scale));
            assert!(config.colors.contains(&particle.color));
            assert_eq!(particle.shape, Shape::Sparkle);
            assert!(!particle.animating);
        }
    }

    #[test]
    fn test_two_frame_kickoff() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(None, None);
        field.spawn_burst(&config, &mut rng);
        assert!(field.iter().all(|(_, p)| !p.animating));
        field.tick(0.0);
        assert!(field.iter().all(|(_, p)| !p.animating));
        field.tick(0.0);
        assert!(field.iter().all(|(_, p)| p.animating));
    }

    #[test]
    fn test_cleanup_fires_after_speed_plus_buffer() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(Some(ParticlePreset::Burst), None);
        field.spawn_burst(&config, &mut rng);
        field.tick(400.0 + CLEANUP_BUFFER_MS - 1.0);
        assert_eq!(field.len(), 12);
        field.tick(1.0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_overlapping_bursts_clean_up_independently() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let fast = resolve(
            None,
            Some(&ParticleConfig::new().with_count(3).with_speed_ms(100)),
        );
        let slow = resolve(
            None,
            Some(&ParticleConfig::new().with_count(5).with_speed_ms(1000)),
        );
        field.spawn_burst(&fast, &mut rng);
        field.tick(50.0);
        field.spawn_burst(&slow, &mut rng);
        assert_eq!(field.len(), 8);

        // the fast burst's deadline passes; only its 3 instances go
        field.tick(160.0);
        assert_eq!(field.len(), 5);

        field.tick(2000.0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_clear_cancels_pending_cleanup() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(None, None);
        field.spawn_burst(&config, &mut rng);
        assert!(field.pending_tasks() > 0);
        field.clear();
        assert_eq!(field.pending_tasks(), 0);
        assert!(field.is_empty());
        // a tick after teardown has nothing to act on
        field.tick(10_000.0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_color_choice_is_uniform_over_palette() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(
            None,
            Some(
                &ParticleConfig::new()
                    .with_count(300)
                    .with_colors([Color::from_hex(0x111111), Color::from_hex(0x222222)]),
            ),
        );
        field.spawn_burst(&config, &mut rng);
        let first = field
            .iter()
            .filter(|(_, p)| p.color == Color::from_hex(0x111111))
            .count();
        // both palette entries should be drawn roughly half the time
        assert!((75..=225).contains(&first), "skewed color draw: {first}/300");
    }

    #[test]
    fn test_fountain_angles_stay_in_cone() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(Some(ParticlePreset::Fountain), None);
        for _ in 0..20 {
            field.spawn_burst(&config, &mut rng);
        }
        // 120 degree cone at -90: angles in [270, 360) or [0, 30]
        for (_, particle) in field.iter() {
            assert!(
                particle.angle >= 270.0 || particle.angle <= 30.0,
                "angle {} outside fountain cone",
                particle.angle
            );
        }
    }

    #[test]
    fn test_target_offset_points_along_angle() {
        let up = ParticleInstance {
            angle: 270.0,
            distance: 100.0,
            scale: 1.0,
            color: Color::WHITE,
            shape: Shape::Heart,
            speed_ms: 500,
            easing: Easing::EaseOut,
            fade_out: true,
            animating: false,
        };
        let (x, y) = up.target_offset();
        assert!(x.abs() < 1e-3);
        assert!((y + 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_point_spawn_with_degenerate_spans() {
        let mut field = ParticleField::new();
        let mut rng = test_rng();
        let config = resolve(
            None,
            Some(
                &ParticleConfig::new()
                    .with_count(4)
                    .with_distance(80.0)
                    .with_size(1.25)
                    .with_spread(0.0)
                    .with_spread_offset(-90.0),
            ),
        );
        field.spawn_burst(&config, &mut rng);
        for (_, particle) in field.iter() {
            assert_eq!(particle.angle, 270.0);
            assert_eq!(particle.distance, 80.0);
            assert_eq!(particle.scale, 1.25);
        }
    }
}
