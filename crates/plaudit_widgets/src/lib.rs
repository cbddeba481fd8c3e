//! Plaudit Widgets
//!
//! The animated like button and its particle burst subsystem.
//!
//! # Features
//!
//! - **LikeButton**: Click-count state machine with liquid-fill level,
//!   max-click clamping, right-click and Shift+Enter alternate paths, and
//!   accessibility label generation
//! - **Particles**: Preset/override configuration resolver and a burst
//!   lifecycle manager with deferred, cancellable cleanup
//!
//! # Example
//!
//! ```rust
//! use plaudit_core::{PointerButton, PointerEvent};
//! use plaudit_widgets::{LikeButton, LikeButtonConfig, ParticlePreset};
//!
//! let mut button = LikeButton::new(
//!     LikeButtonConfig::new()
//!         .max_clicks(3)
//!         .preset(ParticlePreset::Burst),
//! );
//!
//! let mut rng = || 0.5;
//! let mut event = PointerEvent::new(PointerButton::Primary);
//! button.handle_click(&mut event, &mut rng);
//!
//! assert_eq!(button.clicks(), 1);
//! assert_eq!(button.particles().len(), 12);
//! ```

pub mod like_button;
pub mod particles;

pub use like_button::{
    ButtonPhase, ClickCount, InputEvent, Label, LabelContext, LikeButton, LikeButtonConfig,
};
pub use particles::{
    resolve, CustomShape, ParticleConfig, ParticleField, ParticleId, ParticleInstance,
    ParticlePreset, ParsePresetError, ResolvedParticleConfig, Shape, CLEANUP_BUFFER_MS,
};
