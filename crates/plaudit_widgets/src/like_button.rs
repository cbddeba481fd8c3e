//! Like button widget with click-count state machine
//!
//! The LikeButton widget provides:
//! - Click counting toward a configurable maximum, with a derived
//!   liquid-fill level
//! - Controlled (host-owned) or uncontrolled (widget-owned) click count
//! - Particle bursts on qualifying clicks, preset- or override-configured
//! - Right-click and Shift+Enter alternate activation paths that never
//!   change the count
//! - Accessibility label generation with host override hooks
//!
//! The button has two phases: `Idle` while clicks remain, `Maxed` once the
//! count reaches the maximum. Maxed is terminal for increments until the
//! count is reset externally; the disabled guard silently swallows every
//! interaction in the meantime.

use plaudit_core::{KeyCode, KeyEvent, PointerEvent};
use std::fmt;
use std::sync::Arc;

use crate::particles::{resolve, ParticleConfig, ParticleField, ParticlePreset};

/// Values handed to a custom label function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelContext {
    pub is_maxed: bool,
    pub remaining: u32,
    pub clicks: u32,
    pub max_clicks: u32,
}

/// Accessibility label source
#[derive(Clone, Default)]
pub enum Label {
    /// Built-in remaining-clicks / completed wording
    #[default]
    Auto,
    /// A fixed string, used verbatim
    Text(String),
    /// Host-supplied formatter, output used verbatim
    Custom(Arc<dyn Fn(&LabelContext) -> String + Send + Sync>),
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Auto => f.write_str("Label::Auto"),
            Label::Text(text) => write!(f, "Label::Text({text:?})"),
            Label::Custom(_) => f.write_str("Label::Custom(..)"),
        }
    }
}

/// Who owns the click count
///
/// `External` mirrors a host-held value: the widget reads it but never
/// writes it, and the host is expected to feed new values back through
/// [`LikeButton::set_clicks`] in response to click callbacks. `Internal`
/// is widget-owned state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickCount {
    External(u32),
    Internal(u32),
}

impl ClickCount {
    fn get(self) -> u32 {
        match self {
            ClickCount::External(value) | ClickCount::Internal(value) => value,
        }
    }
}

/// Interaction phase derived from the click count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Idle,
    Maxed,
}

/// The event that triggered a secondary activation
#[derive(Debug)]
pub enum InputEvent<'a> {
    Pointer(&'a PointerEvent),
    Key(&'a KeyEvent),
}

type ClickCallback = Box<dyn FnMut(u32, &PointerEvent)>;
type SecondaryCallback = Box<dyn FnMut(u32, InputEvent<'_>)>;

/// Like button configuration
#[derive(Clone, Debug)]
pub struct LikeButtonConfig {
    /// Clicks needed to fill the button completely
    pub max_clicks: u32,
    /// Starting count for an uncontrolled button
    pub initial_clicks: u32,
    /// Present when the host owns the count (controlled mode)
    pub controlled_clicks: Option<u32>,
    /// Explicit disabled flag, independent of the maxed state
    pub disabled: bool,
    /// Whether qualifying clicks spawn particle bursts
    pub particles_enabled: bool,
    /// Named preset layered over the defaults
    pub preset: Option<ParticlePreset>,
    /// Per-instance overrides layered over preset and defaults
    pub particle_overrides: Option<ParticleConfig>,
    /// Accessibility label source
    pub label: Label,
}

impl Default for LikeButtonConfig {
    fn default() -> Self {
        Self {
            max_clicks: 1,
            initial_clicks: 0,
            controlled_clicks: None,
            disabled: false,
            particles_enabled: true,
            preset: None,
            particle_overrides: None,
            label: Label::Auto,
        }
    }
}

impl LikeButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_clicks(mut self, max_clicks: u32) -> Self {
        self.max_clicks = max_clicks;
        self
    }

    pub fn initial_clicks(mut self, initial_clicks: u32) -> Self {
        self.initial_clicks = initial_clicks;
        self
    }

    /// Run in controlled mode with a host-owned count
    pub fn controlled(mut self, clicks: u32) -> Self {
        self.controlled_clicks = Some(clicks);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn particles(mut self, enabled: bool) -> Self {
        self.particles_enabled = enabled;
        self
    }

    pub fn preset(mut self, preset: ParticlePreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn particle_overrides(mut self, overrides: ParticleConfig) -> Self {
        self.particle_overrides = Some(overrides);
        self
    }

    pub fn label_text(mut self, text: impl Into<String>) -> Self {
        self.label = Label::Text(text.into());
        self
    }

    pub fn label_fn(
        mut self,
        format: impl Fn(&LabelContext) -> String + Send + Sync + 'static,
    ) -> Self {
        self.label = Label::Custom(Arc::new(format));
        self
    }
}

/// The like button state machine
pub struct LikeButton {
    count: ClickCount,
    max_clicks: u32,
    disabled: bool,
    particles_enabled: bool,
    preset: Option<ParticlePreset>,
    particle_overrides: Option<ParticleConfig>,
    label: Label,
    field: ParticleField,
    on_click: Option<ClickCallback>,
    on_right_click: Option<SecondaryCallback>,
}

impl LikeButton {
    pub fn new(config: LikeButtonConfig) -> Self {
        let max_clicks = if config.max_clicks == 0 {
            tracing::warn!("max_clicks of zero is not meaningful, using 1");
            1
        } else {
            config.max_clicks
        };
        let count = match config.controlled_clicks {
            Some(clicks) => ClickCount::External(clicks),
            None => ClickCount::Internal(config.initial_clicks),
        };
        Self {
            count,
            max_clicks,
            disabled: config.disabled,
            particles_enabled: config.particles_enabled,
            preset: config.preset,
            particle_overrides: config.particle_overrides,
            label: config.label,
            field: ParticleField::new(),
            on_click: None,
            on_right_click: None,
        }
    }

    /// Register the primary click callback, invoked with the new count
    pub fn on_click(&mut self, callback: impl FnMut(u32, &PointerEvent) + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    /// Register the secondary activation callback, invoked with the
    /// current (unchanged) count
    pub fn on_right_click(&mut self, callback: impl FnMut(u32, InputEvent<'_>) + 'static) {
        self.on_right_click = Some(Box::new(callback));
    }

    pub fn clicks(&self) -> u32 {
        self.count.get()
    }

    pub fn max_clicks(&self) -> u32 {
        self.max_clicks
    }

    pub fn is_maxed(&self) -> bool {
        self.clicks() >= self.max_clicks
    }

    pub fn phase(&self) -> ButtonPhase {
        if self.is_maxed() {
            ButtonPhase::Maxed
        } else {
            ButtonPhase::Idle
        }
    }

    /// Explicit flag OR maxed; every interaction path checks this
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.is_maxed()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Overwrite the click count (host updates in controlled mode,
    /// external resets in either mode)
    pub fn set_clicks(&mut self, clicks: u32) {
        self.count = match self.count {
            ClickCount::External(_) => ClickCount::External(clicks),
            ClickCount::Internal(_) => ClickCount::Internal(clicks),
        };
    }

    /// Return to zero clicks, leaving the maxed state
    pub fn reset(&mut self) {
        self.set_clicks(0);
    }

    /// Fill level in `[0, 100]`
    pub fn fill_percentage(&self) -> f32 {
        (self.clicks() as f32 / self.max_clicks as f32 * 100.0).clamp(0.0, 100.0)
    }

    /// Fill level scaled into `[min_baseline, 100]` for display
    ///
    /// The visual wave keeps a visible baseline even at zero clicks, but a
    /// maxed button always reads exactly 100 regardless of the baseline.
    pub fn visual_fill(&self, min_baseline: f32) -> f32 {
        if self.is_maxed() {
            return 100.0;
        }
        let baseline = min_baseline.clamp(0.0, 100.0);
        baseline + self.fill_percentage() * (100.0 - baseline) / 100.0
    }

    fn label_context(&self) -> LabelContext {
        let clicks = self.clicks();
        LabelContext {
            is_maxed: self.is_maxed(),
            remaining: self.max_clicks.saturating_sub(clicks),
            clicks,
            max_clicks: self.max_clicks,
        }
    }

    /// The accessibility label the host should expose
    pub fn accessibility_label(&self) -> String {
        let context = self.label_context();
        match &self.label {
            Label::Auto => {
                if context.is_maxed {
                    "Maximum likes reached".to_string()
                } else {
                    format!("Like, {} remaining", context.remaining)
                }
            }
            Label::Text(text) => text.clone(),
            Label::Custom(format) => format(&context),
        }
    }

    /// Handle a primary pointer press
    ///
    /// No-op while disabled or maxed. Otherwise advances the count (in
    /// uncontrolled mode), notifies the click callback with the new count,
    /// and spawns a burst unless particles are disabled.
    pub fn handle_click(&mut self, event: &mut PointerEvent, rng: &mut impl FnMut() -> f32) {
        if self.is_disabled() {
            tracing::trace!("click ignored while disabled");
            return;
        }
        let new_clicks = self.clicks() + 1;
        if let ClickCount::Internal(_) = self.count {
            self.count = ClickCount::Internal(new_clicks);
        }
        tracing::debug!(clicks = new_clicks, max = self.max_clicks, "like clicked");
        if let Some(on_click) = self.on_click.as_mut() {
            on_click(new_clicks, event);
        }
        if self.particles_enabled {
            let config = resolve(self.preset, self.particle_overrides.as_ref());
            self.field.spawn_burst(&config, rng);
        }
    }

    /// Handle a secondary pointer press
    ///
    /// Always suppresses the platform context menu; no-op while disabled.
    /// The callback sees the current count, never an incremented one.
    pub fn handle_right_click(&mut self, event: &mut PointerEvent) {
        event.prevent_default();
        if self.is_disabled() {
            tracing::trace!("right-click ignored while disabled");
            return;
        }
        let clicks = self.clicks();
        if let Some(on_right_click) = self.on_right_click.as_mut() {
            on_right_click(clicks, InputEvent::Pointer(event));
        }
    }

    /// Keyboard path for secondary activation
    ///
    /// Fires only on exactly Shift+Enter; any other combination passes
    /// through untouched. When it fires it mirrors a right-click,
    /// including default-action suppression and the disabled guard.
    pub fn handle_key_down(&mut self, event: &mut KeyEvent) {
        if event.key != KeyCode::Enter || !event.modifiers.shift_only() {
            return;
        }
        event.prevent_default();
        if self.is_disabled() {
            tracing::trace!("shift+enter ignored while disabled");
            return;
        }
        let clicks = self.clicks();
        if let Some(on_right_click) = self.on_right_click.as_mut() {
            on_right_click(clicks, InputEvent::Key(event));
        }
    }

    /// Pump particle lifecycle work; the host calls this once per frame
    pub fn tick(&mut self, dt_ms: f64) {
        self.field.tick(dt_ms);
    }

    /// The active particle set, for rendering
    pub fn particles(&self) -> &ParticleField {
        &self.field
    }

    /// Cancel all pending particle work and drop active instances
    pub fn clear_particles(&mut self) {
        self.field.clear();
    }
}
