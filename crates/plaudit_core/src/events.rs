//! Pointer and keyboard event model
//!
//! A minimal host-facing event surface: the embedding layer translates
//! platform input into these types and hands them to widget handlers.
//! Handlers may call `prevent_default()` to tell the host to suppress the
//! platform's default action (context menu, key scrolling, etc).

/// Which pointer button produced an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keyboard modifier state at event time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// True when shift is held and no other modifier is
    pub fn shift_only(&self) -> bool {
        *self == Self::SHIFT
    }
}

/// Keys the widget layer reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Space,
    Escape,
    Tab,
    Character(char),
}

/// A pointer press delivered to a widget
#[derive(Debug)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub x: f32,
    pub y: f32,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(button: PointerButton) -> Self {
        Self {
            button,
            x: 0.0,
            y: 0.0,
            default_prevented: false,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Ask the host to suppress the platform default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A key press delivered to a focused widget
#[derive(Debug)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            default_prevented: false,
        }
    }

    /// Ask the host to suppress the platform default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
