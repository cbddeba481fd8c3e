//! Particle shape variants
//!
//! A shape is either one of the built-in named glyphs or a caller-supplied
//! renderer. The tag is explicit so dispatch never inspects the value for a
//! "render key"; [`Shape::path_data`] is the single mapping from variant to
//! drawing routine.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// SVG inner elements for the heart glyph
pub const HEART_PATH: &str =
    r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#;

/// SVG inner elements for the circle glyph
pub const CIRCLE_PATH: &str = r#"<circle cx="12" cy="12" r="10"/>"#;

/// SVG inner elements for the square glyph
pub const SQUARE_PATH: &str = r#"<rect x="3" y="3" width="18" height="18" rx="2"/>"#;

/// SVG inner elements for the sparkle glyph
pub const SPARKLE_PATH: &str =
    r#"<path d="M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"/>"#;

/// SVG inner elements for the star glyph
pub const STAR_PATH: &str =
    r#"<path d="M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z"/>"#;

/// A caller-supplied shape renderer
///
/// Wraps an opaque drawing routine producing SVG inner elements. Compared
/// by identity: two handles are equal only if they wrap the same allocation.
#[derive(Clone)]
pub struct CustomShape(Arc<dyn Fn() -> String + Send + Sync>);

impl CustomShape {
    pub fn new(render: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    pub fn path_data(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for CustomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomShape(..)")
    }
}

impl PartialEq for CustomShape {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The glyph a particle renders as
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Heart,
    Circle,
    Square,
    Sparkle,
    Star,
    Custom(CustomShape),
}

impl Shape {
    /// Map the variant to its drawing routine
    pub fn path_data(&self) -> Cow<'static, str> {
        match self {
            Shape::Heart => Cow::Borrowed(HEART_PATH),
            Shape::Circle => Cow::Borrowed(CIRCLE_PATH),
            Shape::Square => Cow::Borrowed(SQUARE_PATH),
            Shape::Sparkle => Cow::Borrowed(SPARKLE_PATH),
            Shape::Star => Cow::Borrowed(STAR_PATH),
            Shape::Custom(custom) => Cow::Owned(custom.path_data()),
        }
    }

    /// The kebab-case name used in config files
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Heart => "heart",
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Sparkle => "sparkle",
            Shape::Star => "star",
            Shape::Custom(_) => "custom",
        }
    }

    /// Resolve a shape name, falling back to the default glyph
    ///
    /// Unknown names are a caller mistake, not a runtime fault: they log a
    /// warning and resolve to [`Shape::Heart`].
    pub fn from_name(name: &str) -> Shape {
        match name {
            "heart" => Shape::Heart,
            "circle" => Shape::Circle,
            "square" => Shape::Square,
            "sparkle" => Shape::Sparkle,
            "star" => Shape::Star,
            other => {
                tracing::warn!("unknown particle shape {other:?}, using heart");
                Shape::Heart
            }
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Heart
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <Cow<'de, str> as Deserialize>::deserialize(deserializer)?;
        if name == "custom" {
            // renderer references are not data; nothing to reconstruct
            return Err(de::Error::custom(
                "custom shapes cannot be loaded from config",
            ));
        }
        Ok(Shape::from_name(&name))
    }
}
