//! Plaudit Core Primitives
//!
//! This crate provides the foundational value types for the Plaudit widget
//! kit:
//!
//! - **Color**: Premultiplied-friendly RGBA color with palette constants
//! - **Sampling**: Scalar-or-range spans, uniform sampling, angle math
//! - **Events**: Pointer and keyboard event model for widget interaction
//!
//! # Example
//!
//! ```rust
//! use plaudit_core::sampling::{normalize_angle, Span};
//!
//! let span = Span::from(60.0..100.0);
//! let range = span.normalize();
//! assert!(range.min <= range.max);
//!
//! assert_eq!(normalize_angle(-90.0), 270.0);
//! ```

pub mod color;
pub mod events;
pub mod sampling;

pub use color::Color;
pub use events::{KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent};
pub use sampling::{normalize_angle, random_angle, Range, Span};
