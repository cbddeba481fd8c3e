//! Plaudit Animation Support
//!
//! Easing curves and single-threaded deferred execution.
//!
//! # Features
//!
//! - **Easing Curves**: Named timing functions applied to normalized progress
//! - **Timer Queue**: Millisecond-resolution one-shot deferrals with
//!   cancellable handles, pumped by the host each frame
//! - **Frame Queue**: Frame-count deferrals for sequencing state flips
//!   against the render pipeline (insert at rest, animate on a later tick)
//!
//! There is no background thread and no wall clock: the embedding layer
//! reports elapsed time through [`TimerQueue::tick`], which keeps the whole
//! pipeline deterministic and trivially testable.

pub mod easing;
pub mod scheduler;

pub use easing::{Easing, ParseEasingError};
pub use scheduler::{FrameQueue, FrameTaskId, TimerId, TimerQueue};
