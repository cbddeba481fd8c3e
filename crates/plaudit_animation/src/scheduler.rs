//! Deferred-execution scheduler
//!
//! One-shot deferrals for the widget layer, pumped by the host. Two queues:
//!
//! - [`TimerQueue`] defers a payload by a millisecond delay. The host calls
//!   `tick(dt_ms)` once per frame with elapsed time; due payloads come back
//!   in schedule order for the owner to apply.
//! - [`FrameQueue`] defers a payload by a number of frame boundaries. Used
//!   to sequence "state committed at rest" before "flipped to the animated
//!   target": a two-frame deferral guarantees the renderer observes the
//!   starting state before the ending state.
//!
//! Handles are generational slotmap keys, so cancelling an already-fired
//! deferral is a harmless no-op. Queues are owned values: dropping the
//! owner drops every pending deferral with it, which is the teardown
//! cancellation story — there is no global timer registry to leak into.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a pending timer deferral
    pub struct TimerId;
    /// Handle to a pending frame deferral
    pub struct FrameTaskId;
}

struct Timer<T> {
    remaining_ms: f64,
    seq: u64,
    payload: T,
}

/// One-shot millisecond deferrals with cancellable handles
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, Timer<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to come due after `delay_ms` of ticked time
    pub fn schedule(&mut self, delay_ms: f64, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(Timer {
            remaining_ms: delay_ms,
            seq,
            payload,
        })
    }

    /// Cancel a pending deferral, returning its payload if it had not fired
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|t| t.payload)
    }

    /// Advance time and collect every payload that came due
    ///
    /// Payloads are returned in schedule order, so overlapping deferrals
    /// that expire on the same tick fire oldest-first.
    pub fn tick(&mut self, dt_ms: f64) -> SmallVec<[T; 4]> {
        let mut due: SmallVec<[(u64, TimerId); 4]> = SmallVec::new();
        for (id, timer) in self.timers.iter_mut() {
            timer.remaining_ms -= dt_ms;
            if timer.remaining_ms <= 0.0 {
                due.push((timer.seq, id));
            }
        }
        due.sort_unstable_by_key(|&(seq, _)| seq);
        due.into_iter()
            .filter_map(|(_, id)| self.timers.remove(id))
            .map(|t| t.payload)
            .collect()
    }

    /// Drop every pending deferral
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct FrameTask<T> {
    frames_left: u32,
    seq: u64,
    payload: T,
}

/// One-shot frame-boundary deferrals
pub struct FrameQueue<T> {
    tasks: SlotMap<FrameTaskId, FrameTask<T>>,
    next_seq: u64,
}

impl<T> FrameQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to come due after `frames` boundaries
    ///
    /// `defer(1, ..)` fires on the next `tick`; `defer(2, ..)` fires on the
    /// one after, having let the renderer commit one frame in between.
    pub fn defer(&mut self, frames: u32, payload: T) -> FrameTaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert(FrameTask {
            frames_left: frames.max(1),
            seq,
            payload,
        })
    }

    /// Cancel a pending deferral, returning its payload if it had not fired
    pub fn cancel(&mut self, id: FrameTaskId) -> Option<T> {
        self.tasks.remove(id).map(|t| t.payload)
    }

    /// Cross one frame boundary and collect every payload that came due
    pub fn tick(&mut self) -> SmallVec<[T; 4]> {
        let mut due: SmallVec<[(u64, FrameTaskId); 4]> = SmallVec::new();
        for (id, task) in self.tasks.iter_mut() {
            task.frames_left -= 1;
            if task.frames_left == 0 {
                due.push((task.seq, id));
            }
        }
        due.sort_unstable_by_key(|&(seq, _)| seq);
        due.into_iter()
            .filter_map(|(_, id)| self.tasks.remove(id))
            .map(|t| t.payload)
            .collect()
    }

    /// Drop every pending deferral
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once_after_delay() {
        let mut queue = TimerQueue::new();
        queue.schedule(500.0, "cleanup");
        assert!(queue.tick(499.0).is_empty());
        assert_eq!(queue.tick(1.0).as_slice(), ["cleanup"]);
        assert!(queue.tick(1000.0).is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_timers_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300.0, 1);
        queue.schedule(100.0, 2);
        queue.schedule(200.0, 3);
        // all three expire within one large tick; order is schedule order
        assert_eq!(queue.tick(1000.0).as_slice(), [1, 2, 3]);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(100.0, "keep");
        let drop = queue.schedule(100.0, "drop");
        assert_eq!(queue.cancel(drop), Some("drop"));
        // cancelling twice (or after firing) is a no-op
        assert_eq!(queue.cancel(drop), None);
        assert_eq!(queue.tick(150.0).as_slice(), ["keep"]);
        assert_eq!(queue.cancel(keep), None);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut queue = TimerQueue::new();
        queue.schedule(10.0, 1);
        queue.schedule(20.0, 2);
        queue.clear();
        assert!(queue.tick(100.0).is_empty());
    }

    #[test]
    fn test_frame_deferral_counts_boundaries() {
        let mut frames = FrameQueue::new();
        frames.defer(2, "animate");
        assert!(frames.tick().is_empty());
        assert_eq!(frames.tick().as_slice(), ["animate"]);
        assert!(frames.tick().is_empty());
    }

    #[test]
    fn test_zero_frame_deferral_still_waits_one_tick() {
        let mut frames = FrameQueue::new();
        frames.defer(0, "next");
        assert_eq!(frames.tick().as_slice(), ["next"]);
    }

    #[test]
    fn test_frame_cancel() {
        let mut frames = FrameQueue::new();
        let id = frames.defer(2, "never");
        assert_eq!(frames.cancel(id), Some("never"));
        assert!(frames.tick().is_empty());
        assert!(frames.tick().is_empty());
    }
}
