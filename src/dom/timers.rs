//! One-shot timers driven by an external clock
//!
//! The queue never reads the wall clock itself. The host advances it with
//! [`TimerQueue::advance_to`], which keeps the page logic deterministic under
//! test.

use std::fmt;
use std::time::Duration;

/// Handle returned when scheduling a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Deferred work the page can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Finish the entrance of a menu item (mark it visible)
    RevealItem(usize),
    /// Finish the exit of a menu item (take it out of layout)
    CollapseItem(usize),
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: Duration,
    task: TimerTask,
}

/// Pending timers ordered by deadline
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            due: self.now + delay,
            task,
        });
        id
    }

    /// Remove a pending timer, returning whether it was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Move the clock forward and return every timer that came due
    ///
    /// Timers are returned by deadline, ties in scheduling order. The clock is
    /// monotonic: an earlier reading than the current one is ignored.
    pub fn advance_to(&mut self, now: Duration) -> Vec<(TimerId, TimerTask)> {
        if now > self.now {
            self.now = now;
        }

        let current = self.now;
        let (mut due, rest): (Vec<Timer>, Vec<Timer>) =
            self.pending.drain(..).partition(|t| t.due <= current);
        self.pending = rest;

        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| (t.id, t.task)).collect()
    }
}

#[cfg(test)]
impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Advance the clock by a relative amount
    pub fn advance_by(&mut self, elapsed: Duration) -> Vec<(TimerId, TimerTask)> {
        let target = self.now + elapsed;
        self.advance_to(target)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let slow = queue.schedule(ms(300), TimerTask::CollapseItem(0));
        let fast = queue.schedule(ms(50), TimerTask::RevealItem(1));

        assert!(queue.advance_to(ms(49)).is_empty());

        let fired = queue.advance_to(ms(400));
        assert_eq!(
            fired,
            vec![
                (fast, TimerTask::RevealItem(1)),
                (slow, TimerTask::CollapseItem(0)),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_deadlines_keep_scheduling_order() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule(ms(50), TimerTask::RevealItem(2));
        let b = queue.schedule(ms(50), TimerTask::RevealItem(0));

        let fired: Vec<TimerId> = queue.advance_by(ms(50)).into_iter().map(|(id, _)| id).collect();
        assert_eq!(fired, vec![a, b]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(ms(10), TimerTask::RevealItem(0));

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.advance_by(ms(100)).is_empty());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut queue = TimerQueue::new();
        queue.advance_to(ms(500));
        queue.advance_to(ms(100));
        assert_eq!(queue.now(), ms(500));

        // Delays are relative to the latest reading
        let id = queue.schedule(ms(50), TimerTask::RevealItem(0));
        assert!(queue.advance_to(ms(520)).is_empty());
        assert!(queue.is_pending(id));
        assert_eq!(queue.advance_to(ms(550)), vec![(id, TimerTask::RevealItem(0))]);
    }
}
