//! Short-lived notifications
//!
//! Every toast is created with a deadline. The queue never schedules
//! anything itself: the host calls [`ToastQueue::expire`] with the current
//! time whenever it handles an event. Dismissing a toast before its deadline
//! removes it and its deadline together.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_LIFETIME)
    }
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Queue a toast that expires one lifetime after `now`. Returns its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            kind,
            expires_at: now + self.lifetime,
        });
        id
    }

    /// Remove a toast early. Returns false if it already expired.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter().position(|t| t.id == id) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every toast whose deadline is at or before `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<Toast> {
        let (expired, live): (Vec<Toast>, Vec<Toast>) =
            self.toasts.drain(..).partition(|t| t.expires_at <= now);
        self.toasts = live.into();
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();

        let a = queue.push("first", ToastKind::Error, now);
        let b = queue.push("second", ToastKind::Error, now);

        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().map(|t| t.message.as_str()), Some("second"));
    }

    #[test]
    fn test_expire_after_lifetime() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        let start = Instant::now();

        queue.push("saved", ToastKind::Success, start);
        assert!(queue.expire(start + Duration::from_secs(2)).is_empty());
        assert_eq!(queue.len(), 1);

        let expired = queue.expire(start + Duration::from_secs(3));
        assert_eq!(expired.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_toasts_expire_independently() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        let start = Instant::now();

        queue.push("old", ToastKind::Error, start);
        queue.push("new", ToastKind::Error, start + Duration::from_secs(2));

        queue.expire(start + Duration::from_secs(3));
        let left: Vec<_> = queue.iter().map(|t| t.message.clone()).collect();
        assert_eq!(left, vec!["new".to_string()]);

        assert!(queue.expire(start + Duration::from_millis(4999)).is_empty());
        assert_eq!(queue.expire(start + Duration::from_secs(5)).len(), 1);
    }

    #[test]
    fn test_dismiss_cancels_deadline() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();

        let id = queue.push("oops", ToastKind::Error, now);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.expire(now + Duration::from_secs(3)).is_empty());
    }
}
