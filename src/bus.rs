//! One-way notifications from view components to the controller.
//!
//! Views publish and move on; nothing is returned to the publisher. The
//! controller drains the queue once the current input has been handled.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A preview item was activated. Carries the book id.
    BookSelected(String),
}

#[derive(Debug, Default)]
pub struct NotificationBus {
    queue: VecDeque<Notification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// Take every pending notification in publish order.
    pub fn drain(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
