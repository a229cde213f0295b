//! Toast notifications.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Visible toasts, oldest first. Bounded so a burst cannot flood the screen.
#[derive(Clone, Debug)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
    max_visible: usize,
}

impl Notifications {
    pub fn new(max_visible: usize) -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
            max_visible: max_visible.max(1),
        }
    }

    /// Adds a toast, dropping the oldest when over the limit.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > self.max_visible {
            self.items.remove(0);
        }
        id
    }

    /// Removes a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut n = Notifications::default();
        let id = n.push(NotificationKind::Success, "Sent");
        assert_eq!(n.items().len(), 1);
        assert!(n.dismiss(id));
        assert!(!n.dismiss(id));
        assert!(n.is_empty());
    }

    #[test]
    fn test_oldest_dropped() {
        let mut n = Notifications::new(2);
        n.push(NotificationKind::Info, "a");
        n.push(NotificationKind::Info, "b");
        n.push(NotificationKind::Error, "c");
        let messages: Vec<&str> = n.items().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }
}
