//! Bounded activity feed shared by frontends.
use std::collections::VecDeque;

/// What kind of line a message is, for styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKind {
    /// Something happened (picked up, equipped, dropped).
    Activity,
    /// Guidance for the player (key help, unusable target).
    Hint,
    /// Something went wrong (inventory full).
    Alert,
}

/// Single feed entry. Consecutive identical lines collapse into one entry
/// with a repeat count, roguelike style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    pub repeats: u32,
}

impl Message {
    fn new(text: String, kind: MessageKind) -> Self {
        Self {
            text,
            kind,
            repeats: 1,
        }
    }

    /// Display text including the repeat suffix (`"Torch equipped (x3)"`).
    pub fn display(&self) -> String {
        if self.repeats > 1 {
            format!("{} (x{})", self.text, self.repeats)
        } else {
            self.text.clone()
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, kind: MessageKind, text: impl Into<String>) {
        let text = text.into();
        if let Some(last) = self.entries.back_mut()
            && last.kind == kind
            && last.text == text
        {
            last.repeats += 1;
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Message::new(text, kind));
    }

    pub fn activity(&mut self, text: impl Into<String>) {
        self.record(MessageKind::Activity, text);
    }

    pub fn hint(&mut self, text: impl Into<String>) {
        self.record(MessageKind::Hint, text);
    }

    pub fn alert(&mut self, text: impl Into<String>) {
        self.record(MessageKind::Alert, text);
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Message> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_evicts_oldest_entries() {
        let mut log = MessageLog::new(2);
        log.activity("one");
        log.activity("two");
        log.activity("three");

        let texts: Vec<_> = log.recent(10).map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["three", "two"]);
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut log = MessageLog::new(8);
        log.hint("Nothing to equip");
        log.hint("Nothing to equip");
        log.hint("Nothing to equip");

        assert_eq!(log.len(), 1);
        let entry = log.recent(1).next().unwrap();
        assert_eq!(entry.repeats, 3);
        assert_eq!(entry.display(), "Nothing to equip (x3)");
    }

    #[test]
    fn kind_change_breaks_the_collapse_run() {
        let mut log = MessageLog::new(8);
        log.activity("Picked up Ration");
        log.alert("Picked up Ration");

        assert_eq!(log.len(), 2);
    }
}
