//! Status line history shown beside the options panel.
use std::collections::VecDeque;

/// Severity level for panel messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Store revision observed when the message was recorded.
    pub revision: u64,
    pub level: MessageLevel,
}

/// Bounded history of panel messages; the oldest entry is dropped first.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
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

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn info(&mut self, revision: u64, text: impl Into<String>) {
        self.push(MessageEntry {
            text: text.into(),
            revision,
            level: MessageLevel::Info,
        });
    }

    pub fn warning(&mut self, revision: u64, text: impl Into<String>) {
        self.push(MessageEntry {
            text: text.into(),
            revision,
            level: MessageLevel::Warning,
        });
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
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
    fn drops_oldest_entry_at_capacity() {
        let mut log = MessageLog::new(2);
        log.info(1, "first");
        log.info(2, "second");
        log.warning(3, "third");

        let texts: Vec<_> = log.recent(5).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["third", "second"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut log = MessageLog::new(0);
        log.info(1, "only");
        assert_eq!(log.recent(1).next().map(|entry| entry.revision), Some(1));
    }
}
