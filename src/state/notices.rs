//! Notification queue replacing the blocking alerts of the old UI.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Severity of a notice, mapped to styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Ordered queue of notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice, returning its id for later dismissal.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
