// Navigation history port - the location fragment and its back/forward stack
use crate::model::{fragment_text, TargetId};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use tracing::debug;

/// How a fragment write affects the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Add a new entry, dropping any forward entries.
    Push,
    /// Overwrite the current entry.
    Replace,
}

/// Sent to listeners when the fragment changes from outside the controller
/// (back/forward, an edited address, a followed link).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentChange {
    pub old: String,
    pub new: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Location and history capability consumed by the scroll-sync controller.
///
/// `set_fragment` behaves like `pushState`/`replaceState`: it never notifies
/// listeners, so writes made by the controller cannot feed back into it.
pub trait HistoryPort {
    /// Current fragment without the leading `#`; empty when there is none.
    fn fragment(&self) -> String;
    fn set_fragment(&mut self, id: &TargetId, mode: HistoryMode);
    fn on_fragment_change(&mut self, listener: Sender<FragmentChange>) -> ListenerId;
    /// Returns false when the id was not registered.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

/// In-process history used by the desktop shell and in tests.
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    listeners: Vec<(ListenerId, Sender<FragmentChange>)>,
    next_listener: u64,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::with_location("")
    }

    /// Start with the location the shell was opened at (a deep link).
    pub fn with_location(raw: &str) -> Self {
        Self {
            entries: vec![fragment_text(raw).to_string()],
            index: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Follow a location typed into the address bar or opened from a link.
    /// Like a browser, an unchanged fragment neither adds an entry nor fires.
    pub fn set_location(&mut self, raw: &str) -> bool {
        let fragment = fragment_text(raw).to_string();
        let old = self.fragment();
        if fragment == old {
            return false;
        }
        self.push_entry(fragment.clone());
        self.notify(FragmentChange { old, new: fragment });
        true
    }

    pub fn back(&mut self) -> Option<String> {
        if self.index > 0 {
            let old = self.fragment();
            self.index -= 1;
            self.traversed(old)
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<String> {
        if self.index + 1 < self.entries.len() {
            let old = self.fragment();
            self.index += 1;
            self.traversed(old)
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of entries in the stack, current and forward included.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn traversed(&mut self, old: String) -> Option<String> {
        let new = self.fragment();
        if new != old {
            self.notify(FragmentChange {
                old,
                new: new.clone(),
            });
        }
        Some(new)
    }

    fn push_entry(&mut self, fragment: String) {
        // Remove any forward history when navigating to a new fragment
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment);
        self.index += 1;
    }

    fn notify(&mut self, change: FragmentChange) {
        debug!(old = %change.old, new = %change.new, listeners = self.listeners.len(), "fragment changed");
        // Listeners whose receiver is gone are dropped
        self.listeners
            .retain(|(_, tx)| tx.send(change.clone()).is_ok());
    }
}

impl HistoryPort for MemoryHistory {
    fn fragment(&self) -> String {
        self.entries[self.index].clone()
    }

    fn set_fragment(&mut self, id: &TargetId, mode: HistoryMode) {
        match mode {
            HistoryMode::Push => self.push_entry(id.to_string()),
            HistoryMode::Replace => self.entries[self.index] = id.to_string(),
        }
    }

    fn on_fragment_change(&mut self, listener: Sender<FragmentChange>) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }
}
