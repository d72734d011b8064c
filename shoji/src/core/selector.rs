use super::{Rect, Snapshot, WindowId};

/// State of one open switcher. Dropped when the switcher closes.
#[derive(Debug, Clone)]
pub struct SelectorSession {
    snapshot: Snapshot,
    text: String,
}

impl SelectorSession {
    pub fn open(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the filter text and the snapshot it applies to.
    pub fn update(&mut self, text: &str, snapshot: Snapshot) {
        self.text = text.to_string();
        self.snapshot = snapshot;
    }

    /// Window to focus when the current text is confirmed.
    pub fn commit_target(&self) -> Option<WindowId> {
        if self.text.is_empty() {
            return None;
        }
        self.snapshot.filter(&self.text).first().map(|r| r.id)
    }

    pub fn view(&self) -> SwitcherView {
        let entries = self
            .snapshot
            .mark_matches(&self.text)
            .map(|(record, matched)| SwitcherEntry {
                window: record.to_info(matched),
                label: record.searchable.clone(),
                frame: record.frame,
            })
            .collect();

        SwitcherView {
            text: self.text.clone(),
            entries,
        }
    }
}

/// What the host draws for an open switcher: an input box plus one preview
/// per window, dimmed when it does not match the text.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitcherView {
    pub text: String,
    pub entries: Vec<SwitcherEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitcherEntry {
    pub window: shoji_ipc::WindowInfo,
    pub label: String,
    pub frame: Rect,
}

impl SwitcherView {
    pub fn infos(&self) -> Vec<shoji_ipc::WindowInfo> {
        self.entries.iter().map(|entry| entry.window.clone()).collect()
    }
}
