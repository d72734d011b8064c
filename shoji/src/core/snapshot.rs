use super::filter::{filter_records, matches};
use super::{WindowId, WindowRecord};
use crate::host::{Host, HostWindow};
use std::collections::HashSet;

/// Open windows captured at one moment, in host enumeration order.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<WindowRecord>,
}

impl Snapshot {
    pub fn build(host: &dyn Host) -> Self {
        let snapshot = Self::from_windows(&host.windows());
        tracing::debug!("Window snapshot built with {} windows", snapshot.len());
        snapshot
    }

    pub fn from_windows(windows: &[HostWindow]) -> Self {
        let mut seen: HashSet<WindowId> = HashSet::new();
        let mut records = Vec::with_capacity(windows.len());

        for window in windows {
            if !seen.insert(window.id) {
                tracing::debug!(
                    "Duplicate window id {} ({}) ignored",
                    window.id,
                    window.app_name
                );
                continue;
            }
            records.push(WindowRecord::from_host_window(window));
        }

        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter()
    }

    pub fn filter(&self, text: &str) -> Vec<&WindowRecord> {
        filter_records(self.iter(), text)
    }

    /// Every record paired with whether it matches `text`.
    pub fn mark_matches<'a>(
        &'a self,
        text: &str,
    ) -> impl Iterator<Item = (&'a WindowRecord, bool)> + 'a {
        let needle = text.to_lowercase();
        self.records.iter().map(move |r| (r, matches(r, &needle)))
    }
}
