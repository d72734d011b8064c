use super::Rect;
use crate::host::HostWindow;

pub type WindowId = u32;

/// Point-in-time copy of one open window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub pid: i32,
    pub app_name: String,
    pub title: String,
    /// `"{title} - {app_name}"`, the text the switcher filters on.
    pub searchable: String,
    pub frame: Rect,
    pub is_fullscreen: bool,
    pub is_minimized: bool,
    pub is_visible: bool,
}

impl WindowRecord {
    pub fn from_host_window(window: &HostWindow) -> Self {
        Self {
            id: window.id,
            pid: window.pid,
            app_name: window.app_name.clone(),
            title: window.title.clone(),
            searchable: format!("{} - {}", window.title, window.app_name),
            frame: window.frame,
            is_fullscreen: window.is_fullscreen,
            is_minimized: window.is_minimized,
            is_visible: window.is_visible,
        }
    }

    pub fn to_info(&self, matched: bool) -> shoji_ipc::WindowInfo {
        shoji_ipc::WindowInfo {
            id: self.id,
            pid: self.pid,
            app_name: self.app_name.clone(),
            title: self.title.clone(),
            is_fullscreen: self.is_fullscreen,
            is_minimized: self.is_minimized,
            is_visible: self.is_visible,
            matched,
        }
    }
}
