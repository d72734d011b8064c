use crate::core::{Display, Rect, SwitcherView, WindowId};
use anyhow::Result;
use std::time::Duration;

/// A window as reported by the window system.
#[derive(Debug, Clone, PartialEq)]
pub struct HostWindow {
    pub id: WindowId,
    pub pid: i32,
    pub app_name: String,
    pub title: String,
    pub frame: Rect,
    pub is_fullscreen: bool,
    pub is_minimized: bool,
    pub is_visible: bool,
}

/// Window system the daemon drives.
///
/// Enumeration never fails; an unavailable API yields an empty list.
/// Mutations report failures so callers can log them.
pub trait Host {
    fn displays(&self) -> Vec<Display>;

    /// Standard, non-minimized windows in the window system's order.
    fn windows(&self) -> Vec<HostWindow>;

    fn focused_window(&self) -> Option<HostWindow>;

    fn set_frame(&self, window_id: WindowId, frame: Rect) -> Result<()>;

    fn maximize(&self, window_id: WindowId) -> Result<()>;

    fn focus(&self, window_id: WindowId) -> Result<()>;

    /// Transient message near `anchor`, dismissed after `duration`.
    fn show_alert(&self, message: &str, anchor: Rect, duration: Duration);

    fn show_switcher(&self, view: &SwitcherView);

    fn hide_switcher(&self);
}

#[cfg(test)]
impl HostWindow {
    pub fn new(id: WindowId, title: &str, app_name: &str) -> Self {
        Self {
            id,
            pid: 100 + id as i32,
            app_name: app_name.to_string(),
            title: title.to_string(),
            frame: Rect::new(100.0, 100.0, 800.0, 600.0),
            is_fullscreen: false,
            is_minimized: false,
            is_visible: true,
        }
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    pub enum HostCall {
        SetFrame(WindowId, Rect),
        Maximize(WindowId),
        Focus(WindowId),
        Alert(String),
        ShowSwitcher(SwitcherView),
        HideSwitcher,
    }

    /// In-memory host that records every mutation.
    #[derive(Debug, Default)]
    pub struct FakeHost {
        pub displays: Vec<Display>,
        pub windows: RefCell<Vec<HostWindow>>,
        pub focused: Option<WindowId>,
        pub calls: RefCell<Vec<HostCall>>,
    }

    impl FakeHost {
        pub fn new(displays: Vec<Display>, windows: Vec<HostWindow>) -> Self {
            Self {
                displays,
                windows: RefCell::new(windows),
                ..Default::default()
            }
        }

        pub fn single_display() -> Self {
            Self::new(
                vec![Display::new(
                    1,
                    Rect::new(0.0, 0.0, 1920.0, 1080.0),
                    Rect::new(0.0, 0.0, 1920.0, 1080.0),
                )],
                vec![],
            )
        }

        pub fn with_focused(mut self, window_id: WindowId) -> Self {
            self.focused = Some(window_id);
            self
        }

        pub fn remove_window(&self, window_id: WindowId) {
            self.windows.borrow_mut().retain(|w| w.id != window_id);
        }

        pub fn calls(&self) -> Vec<HostCall> {
            self.calls.borrow().clone()
        }

        fn ensure_exists(&self, window_id: WindowId) -> Result<()> {
            if self.windows.borrow().iter().any(|w| w.id == window_id) {
                Ok(())
            } else {
                anyhow::bail!("window {} no longer exists", window_id)
            }
        }
    }

    impl Host for FakeHost {
        fn displays(&self) -> Vec<Display> {
            self.displays.clone()
        }

        fn windows(&self) -> Vec<HostWindow> {
            self.windows.borrow().clone()
        }

        fn focused_window(&self) -> Option<HostWindow> {
            let id = self.focused?;
            self.windows.borrow().iter().find(|w| w.id == id).cloned()
        }

        fn set_frame(&self, window_id: WindowId, frame: Rect) -> Result<()> {
            self.ensure_exists(window_id)?;
            self.calls
                .borrow_mut()
                .push(HostCall::SetFrame(window_id, frame));
            Ok(())
        }

        fn maximize(&self, window_id: WindowId) -> Result<()> {
            self.ensure_exists(window_id)?;
            self.calls.borrow_mut().push(HostCall::Maximize(window_id));
            Ok(())
        }

        fn focus(&self, window_id: WindowId) -> Result<()> {
            self.ensure_exists(window_id)?;
            self.calls.borrow_mut().push(HostCall::Focus(window_id));
            Ok(())
        }

        fn show_alert(&self, message: &str, _anchor: Rect, _duration: Duration) {
            self.calls
                .borrow_mut()
                .push(HostCall::Alert(message.to_string()));
        }

        fn show_switcher(&self, view: &SwitcherView) {
            self.calls
                .borrow_mut()
                .push(HostCall::ShowSwitcher(view.clone()));
        }

        fn hide_switcher(&self) {
            self.calls.borrow_mut().push(HostCall::HideSwitcher);
        }
    }
}
