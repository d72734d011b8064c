use super::accessibility::AxElement;
use super::display::active_displays;
use super::workspace::{activate_app, app_name, running_apps};
use crate::core::{display_for_frame, Display, Rect, SwitcherView, WindowId};
use crate::host::{Host, HostWindow};
use anyhow::{anyhow, Context, Result};
use std::time::Duration;

const STANDARD_WINDOW: &str = "AXStandardWindow";

/// Accessibility-backed host.
///
/// Overlays are not drawn; they are emitted as `shoji::overlay` log events.
pub struct MacHost;

impl MacHost {
    pub fn new() -> Self {
        Self
    }

    /// Element for `window_id`, searched across every regular application.
    fn resolve(&self, window_id: WindowId) -> Option<(i32, AxElement)> {
        running_apps().into_iter().find_map(|app| {
            let element = AxElement::application(app.pid)?;
            element
                .windows()
                .into_iter()
                .find(|w| w.window_id() == Some(window_id))
                .map(|w| (app.pid, w))
        })
    }

    fn resolve_or_err(&self, window_id: WindowId) -> Result<(i32, AxElement)> {
        self.resolve(window_id)
            .ok_or_else(|| anyhow!("Window {} no longer exists", window_id))
    }
}

impl Default for MacHost {
    fn default() -> Self {
        Self::new()
    }
}

fn element_frame(element: &AxElement) -> Option<Rect> {
    let position = element.position()?;
    let size = element.size()?;
    Some(Rect::new(position.x, position.y, size.width, size.height))
}

fn host_window(
    element: &AxElement,
    pid: i32,
    app_name: &str,
    is_visible: bool,
) -> Option<HostWindow> {
    Some(HostWindow {
        id: element.window_id()?,
        pid,
        app_name: app_name.to_string(),
        title: element.string_attribute("AXTitle").unwrap_or_default(),
        frame: element_frame(element).unwrap_or_default(),
        is_fullscreen: element.bool_attribute("AXFullScreen").unwrap_or(false),
        is_minimized: element.bool_attribute("AXMinimized").unwrap_or(false),
        is_visible,
    })
}

impl Host for MacHost {
    fn displays(&self) -> Vec<Display> {
        active_displays()
    }

    fn windows(&self) -> Vec<HostWindow> {
        let mut windows = Vec::new();
        for app in running_apps() {
            let Some(element) = AxElement::application(app.pid) else {
                continue;
            };
            for window in element.windows() {
                if window.string_attribute("AXSubrole").as_deref() != Some(STANDARD_WINDOW) {
                    continue;
                }
                if let Some(w) = host_window(&window, app.pid, &app.name, !app.is_hidden) {
                    if !w.is_minimized {
                        windows.push(w);
                    }
                }
            }
        }
        windows
    }

    fn focused_window(&self) -> Option<HostWindow> {
        let system = AxElement::system_wide()?;
        let app = system.element_attribute("AXFocusedApplication")?;
        let window = app.element_attribute("AXFocusedWindow")?;
        let pid = app.pid()?;
        host_window(&window, pid, &app_name(pid), true)
    }

    fn set_frame(&self, window_id: WindowId, frame: Rect) -> Result<()> {
        let (_, element) = self.resolve_or_err(window_id)?;
        element
            .set_position(frame.x, frame.y)
            .and_then(|_| element.set_size(frame.width, frame.height))
            .with_context(|| format!("Failed to set frame of window {}", window_id))
    }

    fn maximize(&self, window_id: WindowId) -> Result<()> {
        let (_, element) = self.resolve_or_err(window_id)?;
        let current = element_frame(&element)
            .with_context(|| format!("Window {} has no frame", window_id))?;
        let displays = self.displays();
        let display = display_for_frame(&displays, &current)
            .with_context(|| format!("No display for window {}", window_id))?;
        let target = display.visible_frame;

        element
            .set_position(target.x, target.y)
            .and_then(|_| element.set_size(target.width, target.height))
            .with_context(|| format!("Failed to maximize window {}", window_id))
    }

    fn focus(&self, window_id: WindowId) -> Result<()> {
        let (pid, element) = self.resolve_or_err(window_id)?;
        if !activate_app(pid) {
            tracing::debug!("Application {} could not be activated", pid);
        }
        element.set_bool("AXMain", true)?;
        element
            .perform("AXRaise")
            .with_context(|| format!("Failed to raise window {}", window_id))
    }

    fn show_alert(&self, message: &str, anchor: Rect, duration: Duration) {
        let (x, y) = anchor.center();
        tracing::info!(
            target: "shoji::overlay",
            x,
            y,
            duration_ms = duration.as_millis() as u64,
            "{}",
            message
        );
    }

    fn show_switcher(&self, view: &SwitcherView) {
        tracing::info!(target: "shoji::overlay", text = %view.text, "switcher");
        for entry in &view.entries {
            tracing::info!(
                target: "shoji::overlay",
                id = entry.window.id,
                matched = entry.window.matched,
                "  {}",
                entry.label
            );
        }
    }

    fn hide_switcher(&self) {
        tracing::info!(target: "shoji::overlay", "switcher closed");
    }
}
