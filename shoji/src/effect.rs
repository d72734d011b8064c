use crate::core::{Rect, SwitcherView, WindowId};
use crate::host::Host;
use shoji_ipc::Response;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetWindowFrame { window_id: WindowId, frame: Rect },
    MaximizeWindow { window_id: WindowId },
    FocusWindow { window_id: WindowId },
    ShowAlert { message: String, anchor: Rect },
    ShowSwitcher(SwitcherView),
    HideSwitcher,
}

pub struct CommandResult {
    pub response: Response,
    pub effects: Vec<Effect>,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self {
            response: Response::Ok,
            effects: vec![],
        }
    }

    pub fn ok_with_effects(effects: Vec<Effect>) -> Self {
        Self {
            response: Response::Ok,
            effects,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            response: Response::Error {
                message: message.into(),
            },
            effects: vec![],
        }
    }

    pub fn with_response(response: Response) -> Self {
        Self {
            response,
            effects: vec![],
        }
    }

    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = effects;
        self
    }
}

/// Runs `effects` in order against `host`.
///
/// A failing effect is logged and the rest still run: a window that vanished
/// between enumeration and the action must not abort the flow.
pub fn apply_effects(host: &dyn Host, effects: Vec<Effect>, alert_duration: Duration) {
    for effect in effects {
        match effect {
            Effect::SetWindowFrame { window_id, frame } => {
                if let Err(e) = host.set_frame(window_id, frame) {
                    tracing::warn!("Failed to move window {}: {:#}", window_id, e);
                }
            }
            Effect::MaximizeWindow { window_id } => {
                if let Err(e) = host.maximize(window_id) {
                    tracing::warn!("Failed to maximize window {}: {:#}", window_id, e);
                }
            }
            Effect::FocusWindow { window_id } => {
                if let Err(e) = host.focus(window_id) {
                    tracing::warn!("Failed to focus window {}: {:#}", window_id, e);
                }
            }
            Effect::ShowAlert { message, anchor } => {
                host.show_alert(&message, anchor, alert_duration);
            }
            Effect::ShowSwitcher(view) => host.show_switcher(&view),
            Effect::HideSwitcher => host.hide_switcher(),
        }
    }
}
