use super::{
    display_for_frame, label_for, neighbour_display, Rect, SelectorSession, Snapshot,
};
use crate::effect::{CommandResult, Effect};
use crate::host::Host;
use shoji_ipc::{Command, Region, Response, ScreenDirection};

const NOTHING_TO_MOVE: &str = "Nothing to move";
const NO_OTHER_SCREEN: &str = "No other screen";

pub struct State {
    /// Open switcher, if any.
    selector: Option<SelectorSession>,
}

impl State {
    pub fn new() -> Self {
        Self { selector: None }
    }

    #[cfg(test)]
    pub fn is_switcher_open(&self) -> bool {
        self.selector.is_some()
    }

    /// Resolves `cmd` against the current window system state.
    ///
    /// `ListBindings` and `Quit` belong to the daemon loop and are answered
    /// there; here they yield an error response.
    pub fn handle_command(&mut self, host: &dyn Host, cmd: &Command) -> CommandResult {
        match cmd {
            Command::MoveToRegion { region } => self.move_to_region(host, *region),
            Command::Maximize => self.maximize(host),
            Command::MoveToScreen { direction } => self.move_to_screen(host, *direction),
            Command::ToggleSwitcher => self.toggle_switcher(host),
            Command::SwitcherInput { text } => self.switcher_input(host, text),
            Command::SwitcherCommit => self.switcher_commit(),
            Command::ListWindows { filter } => {
                let snapshot = Snapshot::build(host);
                let windows = snapshot
                    .filter(filter.as_deref().unwrap_or(""))
                    .into_iter()
                    .map(|record| record.to_info(true))
                    .collect();
                CommandResult::with_response(Response::Windows { windows })
            }
            Command::ListBindings | Command::Quit => {
                CommandResult::error(format!("{:?} is handled by the daemon", cmd))
            }
        }
    }

    fn move_to_region(&self, host: &dyn Host, region: Region) -> CommandResult {
        if region == Region::Maximized {
            return self.maximize(host);
        }

        let Some(window) = host.focused_window() else {
            return nothing_to_move(host);
        };

        let displays = host.displays();
        let Some(display) = display_for_frame(&displays, &window.frame) else {
            return CommandResult::error("No display available");
        };

        let frame = display.visible_frame.sub_frame(region);
        tracing::debug!(
            "Moving [{}] {} ({}) to {}: {:?}",
            window.id,
            window.title,
            window.app_name,
            region,
            frame
        );

        CommandResult::ok_with_effects(vec![
            Effect::SetWindowFrame {
                window_id: window.id,
                frame,
            },
            Effect::ShowAlert {
                message: label_for(region).to_string(),
                anchor: frame,
            },
        ])
    }

    fn maximize(&self, host: &dyn Host) -> CommandResult {
        let Some(window) = host.focused_window() else {
            return nothing_to_move(host);
        };

        let displays = host.displays();
        let anchor = display_for_frame(&displays, &window.frame)
            .map(|d| d.visible_frame)
            .unwrap_or(window.frame);

        CommandResult::ok_with_effects(vec![
            Effect::MaximizeWindow {
                window_id: window.id,
            },
            Effect::ShowAlert {
                message: label_for(Region::Maximized).to_string(),
                anchor,
            },
        ])
    }

    fn move_to_screen(&self, host: &dyn Host, direction: ScreenDirection) -> CommandResult {
        let Some(window) = host.focused_window() else {
            return nothing_to_move(host);
        };

        let displays = host.displays();
        let Some(current) = display_for_frame(&displays, &window.frame) else {
            return CommandResult::error("No display available");
        };

        let Some(target) = neighbour_display(&displays, current.id, direction) else {
            tracing::debug!("No display {:?} of {}", direction, current.id);
            return CommandResult::ok_with_effects(vec![Effect::ShowAlert {
                message: NO_OTHER_SCREEN.to_string(),
                anchor: current.visible_frame,
            }]);
        };

        let frame = window
            .frame
            .translate_between(&current.visible_frame, &target.visible_frame);
        tracing::debug!(
            "Moving [{}] from display {} to {}: {:?}",
            window.id,
            current.id,
            target.id,
            frame
        );

        CommandResult::ok_with_effects(vec![Effect::SetWindowFrame {
            window_id: window.id,
            frame,
        }])
    }

    fn toggle_switcher(&mut self, host: &dyn Host) -> CommandResult {
        if self.selector.take().is_some() {
            tracing::debug!("Switcher closed");
            return CommandResult::ok_with_effects(vec![Effect::HideSwitcher]);
        }

        let session = SelectorSession::open(Snapshot::build(host));
        let view = session.view();
        self.selector = Some(session);
        tracing::debug!("Switcher opened with {} windows", view.entries.len());

        CommandResult::with_response(Response::Windows {
            windows: view.infos(),
        })
        .with_effects(vec![Effect::ShowSwitcher(view)])
    }

    fn switcher_input(&mut self, host: &dyn Host, text: &str) -> CommandResult {
        let Some(session) = self.selector.as_mut() else {
            return CommandResult::error("Switcher is not open");
        };

        session.update(text, Snapshot::build(host));
        let view = session.view();

        CommandResult::with_response(Response::Windows {
            windows: view.infos(),
        })
        .with_effects(vec![Effect::ShowSwitcher(view)])
    }

    fn switcher_commit(&mut self) -> CommandResult {
        let Some(session) = self.selector.take() else {
            tracing::debug!("Commit ignored, switcher is not open");
            return CommandResult::ok();
        };

        let mut effects = Vec::new();
        match session.commit_target() {
            Some(window_id) => {
                tracing::info!("Switcher focusing window {}", window_id);
                effects.push(Effect::FocusWindow { window_id });
            }
            None => {
                tracing::debug!("Switcher closed without a match for {:?}", session.text());
            }
        }
        effects.push(Effect::HideSwitcher);

        CommandResult::ok_with_effects(effects)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

fn nothing_to_move(host: &dyn Host) -> CommandResult {
    let anchor = host
        .displays()
        .first()
        .map(|d| d.visible_frame)
        .unwrap_or_else(Rect::default);

    CommandResult::ok_with_effects(vec![Effect::ShowAlert {
        message: NOTHING_TO_MOVE.to_string(),
        anchor,
    }])
}
