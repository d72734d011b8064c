use crate::config::Config;
use crate::core::State;
use crate::effect::apply_effects;
use crate::hotkey::{format_hotkey, Hotkey};
use crate::host::Host;
use shoji_ipc::{BindingInfo, Command, Response};
use tokio::sync::oneshot;

/// A command from a hotkey or an IPC client. Hotkey requests have no reply channel.
pub struct Request {
    pub command: Command,
    pub reply: Option<oneshot::Sender<Response>>,
}

impl Request {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            reply: None,
        }
    }

    pub fn with_reply(command: Command, reply: oneshot::Sender<Response>) -> Self {
        Self {
            command,
            reply: Some(reply),
        }
    }
}

/// Owns the command state and the host. Lives on the main thread.
pub struct Daemon<H: Host> {
    host: H,
    state: State,
    config: Config,
    bindings: Vec<(Hotkey, Command)>,
}

impl<H: Host> Daemon<H> {
    pub fn new(host: H, config: Config) -> Self {
        let bindings = config.resolve_bindings();
        Self {
            host,
            state: State::new(),
            config,
            bindings,
        }
    }

    pub fn bindings(&self) -> &[(Hotkey, Command)] {
        &self.bindings
    }

    /// Handles one request and replies to it. Returns false once the daemon should stop.
    pub fn handle(&mut self, request: Request) -> bool {
        let Request { command, reply } = request;
        let mut running = true;

        let response = match command {
            Command::Quit => {
                tracing::info!("Quit requested");
                running = false;
                Response::Ok
            }
            Command::ListBindings => Response::Bindings {
                bindings: self
                    .bindings
                    .iter()
                    .map(|(hotkey, command)| BindingInfo {
                        hotkey: format_hotkey(hotkey),
                        command: command.clone(),
                    })
                    .collect(),
            },
            command => {
                let result = self.state.handle_command(&self.host, &command);
                apply_effects(&self.host, result.effects, self.config.alert_duration());
                result.response
            }
        };

        if let Some(reply) = reply {
            if reply.send(response).is_err() {
                tracing::debug!("IPC client went away before the reply");
            }
        }

        running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{FakeHost, HostCall};
    use crate::host::HostWindow;
    use shoji_ipc::Region;

    fn daemon() -> Daemon<FakeHost> {
        let host = FakeHost::single_display();
        host.windows.borrow_mut().extend([
            HostWindow::new(1, "Terminal", "Terminal"),
            HostWindow::new(2, "Notes", "Notes"),
        ]);
        Daemon::new(host.with_focused(1), Config::default())
    }

    fn ask(daemon: &mut Daemon<FakeHost>, command: Command) -> (bool, Response) {
        let (tx, mut rx) = oneshot::channel();
        let running = daemon.handle(Request::with_reply(command, tx));
        (running, rx.try_recv().unwrap())
    }

    #[test]
    fn test_move_applies_frame_and_alert() {
        let mut daemon = daemon();
        let (running, response) = ask(
            &mut daemon,
            Command::MoveToRegion {
                region: Region::Left,
            },
        );

        assert!(running);
        assert_eq!(response, Response::Ok);
        assert_eq!(
            daemon.host.calls(),
            vec![
                HostCall::SetFrame(1, crate::core::Rect::new(0.0, 0.0, 960.0, 1080.0)),
                HostCall::Alert("←".to_string()),
            ]
        );
    }

    #[test]
    fn test_switcher_focus_on_vanished_window_still_closes() {
        let mut daemon = daemon();
        ask(&mut daemon, Command::ToggleSwitcher);
        ask(
            &mut daemon,
            Command::SwitcherInput {
                text: "notes".to_string(),
            },
        );
        daemon.host.remove_window(2);

        let (running, response) = ask(&mut daemon, Command::SwitcherCommit);

        assert!(running);
        assert_eq!(response, Response::Ok);
        assert_eq!(daemon.host.calls().last(), Some(&HostCall::HideSwitcher));
        assert!(!daemon.host.calls().contains(&HostCall::Focus(2)));
    }

    #[test]
    fn test_list_bindings_reports_resolved_table() {
        let mut daemon = daemon();
        let (_, response) = ask(&mut daemon, Command::ListBindings);

        let Response::Bindings { bindings } = response else {
            panic!("expected bindings");
        };
        assert_eq!(bindings.len(), daemon.bindings().len());
        assert!(bindings
            .iter()
            .any(|b| b.hotkey == "cmd-alt-ctrl-space" && b.command == Command::ToggleSwitcher));
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut daemon = daemon();
        let (running, response) = ask(&mut daemon, Command::Quit);
        assert!(!running);
        assert_eq!(response, Response::Ok);
    }

    #[test]
    fn test_hotkey_request_without_reply() {
        let mut daemon = daemon();
        assert!(daemon.handle(Request::new(Command::Maximize)));
        assert_eq!(daemon.host.calls()[0], HostCall::Maximize(1));
    }
}
