mod accessibility;
mod display;
mod host;
mod hotkey;
mod workspace;

pub use host::MacHost;

use crate::config::Config;
use crate::daemon::{Daemon, Request};
use crate::ipc::{spawn_server, SOCKET_PATH};
use crate::pid;
use anyhow::{anyhow, bail, Result};
use core_foundation::runloop::{kCFRunLoopDefaultMode, CFRunLoop};
use std::sync::mpsc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the daemon on the main thread until a `Quit` request arrives.
pub fn run(config: Config) -> Result<()> {
    if let Some(pid) = pid::check_already_running() {
        bail!("shoji is already running (pid {})", pid);
    }

    if !accessibility::is_process_trusted() {
        bail!(
            "Accessibility permission is required. \
             Grant it in System Settings > Privacy & Security > Accessibility."
        );
    }

    pid::write_pid()?;
    let result = run_loop(config);

    pid::remove_pid();
    let _ = std::fs::remove_file(SOCKET_PATH);
    result
}

fn run_loop(config: Config) -> Result<()> {
    let (tx, rx) = mpsc::channel::<Request>();
    let mut daemon = Daemon::new(MacHost::new(), config);

    let _tap = hotkey::HotkeyTap::start(daemon.bindings(), tx.clone()).map_err(|e| anyhow!(e))?;
    let _server = spawn_server(tx)?;

    tracing::info!("shoji started");

    loop {
        CFRunLoop::run_in_mode(unsafe { kCFRunLoopDefaultMode }, POLL_INTERVAL, true);

        loop {
            match rx.try_recv() {
                Ok(request) => {
                    if !daemon.handle(request) {
                        tracing::info!("shoji stopping");
                        return Ok(());
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    bail!("Request channel closed");
                }
            }
        }
    }
}
