#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

mod config;
mod core;
mod daemon;
mod effect;
mod host;
mod hotkey;
mod ipc;
#[cfg(target_os = "macos")]
mod macos;
mod pid;

use anyhow::{bail, Result};
use argh::FromArgs;
use ipc::IpcClient;
use shoji_ipc::{Command, Region, Response, ScreenDirection};
use tracing_subscriber::EnvFilter;

/// Keyboard-driven window placement for macOS.
#[derive(FromArgs)]
struct Args {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Start(StartArgs),
    Move(MoveArgs),
    Maximize(MaximizeArgs),
    Screen(ScreenArgs),
    Switcher(SwitcherArgs),
    Windows(WindowsArgs),
    Bindings(BindingsArgs),
    Quit(QuitArgs),
}

/// Run the daemon (default).
#[derive(FromArgs)]
#[argh(subcommand, name = "start")]
struct StartArgs {}

/// Move the focused window into a region.
#[derive(FromArgs)]
#[argh(subcommand, name = "move")]
struct MoveArgs {
    /// region name, e.g. left, topRight, centreThird
    #[argh(positional)]
    region: Region,
}

/// Maximize the focused window.
#[derive(FromArgs)]
#[argh(subcommand, name = "maximize")]
struct MaximizeArgs {}

/// Move the focused window to another screen.
#[derive(FromArgs)]
#[argh(subcommand, name = "screen")]
struct ScreenArgs {
    /// next or prev
    #[argh(positional)]
    direction: ScreenDirection,
}

/// Drive the window switcher. Filter text is set with `switcher input`;
/// keystrokes are not captured while the switcher is open.
#[derive(FromArgs)]
#[argh(subcommand, name = "switcher")]
struct SwitcherArgs {
    #[argh(subcommand)]
    action: SwitcherAction,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SwitcherAction {
    Toggle(SwitcherToggle),
    Input(SwitcherInput),
    Commit(SwitcherCommit),
}

/// Open or close the switcher.
#[derive(FromArgs)]
#[argh(subcommand, name = "toggle")]
struct SwitcherToggle {}

/// Replace the switcher filter text.
#[derive(FromArgs)]
#[argh(subcommand, name = "input")]
struct SwitcherInput {
    /// filter text
    #[argh(positional, default = "String::new()")]
    text: String,
}

/// Focus the first window matching the `input` text and close the switcher.
#[derive(FromArgs)]
#[argh(subcommand, name = "commit")]
struct SwitcherCommit {}

/// List switchable windows.
#[derive(FromArgs)]
#[argh(subcommand, name = "windows")]
struct WindowsArgs {
    /// only list windows whose "title - app" contains this text
    #[argh(positional)]
    filter: Option<String>,
}

/// List active hotkey bindings.
#[derive(FromArgs)]
#[argh(subcommand, name = "bindings")]
struct BindingsArgs {}

/// Stop the daemon.
#[derive(FromArgs)]
#[argh(subcommand, name = "quit")]
struct QuitArgs {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();

    let command = match args.command {
        None | Some(SubCommand::Start(_)) => return run_daemon(),
        Some(SubCommand::Move(a)) => Command::MoveToRegion { region: a.region },
        Some(SubCommand::Maximize(_)) => Command::Maximize,
        Some(SubCommand::Screen(a)) => Command::MoveToScreen {
            direction: a.direction,
        },
        Some(SubCommand::Switcher(a)) => match a.action {
            SwitcherAction::Toggle(_) => Command::ToggleSwitcher,
            SwitcherAction::Input(i) => Command::SwitcherInput { text: i.text },
            SwitcherAction::Commit(_) => Command::SwitcherCommit,
        },
        Some(SubCommand::Windows(a)) => Command::ListWindows { filter: a.filter },
        Some(SubCommand::Bindings(_)) => Command::ListBindings,
        Some(SubCommand::Quit(_)) => Command::Quit,
    };

    send(&command)
}

fn send(command: &Command) -> Result<()> {
    let mut client = IpcClient::connect()?;
    match client.send(command)? {
        Response::Ok => {}
        Response::Error { message } => bail!("{}", message),
        Response::Windows { windows } => {
            for w in windows {
                let marker = if w.matched { '*' } else { ' ' };
                let state = if w.is_fullscreen {
                    "fullscreen"
                } else if !w.is_visible {
                    "hidden"
                } else {
                    ""
                };
                println!(
                    "{} {}\t{}\t{}\t{}\t{}",
                    marker, w.id, w.pid, w.app_name, w.title, state
                );
            }
        }
        Response::Bindings { bindings } => {
            for b in bindings {
                println!("{}\t{}", b.hotkey, serde_json::to_string(&b.command)?);
            }
        }
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn run_daemon() -> Result<()> {
    tracing::info!("shoji starting");
    macos::run(config::Config::load())
}

#[cfg(not(target_os = "macos"))]
fn run_daemon() -> Result<()> {
    bail!("The shoji daemon requires macOS")
}
