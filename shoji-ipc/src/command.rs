use crate::Region;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    MoveToRegion { region: Region },
    Maximize,
    MoveToScreen { direction: ScreenDirection },
    ToggleSwitcher,
    /// Replaces the switcher's filter text. Keystrokes are not captured while
    /// the switcher is open; text only arrives through this command
    /// (`shoji switcher input TEXT`).
    SwitcherInput { text: String },
    /// Focuses the first window matching the current filter text and closes
    /// the switcher. With no text set through `SwitcherInput` it only closes.
    SwitcherCommit,
    ListWindows {
        #[serde(default)]
        filter: Option<String>,
    },
    ListBindings,
    Quit,
}

impl Command {
    /// Whether a held-down hotkey should keep re-sending this command.
    pub fn is_repeatable(&self) -> bool {
        matches!(
            self,
            Command::MoveToRegion { .. } | Command::Maximize | Command::MoveToScreen { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenDirection {
    Next,
    Prev,
}

impl FromStr for ScreenDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "next" => Ok(ScreenDirection::Next),
            "prev" | "previous" => Ok(ScreenDirection::Prev),
            _ => Err(format!("Unknown screen direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Error { message: String },
    Windows { windows: Vec<WindowInfo> },
    Bindings { bindings: Vec<BindingInfo> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: u32,
    pub pid: i32,
    pub app_name: String,
    pub title: String,
    pub is_fullscreen: bool,
    pub is_minimized: bool,
    pub is_visible: bool,
    /// False when the entry is shown dimmed because it does not match the filter.
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingInfo {
    pub hotkey: String,
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_format() {
        let cmd = Command::MoveToRegion {
            region: Region::TopLeftSix,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"type":"move_to_region","region":"topLeftSix"}"#);
    }

    #[test]
    fn test_list_windows_filter_defaults_to_none() {
        let cmd: Command = serde_json::from_str(r#"{"type":"list_windows"}"#).unwrap();
        assert_eq!(cmd, Command::ListWindows { filter: None });
    }

    #[test]
    fn test_switcher_commands_are_not_repeatable() {
        assert!(Command::Maximize.is_repeatable());
        assert!(!Command::ToggleSwitcher.is_repeatable());
        assert!(!Command::SwitcherCommit.is_repeatable());
    }

    #[test]
    fn test_screen_direction_from_str() {
        assert_eq!("next".parse(), Ok(ScreenDirection::Next));
        assert_eq!("Prev".parse(), Ok(ScreenDirection::Prev));
        assert_eq!("previous".parse(), Ok(ScreenDirection::Prev));
        assert!("up".parse::<ScreenDirection>().is_err());
    }
}
