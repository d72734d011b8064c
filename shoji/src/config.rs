use crate::hotkey::{hotkey_from_parts, Hotkey};
use anyhow::{Context, Result};
use serde::Deserialize;
use shoji_ipc::{Command, Region, ScreenDirection};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_ALERT_DURATION_MS: u64 = 1000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub alert_duration_ms: u64,
    pub bindings: Vec<BindingConfig>,
}

/// One hotkey entry. Every field is optional and `command` is decoded per
/// entry, so a broken entry is reported and skipped instead of rejecting the
/// whole file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BindingConfig {
    pub mods: Option<Vec<String>>,
    pub key: Option<String>,
    pub command: Option<serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alert_duration_ms: DEFAULT_ALERT_DURATION_MS,
            bindings: default_bindings(),
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shoji").join("config.json"))
    }

    /// Reads the user config, falling back to defaults when it is missing or broken.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            tracing::warn!("No config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::error!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }

    /// Valid bindings as hotkeys. Incomplete or unparseable entries are logged
    /// and skipped; later entries for the same chord replace earlier ones.
    pub fn resolve_bindings(&self) -> Vec<(Hotkey, Command)> {
        let mut resolved: Vec<(Hotkey, Command)> = Vec::new();

        for (index, binding) in self.bindings.iter().enumerate() {
            let (Some(mods), Some(key), Some(command)) =
                (&binding.mods, &binding.key, &binding.command)
            else {
                tracing::warn!(
                    "Binding #{} is missing mods, key or command, skipped: {:?}",
                    index,
                    binding
                );
                continue;
            };

            let hotkey = match hotkey_from_parts(mods, key) {
                Ok(hotkey) => hotkey,
                Err(e) => {
                    tracing::warn!("Binding #{} skipped: {}", index, e);
                    continue;
                }
            };

            let command = match serde_json::from_value::<Command>(command.clone()) {
                Ok(command) => command,
                Err(e) => {
                    tracing::warn!("Binding #{} has an invalid command, skipped: {}", index, e);
                    continue;
                }
            };

            resolved.retain(|(existing, _)| *existing != hotkey);
            resolved.push((hotkey, command));
        }

        resolved
    }
}

fn binding(mods: &[&str], key: &str, command: Command) -> BindingConfig {
    BindingConfig {
        mods: Some(mods.iter().map(|m| m.to_string()).collect()),
        key: Some(key.to_string()),
        command: serde_json::to_value(command).ok(),
    }
}

fn default_bindings() -> Vec<BindingConfig> {
    const HYPER: &[&str] = &["ctrl", "alt", "cmd"];
    const SIX: &[&str] = &["ctrl", "alt", "shift"];

    let regions: [(&[&str], &str, Region); 20] = [
        (HYPER, "left", Region::Left),
        (HYPER, "right", Region::Right),
        (HYPER, "up", Region::Up),
        (HYPER, "down", Region::Down),
        (HYPER, "u", Region::TopLeft),
        (HYPER, "i", Region::TopRight),
        (HYPER, "j", Region::BottomLeft),
        (HYPER, "k", Region::BottomRight),
        (HYPER, "c", Region::Centre),
        (HYPER, "1", Region::LeftThird),
        (HYPER, "2", Region::CentreThird),
        (HYPER, "3", Region::RightThird),
        (HYPER, "4", Region::Left2Thirds),
        (HYPER, "5", Region::Right2Thirds),
        (SIX, "q", Region::TopLeftSix),
        (SIX, "w", Region::TopCentreSix),
        (SIX, "e", Region::TopRightSix),
        (SIX, "a", Region::BotLeftSix),
        (SIX, "s", Region::BotCentreSix),
        (SIX, "d", Region::BotRightSix),
    ];

    let mut bindings: Vec<BindingConfig> = regions
        .iter()
        .map(|(mods, key, region)| binding(mods, key, Command::MoveToRegion { region: *region }))
        .collect();

    bindings.extend([
        binding(HYPER, "m", Command::Maximize),
        binding(
            HYPER,
            "n",
            Command::MoveToScreen {
                direction: ScreenDirection::Next,
            },
        ),
        binding(
            HYPER,
            "p",
            Command::MoveToScreen {
                direction: ScreenDirection::Prev,
            },
        ),
        binding(HYPER, "space", Command::ToggleSwitcher),
        binding(HYPER, "return", Command::SwitcherCommit),
    ]);

    bindings
}
