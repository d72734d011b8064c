//! Hotkey chords and their textual form (`ctrl-alt-cmd-left`).
//!
//! Key codes are macOS virtual key codes; parsing itself is platform-neutral.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub key_code: u16,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub cmd: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    fn apply(&mut self, name: &str) -> Result<(), String> {
        match name.to_lowercase().as_str() {
            "cmd" | "super" | "command" => self.cmd = true,
            "alt" | "opt" | "option" => self.alt = true,
            "ctrl" | "control" => self.ctrl = true,
            "shift" => self.shift = true,
            "hyper" => {
                self.cmd = true;
                self.alt = true;
                self.ctrl = true;
            }
            _ => return Err(format!("Unknown modifier: {}", name)),
        }
        Ok(())
    }
}

/// Parses `mod-mod-key`, e.g. `ctrl-alt-left` or `hyper-space`.
pub fn parse_hotkey(key_str: &str) -> Result<Hotkey, String> {
    let parts: Vec<&str> = key_str.split('-').collect();
    let Some((key, mods)) = parts.split_last() else {
        return Err("Empty key string".to_string());
    };
    hotkey_from_parts(mods, key)
}

/// Builds a hotkey from separate modifier names and a key name.
pub fn hotkey_from_parts<S: AsRef<str>>(mods: &[S], key: &str) -> Result<Hotkey, String> {
    let mut modifiers = Modifiers::default();
    for name in mods {
        modifiers.apply(name.as_ref())?;
    }

    if modifiers == Modifiers::default() {
        return Err(format!("Hotkey '{}' has no modifiers", key));
    }

    Ok(Hotkey {
        key_code: parse_key_code(key)?,
        modifiers,
    })
}

pub fn format_hotkey(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.cmd {
        parts.push("cmd");
    }
    if hotkey.modifiers.alt {
        parts.push("alt");
    }
    if hotkey.modifiers.ctrl {
        parts.push("ctrl");
    }
    if hotkey.modifiers.shift {
        parts.push("shift");
    }
    parts.push(key_code_to_str(hotkey.key_code));
    parts.join("-")
}

const KEYS: &[(&str, u16)] = &[
    ("a", 0x00),
    ("s", 0x01),
    ("d", 0x02),
    ("f", 0x03),
    ("h", 0x04),
    ("g", 0x05),
    ("z", 0x06),
    ("x", 0x07),
    ("c", 0x08),
    ("v", 0x09),
    ("b", 0x0B),
    ("q", 0x0C),
    ("w", 0x0D),
    ("e", 0x0E),
    ("r", 0x0F),
    ("y", 0x10),
    ("t", 0x11),
    ("1", 0x12),
    ("2", 0x13),
    ("3", 0x14),
    ("4", 0x15),
    ("6", 0x16),
    ("5", 0x17),
    ("equal", 0x18),
    ("9", 0x19),
    ("7", 0x1A),
    ("minus", 0x1B),
    ("8", 0x1C),
    ("0", 0x1D),
    ("rightbracket", 0x1E),
    ("o", 0x1F),
    ("u", 0x20),
    ("leftbracket", 0x21),
    ("i", 0x22),
    ("p", 0x23),
    ("return", 0x24),
    ("l", 0x25),
    ("j", 0x26),
    ("quote", 0x27),
    ("k", 0x28),
    ("semicolon", 0x29),
    ("backslash", 0x2A),
    ("comma", 0x2B),
    ("slash", 0x2C),
    ("n", 0x2D),
    ("m", 0x2E),
    ("period", 0x2F),
    ("tab", 0x30),
    ("space", 0x31),
    ("grave", 0x32),
    ("delete", 0x33),
    ("escape", 0x35),
    ("f5", 0x60),
    ("f6", 0x61),
    ("f7", 0x62),
    ("f3", 0x63),
    ("f8", 0x64),
    ("f9", 0x65),
    ("f11", 0x67),
    ("f10", 0x6D),
    ("f12", 0x6F),
    ("f4", 0x76),
    ("f2", 0x78),
    ("f1", 0x7A),
    ("left", 0x7B),
    ("right", 0x7C),
    ("down", 0x7D),
    ("up", 0x7E),
];

fn parse_key_code(key: &str) -> Result<u16, String> {
    let key = key.to_lowercase();
    let name = match key.as_str() {
        "enter" => "return",
        "backspace" => "delete",
        "esc" => "escape",
        other => other,
    };
    KEYS.iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
        .ok_or_else(|| format!("Unknown key: {}", key))
}

fn key_code_to_str(code: u16) -> &'static str {
    KEYS.iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
        .unwrap_or("unknown")
}
