//! Hotkey encoding and display labels.
//!
//! Key codes are the host's virtual key codes; modifiers travel as a
//! compact bitmask so bindings can be stored in settings and compared
//! cheaply.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const CONTROL: u8 = 0b0000_0001;
    pub const OPTION: u8 = 0b0000_0010;
    pub const SHIFT: u8 = 0b0000_0100;
    pub const COMMAND: u8 = 0b0000_1000;

    const ALL: u8 = Self::CONTROL | Self::OPTION | Self::SHIFT | Self::COMMAND;

    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Decode a stored bitmask; unknown bits are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            bits: bits & Self::ALL,
        }
    }

    pub const fn bits(self) -> u8 {
        self.bits
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn control(self) -> bool {
        (self.bits & Self::CONTROL) != 0
    }

    pub const fn option(self) -> bool {
        (self.bits & Self::OPTION) != 0
    }

    pub const fn shift(self) -> bool {
        (self.bits & Self::SHIFT) != 0
    }

    pub const fn command(self) -> bool {
        (self.bits & Self::COMMAND) != 0
    }

    pub fn insert(&mut self, bits: u8) {
        self.bits |= bits & Self::ALL;
    }
}

/// Label for a virtual key code, with a deterministic fallback for
/// codes outside the table.
pub fn key_label(code: u16) -> String {
    let label = match code {
        0x00 => "A",
        0x01 => "S",
        0x02 => "D",
        0x03 => "F",
        0x04 => "H",
        0x05 => "G",
        0x06 => "Z",
        0x07 => "X",
        0x08 => "C",
        0x09 => "V",
        0x0B => "B",
        0x0C => "Q",
        0x0D => "W",
        0x0E => "E",
        0x0F => "R",
        0x10 => "Y",
        0x11 => "T",
        0x12 => "1",
        0x13 => "2",
        0x14 => "3",
        0x15 => "4",
        0x16 => "6",
        0x17 => "5",
        0x19 => "9",
        0x1A => "7",
        0x1C => "8",
        0x1D => "0",
        0x1F => "O",
        0x20 => "U",
        0x22 => "I",
        0x23 => "P",
        0x25 => "L",
        0x26 => "J",
        0x28 => "K",
        0x2D => "N",
        0x2E => "M",
        0x24 => "Return",
        0x30 => "Tab",
        0x31 => "Space",
        0x33 => "Delete",
        0x35 => "Esc",
        0x4C => "Enter",
        0x7A => "F1",
        0x78 => "F2",
        0x63 => "F3",
        0x76 => "F4",
        0x60 => "F5",
        0x61 => "F6",
        0x62 => "F7",
        0x64 => "F8",
        0x65 => "F9",
        0x6D => "F10",
        0x67 => "F11",
        0x6F => "F12",
        0x7B => "Left",
        0x7C => "Right",
        0x7D => "Down",
        0x7E => "Up",
        _ => return format!("Key{}", code),
    };
    label.to_string()
}

/// Human-readable binding, modifier names and key label joined with `+`.
pub fn display(mods: Modifiers, code: u16) -> String {
    let mut parts = Vec::new();

    if mods.control() {
        parts.push("Ctrl".to_string());
    }
    if mods.option() {
        parts.push("Alt".to_string());
    }
    if mods.shift() {
        parts.push("Shift".to_string());
    }
    if mods.command() {
        parts.push("Cmd".to_string());
    }
    parts.push(key_label(code));

    parts.join("+")
}
