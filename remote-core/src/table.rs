//! Static button-combination to SIRC code table

use crate::types::{ButtonMask, SircCode};

/// One assignable action: a button combination and the frame it sends.
#[derive(Copy, Clone, Debug)]
pub struct CommandDef {
    /// Buttons that must all be held to trigger this command.
    pub buttons: ButtonMask,
    /// Frame transmitted when the combination matches.
    pub code: SircCode,
}

impl CommandDef {
    pub const fn new(buttons: u8, code: SircCode) -> Self {
        Self {
            buttons: ButtonMask::from_bits(buttons),
            code,
        }
    }
}

/// Immutable ordered command map.
///
/// Defined once at startup and never mutated; lookups scan in order and
/// the first exact mask match wins.
#[derive(Copy, Clone)]
pub struct CommandTable {
    entries: &'static [CommandDef],
}

impl CommandTable {
    pub const fn new(entries: &'static [CommandDef]) -> Self {
        Self { entries }
    }

    /// First entry whose mask exactly equals `mask`, if any.
    ///
    /// Subset and superset matches do not count; a miss is a defined
    /// outcome (wait one debounce interval and resample), not an error.
    pub fn lookup(&self, mask: ButtonMask) -> Option<SircCode> {
        self.entries
            .iter()
            .find(|entry| entry.buttons == mask)
            .map(|entry| entry.code)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'static [CommandDef] {
        self.entries
    }
}

/// Device address of the TV commands in the default map.
pub const TV_ADDRESS: u8 = 1;

/// Built-in button-to-command map.
pub const DEFAULT_COMMANDS: &[CommandDef] = &[
    CommandDef::new(0b0000_0010, SircCode::new(TV_ADDRESS, 21)), // TV power
    CommandDef::new(0b0000_0100, SircCode::new(TV_ADDRESS, 18)), // TV volume up
    CommandDef::new(0b0000_1000, SircCode::new(TV_ADDRESS, 19)), // TV volume down
    CommandDef::new(0b0000_1100, SircCode::new(TV_ADDRESS, 20)), // TV mute (both volume buttons)
    CommandDef::new(0b0001_0000, SircCode::new(TV_ADDRESS, 37)), // TV input select
];

pub const fn default_command_table() -> CommandTable {
    CommandTable::new(DEFAULT_COMMANDS)
}
