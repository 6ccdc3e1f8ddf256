//! Core data types for the infrared remote

use crate::clock;
use crate::hal::Duration;

/// Bits of the raw input port occupied by the four button lines.
pub const BUTTON_PIN_MASK: u8 = 0b0001_1110;

/// Logical button combination, one bit per pressed button.
///
/// Multiple set bits mean "all of these buttons held at once".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// No buttons pressed.
    pub const NONE: ButtonMask = ButtonMask(0);

    /// Derive the logical mask from a raw port reading.
    ///
    /// Button lines are active low, so the raw value is inverted and
    /// masked down to the button bits.
    pub const fn from_raw(raw: u8) -> Self {
        Self(!raw & BUTTON_PIN_MASK)
    }

    /// Build a mask directly from logical button bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & BUTTON_PIN_MASK)
    }

    /// Raw logical bits.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Returns true if no button is pressed.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// 12-bit SIRC frame: 7-bit command in the low bits, 5-bit address above it.
///
/// Bits 12-15 of the raw value are unused and stay zero for codes built
/// with [`SircCode::new`]; `from_raw` accepts any value and only the low
/// 12 bits are meaningful to a decoder.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
pub struct SircCode(u16);

impl SircCode {
    /// Pack an address/command pair into a frame.
    pub const fn new(address: u8, command: u8) -> Self {
        Self((((address & 0x1f) as u16) << 7) | ((command & 0x7f) as u16))
    }

    /// Wrap an already-packed value. Not validated.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// 7-bit command field.
    pub const fn command(&self) -> u8 {
        (self.0 & 0x7f) as u8
    }

    /// 5-bit address field.
    pub const fn address(&self) -> u8 {
        ((self.0 >> 7) & 0x1f) as u8
    }

    /// Frame bit `index`, with bit 0 the least significant command bit.
    pub const fn bit(&self, index: u8) -> bool {
        (self.0 >> index) & 1 != 0
    }
}

/// States of the debounce machine.
///
/// Both non-idle states carry the raw port image used as the comparison
/// baseline for the next sample.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DebounceState {
    /// Nothing pressed, not sampling; the device is in deep sleep.
    Idle,
    /// Lines observed in flux; waiting for two equal samples.
    Settling { last_raw: u8 },
    /// Two consecutive samples one debounce interval apart agreed.
    Stable { last_raw: u8 },
}

impl DebounceState {
    pub const fn is_idle(&self) -> bool {
        matches!(self, DebounceState::Idle)
    }

    /// The debounced button mask, if the machine has settled.
    pub const fn stable_mask(&self) -> Option<ButtonMask> {
        match self {
            DebounceState::Stable { last_raw } => Some(ButtonMask::from_raw(*last_raw)),
            DebounceState::Idle | DebounceState::Settling { .. } => None,
        }
    }
}

/// Remote configuration parameters
#[derive(Copy, Clone, Debug)]
pub struct RemoteConfig {
    /// Debounce interval between input samples
    pub debounce: Duration,
    /// Carrier frequency the IR output is modulated at
    pub carrier_hz: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(10),
            carrier_hz: 40_000,
        }
    }
}

impl RemoteConfig {
    /// Create a new configuration with validation
    pub fn new(debounce_ms: u16, carrier_hz: u32) -> Result<Self, &'static str> {
        if debounce_ms < clock::MIN_SLEEP_MS || debounce_ms > clock::MAX_SLEEP_MS {
            return Err("Debounce interval outside idle-sleep range");
        }
        if carrier_hz < 30_000 || carrier_hz > 60_000 {
            return Err("Carrier frequency must be between 30 and 60 kHz");
        }
        Ok(Self {
            debounce: Duration::from_millis(debounce_ms as u64),
            carrier_hz,
        })
    }

    /// Debounce interval in milliseconds, as passed to the sleep timer
    pub fn debounce_ms(&self) -> u16 {
        self.debounce.as_millis() as u16
    }
}
