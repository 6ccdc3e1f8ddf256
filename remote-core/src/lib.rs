#![cfg_attr(not(feature = "std"), no_std)]

//! # Remote Core
//!
//! Control logic for a battery-powered SIRC infrared remote.
//! Debounces four button lines, maps combinations to 12-bit codes, and
//! emits them as carrier-gated pulse trains, sleeping between actions.

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod control;
pub mod debounce;
pub mod encoder;
pub mod hal;
pub mod table;
pub mod types;
pub mod wake;

#[cfg(feature = "test-utils")]
pub mod test_utils;


pub use control::*;
pub use debounce::*;
pub use hal::{Duration, HalError, RemoteHal};
pub use table::{default_command_table, CommandDef, CommandTable};
pub use types::*;
pub use wake::WakeLatch;

/// Remote library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: 10 ms debounce, 40 kHz carrier
pub fn default_config() -> RemoteConfig {
    RemoteConfig {
        debounce: Duration::from_millis(10),
        carrier_hz: encoder::CARRIER_HZ,
    }
}
