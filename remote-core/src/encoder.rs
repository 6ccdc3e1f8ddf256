//! SIRC 12-bit pulse train encoder

use crate::hal::{IrOutput, RemoteHal, SleepTimer};
use crate::types::SircCode;

/// Carrier frequency the output is modulated at.
pub const CARRIER_HZ: u32 = 40_000;
/// Header pulse on-time, microseconds.
pub const HEADER_ON_US: u16 = 2400;
/// On-time of a 0 data bit, microseconds.
pub const ZERO_BIT_ON_US: u16 = 600;
/// On-time of a 1 data bit, microseconds.
pub const ONE_BIT_ON_US: u16 = 1200;
/// Off-time after the header and after every data bit, microseconds.
pub const BIT_OFF_US: u16 = 600;
/// Quiet period after the frame, milliseconds.
pub const POST_DELAY_MS: u16 = 45;
/// Data bits per frame.
pub const FRAME_BITS: u8 = 12;

/// Transmit one 12-bit frame.
///
/// Header pulse, then the data bits least-significant first (bit 0 is
/// the low bit of the command field, bit 11 the high bit of the
/// address), each bit's carrier burst followed by the fixed off period.
/// Bits above 11 are never examined. The transmission always runs to
/// completion and owns the output pin until the trailing quiet period
/// has elapsed.
pub fn transmit<H: RemoteHal>(hal: &mut H, code: SircCode) -> Result<(), H::Error> {
    #[cfg(feature = "defmt")]
    defmt::debug!("transmit: addr={=u8} cmd={=u8}", code.address(), code.command());

    // Header
    hal.output().set_output_enabled(true)?;
    hal.output().set_carrier_enabled(true)?;
    hal.timer().sleep_us(HEADER_ON_US)?;
    hal.output().set_carrier_enabled(false)?;
    hal.timer().sleep_us(BIT_OFF_US)?;

    // Data bits, LSB first
    for index in 0..FRAME_BITS {
        hal.output().set_carrier_enabled(true)?;
        if code.bit(index) {
            hal.timer().sleep_us(ONE_BIT_ON_US)?;
        } else {
            hal.timer().sleep_us(ZERO_BIT_ON_US)?;
        }
        hal.output().set_carrier_enabled(false)?;
        hal.timer().sleep_us(BIT_OFF_US)?;
    }

    // Trailing quiet period with the pin floated
    hal.output().set_output_enabled(false)?;
    hal.timer().sleep_ms(POST_DELAY_MS)?;

    Ok(())
}
