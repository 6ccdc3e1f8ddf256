//! Tick math for the idle-sleep countdown timer.
//!
//! Delays are served by an 8-bit hardware counter fed from a 1 MHz
//! reference through one of two prescalers: /16 for microsecond delays
//! and /4096 for millisecond delays. The conversions are integer
//! division, truncation included, so a hardware
//! [`SleepTimer`](crate::hal::SleepTimer) built on them and the pure
//! math used in tests agree to the tick.

/// Reference clock feeding the countdown timer.
pub const TIMER_CLOCK_HZ: u32 = 1_000_000;

/// Shortest representable microsecond delay (one /16 tick).
pub const MIN_SLEEP_US: u16 = 16;
/// Longest representable microsecond delay (255 /16 ticks).
pub const MAX_SLEEP_US: u16 = 4080;
/// Shortest representable millisecond delay (one /4096 tick, 4.096 ms).
pub const MIN_SLEEP_MS: u16 = 5;
/// Longest representable millisecond delay (255 /4096 ticks, 1044.5 ms).
pub const MAX_SLEEP_MS: u16 = 1045;

/// Countdown prescaler selection.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Prescaler {
    /// /16, used for microsecond delays.
    Div16,
    /// /4096, used for millisecond delays.
    Div4096,
}

impl Prescaler {
    pub const fn divisor(&self) -> u32 {
        match self {
            Prescaler::Div16 => 16,
            Prescaler::Div4096 => 4096,
        }
    }

    /// Duration of one tick at this prescaler, in microseconds.
    pub const fn tick_us(&self) -> u32 {
        self.divisor() * (1_000_000 / TIMER_CLOCK_HZ)
    }
}

/// Counter value for a microsecond delay at the /16 prescaler.
///
/// Valid for roughly [`MIN_SLEEP_US`]..=[`MAX_SLEEP_US`]; requests
/// outside that range truncate in the 8-bit cast rather than error.
pub const fn ticks_for_us(us: u16) -> u8 {
    ((TIMER_CLOCK_HZ as u64 * us as u64) / (16 * 1_000_000)) as u8
}

/// Counter value for a millisecond delay at the /4096 prescaler.
///
/// Valid for roughly [`MIN_SLEEP_MS`]..=[`MAX_SLEEP_MS`]; requests
/// outside that range truncate in the 8-bit cast rather than error.
pub const fn ticks_for_ms(ms: u16) -> u8 {
    ((TIMER_CLOCK_HZ as u64 * ms as u64) / (4096 * 1_000)) as u8
}
