//! Hardware Abstraction Layer for the remote core

// Re-export time types based on feature
#[cfg(feature = "embassy-time")]
pub use embassy_time::Duration;

#[cfg(not(feature = "embassy-time"))]
pub use self::mock_time::Duration;

#[cfg(not(feature = "embassy-time"))]
mod mock_time {
    /// Mock duration type for compilation without embassy-time
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0
        }
    }
}

use embedded_hal::digital::InputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
    /// Countdown timer operation failed
    TimerError,
    /// Wake source could not be armed or drained
    WakeError,
    /// Hardware not initialized
    NotInitialized,
    /// Invalid configuration
    InvalidConfig,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
            HalError::TimerError => write!(f, "Countdown timer operation failed"),
            HalError::WakeError => write!(f, "Wake source could not be armed or drained"),
            HalError::NotInitialized => write!(f, "Hardware not initialized"),
            HalError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for reading the button input port
pub trait ButtonInputs {
    type Error: From<HalError>;

    /// Read the raw input-line state as one port image.
    ///
    /// Button lines are active low; a pressed button reads as 0. Use
    /// [`ButtonMask::from_raw`](crate::types::ButtonMask::from_raw) to
    /// turn the image into a logical mask.
    fn read_raw(&mut self) -> Result<u8, Self::Error>;
}

/// Trait for the carrier-modulated IR output
pub trait IrOutput {
    type Error: From<HalError>;

    /// Enable or disable the output pin driver.
    ///
    /// While disabled the line floats; nothing is emitted regardless of
    /// the carrier gate.
    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;

    /// Gate the 40 kHz carrier onto the output pin.
    fn set_carrier_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;
}

/// Trait for bounded low-power delays
///
/// Implementations suspend in an idle state with only the countdown
/// timer running, and must consume exactly one timer wake per call:
/// counter stopped and zeroed, pending wake flag cleared. A stale wake
/// left behind makes the next suspension undefined.
pub trait SleepTimer {
    type Error: From<HalError>;

    /// Sleep for approximately `us` microseconds.
    ///
    /// Valid for roughly [`MIN_SLEEP_US`](crate::clock::MIN_SLEEP_US)
    /// ..=[`MAX_SLEEP_US`](crate::clock::MAX_SLEEP_US); out-of-range
    /// requests truncate rather than error.
    fn sleep_us(&mut self, us: u16) -> Result<(), Self::Error>;

    /// Sleep for approximately `ms` milliseconds.
    ///
    /// Valid for roughly [`MIN_SLEEP_MS`](crate::clock::MIN_SLEEP_MS)
    /// ..=[`MAX_SLEEP_MS`](crate::clock::MAX_SLEEP_MS).
    fn sleep_ms(&mut self, ms: u16) -> Result<(), Self::Error>;
}

/// Trait for the deep-sleep wake source
pub trait WakeControl {
    type Error: From<HalError>;

    /// Suspend in the lowest power state until any input line changes.
    ///
    /// Implementations disable the output driver and float the lines
    /// before suspending. On return the wake source is disarmed; the
    /// caller decides when to re-arm by suspending again.
    fn power_down_until_input_change(&mut self) -> Result<(), Self::Error>;
}

/// Complete remote HAL interface
pub trait RemoteHal {
    type Buttons: ButtonInputs<Error = Self::Error>;
    type Output: IrOutput<Error = Self::Error>;
    type Timer: SleepTimer<Error = Self::Error>;
    type Wake: WakeControl<Error = Self::Error>;
    type Error: From<HalError>;

    /// Access to the button input port
    fn buttons(&mut self) -> &mut Self::Buttons;

    /// Access to the IR output
    fn output(&mut self) -> &mut Self::Output;

    /// Access to the idle-sleep timer
    fn timer(&mut self) -> &mut Self::Timer;

    /// Access to the deep-sleep wake controller
    fn wake(&mut self) -> &mut Self::Wake;
}

/// Four active-low button lines behind embedded-hal input pins.
///
/// Presents the pins as one raw port image on bits 1-4, matching the
/// layout of [`BUTTON_PIN_MASK`](crate::types::BUTTON_PIN_MASK).
pub struct InputPinButtons<P0, P1, P2, P3> {
    pins: (P0, P1, P2, P3),
}

impl<P0, P1, P2, P3> InputPinButtons<P0, P1, P2, P3>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
{
    pub fn new(pins: (P0, P1, P2, P3)) -> Self {
        Self { pins }
    }
}

impl<P0, P1, P2, P3> ButtonInputs for InputPinButtons<P0, P1, P2, P3>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
{
    type Error = HalError;

    fn read_raw(&mut self) -> Result<u8, Self::Error> {
        let mut raw = 0u8;
        if self.pins.0.is_high().map_err(|_| HalError::GpioError)? {
            raw |= 1 << 1;
        }
        if self.pins.1.is_high().map_err(|_| HalError::GpioError)? {
            raw |= 1 << 2;
        }
        if self.pins.2.is_high().map_err(|_| HalError::GpioError)? {
            raw |= 1 << 3;
        }
        if self.pins.3.is_high().map_err(|_| HalError::GpioError)? {
            raw |= 1 << 4;
        }
        Ok(raw)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock HAL with a virtual microsecond clock for testing

    use super::*;
    use heapless::{Deque, Vec};

    /// One recorded output-side transition.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct TimedEvent {
        /// Virtual time of the transition, microseconds.
        pub at_us: u64,
        pub kind: EventKind,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum EventKind {
        Output(bool),
        Carrier(bool),
        DeepSleep,
    }

    /// Raw port image with every line pulled high (nothing pressed).
    pub const IDLE_RAW: u8 = 0xff;

    /// Mock hardware: scripted inputs, recorded outputs, virtual time.
    ///
    /// `read_raw` consumes one scripted sample per call and falls back
    /// to `idle_raw` when the script runs dry. Deep sleep draws on a
    /// wake budget; an exhausted budget reports `WakeError`, which lets
    /// tests drive [`RemoteController::run`](crate::control::RemoteController::run)
    /// to a stopping point.
    pub struct MockRemoteHal {
        now_us: u64,
        idle_raw: u8,
        samples: Deque<u8, 64>,
        wake_budget: usize,
        output_enabled: bool,
        carrier_enabled: bool,
        pub events: Vec<TimedEvent, 256>,
    }

    impl MockRemoteHal {
        pub fn new() -> Self {
            Self {
                now_us: 0,
                idle_raw: IDLE_RAW,
                samples: Deque::new(),
                wake_budget: 0,
                output_enabled: false,
                carrier_enabled: false,
                events: Vec::new(),
            }
        }

        /// Current virtual time in microseconds.
        pub fn now_us(&self) -> u64 {
            self.now_us
        }

        /// Queue one raw port sample; consumed by the next `read_raw`.
        pub fn queue_sample(&mut self, raw: u8) {
            self.samples.push_back(raw).ok();
        }

        /// Port image returned once the script is exhausted.
        pub fn set_idle_raw(&mut self, raw: u8) {
            self.idle_raw = raw;
        }

        /// Allow `count` deep-sleep wakes before reporting `WakeError`.
        pub fn set_wake_budget(&mut self, count: usize) {
            self.wake_budget = count;
        }

        pub fn output_enabled(&self) -> bool {
            self.output_enabled
        }

        pub fn carrier_enabled(&self) -> bool {
            self.carrier_enabled
        }

        /// Number of deep-sleep entries recorded so far.
        pub fn deep_sleeps(&self) -> usize {
            self.events
                .iter()
                .filter(|e| e.kind == EventKind::DeepSleep)
                .count()
        }

        fn record(&mut self, kind: EventKind) {
            self.events
                .push(TimedEvent {
                    at_us: self.now_us,
                    kind,
                })
                .ok();
        }
    }

    impl Default for MockRemoteHal {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ButtonInputs for MockRemoteHal {
        type Error = HalError;

        fn read_raw(&mut self) -> Result<u8, Self::Error> {
            Ok(self.samples.pop_front().unwrap_or(self.idle_raw))
        }
    }

    impl IrOutput for MockRemoteHal {
        type Error = HalError;

        fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
            self.output_enabled = enabled;
            self.record(EventKind::Output(enabled));
            Ok(())
        }

        fn set_carrier_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
            self.carrier_enabled = enabled;
            self.record(EventKind::Carrier(enabled));
            Ok(())
        }
    }

    impl SleepTimer for MockRemoteHal {
        type Error = HalError;

        fn sleep_us(&mut self, us: u16) -> Result<(), Self::Error> {
            self.now_us += us as u64;
            Ok(())
        }

        fn sleep_ms(&mut self, ms: u16) -> Result<(), Self::Error> {
            self.now_us += ms as u64 * 1_000;
            Ok(())
        }
    }

    impl WakeControl for MockRemoteHal {
        type Error = HalError;

        fn power_down_until_input_change(&mut self) -> Result<(), Self::Error> {
            // Deep sleep floats the output, as the hardware would.
            self.output_enabled = false;
            self.carrier_enabled = false;
            if self.wake_budget == 0 {
                return Err(HalError::WakeError);
            }
            self.wake_budget -= 1;
            self.record(EventKind::DeepSleep);
            Ok(())
        }
    }

    impl RemoteHal for MockRemoteHal {
        type Buttons = Self;
        type Output = Self;
        type Timer = Self;
        type Wake = Self;
        type Error = HalError;

        fn buttons(&mut self) -> &mut Self {
            self
        }

        fn output(&mut self) -> &mut Self {
            self
        }

        fn timer(&mut self) -> &mut Self {
            self
        }

        fn wake(&mut self) -> &mut Self {
            self
        }
    }
}
