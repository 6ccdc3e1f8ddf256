//! Main control loop: deep sleep, debounce, dispatch

use core::convert::Infallible;

use crate::debounce::{Debouncer, Judgement};
use crate::encoder;
use crate::hal::{ButtonInputs, RemoteHal, SleepTimer, WakeControl};
use crate::table::CommandTable;
use crate::types::{ButtonMask, DebounceState, RemoteConfig};

/// Drives the whole device: sleep, wake, debounce, transmit, repeat.
pub struct RemoteController {
    table: CommandTable,
    config: RemoteConfig,
    debouncer: Debouncer,
}

impl RemoteController {
    pub const fn new(table: CommandTable, config: RemoteConfig) -> Self {
        Self {
            table,
            config,
            debouncer: Debouncer::new(),
        }
    }

    /// Current debounce-machine state.
    pub const fn state(&self) -> DebounceState {
        self.debouncer.state()
    }

    pub const fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// The device's entire runtime behavior. Never returns Ok; only a
    /// HAL failure breaks the loop.
    pub fn run<H: RemoteHal>(&mut self, hal: &mut H) -> Result<Infallible, H::Error> {
        loop {
            hal.wake().power_down_until_input_change()?;
            self.service_wake(hal)?;
        }
    }

    /// One wake-to-sleep session.
    ///
    /// Waits out one debounce interval unconditionally, then samples and
    /// debounces until a stable mask emerges. An empty mask ends the
    /// session (the caller re-enters deep sleep); anything else is
    /// dispatched and the lines are resampled immediately, so a held
    /// button keeps transmitting.
    pub fn service_wake<H: RemoteHal>(&mut self, hal: &mut H) -> Result<(), H::Error> {
        let debounce_ms = self.config.debounce_ms();

        // Initial settle time for the edge that woke us.
        hal.timer().sleep_ms(debounce_ms)?;
        let first = hal.buttons().read_raw()?;
        self.debouncer.arm(first);
        let mut sample = first;

        loop {
            match self.debouncer.observe(sample) {
                Judgement::Stable(mask) if mask.is_empty() => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("all buttons released, back to deep sleep");
                    self.debouncer.reset();
                    return Ok(());
                }
                Judgement::Stable(mask) => self.dispatch(hal, mask)?,
                Judgement::Bouncing => hal.timer().sleep_ms(debounce_ms)?,
            }
            sample = hal.buttons().read_raw()?;
        }
    }

    /// Look up the stable mask and transmit its frame.
    ///
    /// An unmapped combination is not an error: wait out one debounce
    /// interval so the caller resamples on settled lines.
    fn dispatch<H: RemoteHal>(&self, hal: &mut H, mask: ButtonMask) -> Result<(), H::Error> {
        match self.table.lookup(mask) {
            Some(code) => encoder::transmit(hal, code),
            None => hal.timer().sleep_ms(self.config.debounce_ms()),
        }
    }
}
