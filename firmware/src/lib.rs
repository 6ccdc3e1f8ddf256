#![no_std]

//! Firmware library exposing hardware wrappers and tasks for testing

pub use embassy_executor::Spawner;
pub use embassy_time::Duration;
pub use static_cell::StaticCell;

pub use remote_core::*;

// Re-export hardware implementations
pub use crate::hardware::*;
pub use crate::mock_hardware::*;
pub use crate::tasks::*;

// Mock hardware module
pub mod mock_hardware {
    use remote_core::hal::{
        ButtonInputs, HalError, IrOutput, RemoteHal, SleepTimer, WakeControl,
    };

    /// Mock remote hardware for compilation and bench-top bring-up.
    ///
    /// Inputs read a fixed port image, outputs are tracked (and logged),
    /// delays run on the embassy time driver and every "pin change" wake
    /// fires after one second.
    #[derive(Debug)]
    pub struct MockRemoteHal {
        raw: u8,
        output_enabled: bool,
        carrier_enabled: bool,
    }

    impl MockRemoteHal {
        pub fn new() -> Self {
            #[cfg(feature = "defmt")]
            defmt::info!("🧪 Using mock hardware (for testing)");
            Self {
                raw: 0xff,
                output_enabled: false,
                carrier_enabled: false,
            }
        }

        /// Set the raw port image returned to the core.
        pub fn set_raw(&mut self, raw: u8) {
            self.raw = raw;
        }

        pub fn carrier_enabled(&self) -> bool {
            self.carrier_enabled
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
            Ok(self.raw)
        }
    }

    impl IrOutput for MockRemoteHal {
        type Error = HalError;

        fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
            #[cfg(feature = "defmt")]
            if enabled != self.output_enabled {
                defmt::debug!("💡 IR drive: {}", if enabled { "ON" } else { "FLOAT" });
            }
            self.output_enabled = enabled;
            Ok(())
        }

        fn set_carrier_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
            self.carrier_enabled = enabled;
            Ok(())
        }
    }

    impl SleepTimer for MockRemoteHal {
        type Error = HalError;

        fn sleep_us(&mut self, us: u16) -> Result<(), Self::Error> {
            embassy_time::block_for(embassy_time::Duration::from_micros(us as u64));
            Ok(())
        }

        fn sleep_ms(&mut self, ms: u16) -> Result<(), Self::Error> {
            embassy_time::block_for(embassy_time::Duration::from_millis(ms as u64));
            Ok(())
        }
    }

    impl WakeControl for MockRemoteHal {
        type Error = HalError;

        fn power_down_until_input_change(&mut self) -> Result<(), Self::Error> {
            // Pretend a pin change arrives once a second.
            embassy_time::block_for(embassy_time::Duration::from_secs(1));
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

// Embassy tasks module
pub mod tasks {
    use super::mock_hardware::MockRemoteHal;
    use remote_core::control::RemoteController;
    use remote_core::table::default_command_table;
    use remote_core::types::RemoteConfig;

    /// The whole device: one task running the control loop forever.
    #[embassy_executor::task]
    pub async fn remote_task(hal: &'static mut MockRemoteHal, config: RemoteConfig) {
        #[cfg(feature = "defmt")]
        defmt::info!("📡 Remote task started");

        let mut controller = RemoteController::new(default_command_table(), config);
        if let Err(_err) = controller.run(hal) {
            #[cfg(feature = "defmt")]
            defmt::error!("❌ HAL failure, halting: {:?}", defmt::Debug2Format(&_err));
        }
    }
}

// CH32V003 hardware module
pub mod hardware;

// Time driver for embassy
mod time_driver;
