#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt_rtt as _;

// RISC-V runtime
use riscv_rt as _;

// Panic handler
use panic_halt as _;

use embassy_executor::Spawner;
use embassy_time::Duration;
use static_cell::StaticCell;

use remote_core::*;
use remote_firmware::*;

// Static resources
static HAL: StaticCell<MockRemoteHal> = StaticCell::new();

/// Main firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    #[cfg(feature = "defmt")]
    defmt::info!("🔧 IR remote firmware starting...");

    // Mock hardware keeps the binary building until the ch32v0 PAC
    // wiring in `hardware` replaces it.
    let hal = HAL.init(MockRemoteHal::new());

    let config = default_config();
    #[cfg(feature = "defmt")]
    defmt::info!(
        "⚙️ Remote config: debounce {=u16} ms, carrier {=u32} Hz",
        config.debounce_ms(),
        config.carrier_hz
    );

    spawner.must_spawn(remote_task(hal, config));

    #[cfg(feature = "defmt")]
    defmt::info!("✨ Remote ready, waiting for buttons");

    // Main supervision loop
    loop {
        embassy_time::Timer::after(Duration::from_secs(60)).await;
        #[cfg(feature = "defmt")]
        defmt::trace!("💓 Heartbeat");
    }
}
