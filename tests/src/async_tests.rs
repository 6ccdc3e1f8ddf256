//! Async harness tests: the blocking control loop under a runtime watchdog

use std::time::Duration;

use tokio_test::assert_ok;

use remote_core::control::RemoteController;
use remote_core::hal::mock::{MockRemoteHal, IDLE_RAW};
use remote_core::hal::HalError;
use remote_core::table::default_command_table;
use remote_core::types::RemoteConfig;

/// A scripted session must terminate; a hang here means the debounce
/// machine lost its way back to deep sleep.
#[tokio::test]
async fn service_wake_terminates_under_watchdog() {
    let handle = tokio::task::spawn_blocking(|| {
        let mut hal = MockRemoteHal::new();
        hal.queue_sample(!0b0000_0010u8);
        hal.queue_sample(IDLE_RAW);
        hal.queue_sample(IDLE_RAW);

        let mut controller =
            RemoteController::new(default_command_table(), RemoteConfig::default());
        controller.service_wake(&mut hal).map(|_| hal.now_us())
    });

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("session did not terminate")
        .expect("session task panicked");

    // One press plus release: virtual time moved, host time barely did.
    let elapsed_us = assert_ok!(result);
    assert!(elapsed_us > 45_000);
}

/// The full loop runs one session per wake and stops when the mock's
/// wake budget is spent.
#[tokio::test]
async fn run_loop_spends_the_wake_budget_and_stops() {
    let handle = tokio::task::spawn_blocking(|| {
        let mut hal = MockRemoteHal::new();
        hal.set_wake_budget(3);
        // Three spurious wakes with nothing pressed.
        let mut controller =
            RemoteController::new(default_command_table(), RemoteConfig::default());
        let err = controller.run(&mut hal).unwrap_err();
        (err, hal.deep_sleeps())
    });

    let (err, sleeps) = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("loop did not stop")
        .expect("loop task panicked");

    assert_eq!(err, HalError::WakeError);
    assert_eq!(sleeps, 3);
}
