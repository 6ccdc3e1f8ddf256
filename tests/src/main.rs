// Smoke-test binary: exercises the core against the mock HAL and prints
// a short report. The real coverage lives in `cargo test`.

use remote_core::control::RemoteController;
use remote_core::hal::mock::{MockRemoteHal, IDLE_RAW};
use remote_core::table::default_command_table;
use remote_core::test_utils::pulse_capture::{carrier_pulses, decode_frame};
use remote_core::types::RemoteConfig;

fn main() {
    println!("🧪 Remote core smoke tests");

    check_table();
    check_pulse_train();
    check_sleep_cycle();

    println!("✅ All smoke tests passed!");
    println!();
    println!("📝 Run the full suite with: cargo test");
}

fn check_table() {
    println!("🔎 Command table...");
    let table = default_command_table();
    assert_eq!(table.len(), 5);
    for entry in table.entries() {
        assert_eq!(table.lookup(entry.buttons), Some(entry.code));
    }
    println!("  ✅ every combination resolves to its own code");
}

fn check_pulse_train() {
    println!("📡 Pulse train...");
    let mut hal = MockRemoteHal::new();
    hal.queue_sample(!0b0000_0010u8); // power pressed
    hal.queue_sample(IDLE_RAW);
    hal.queue_sample(IDLE_RAW);

    let mut controller = RemoteController::new(default_command_table(), RemoteConfig::default());
    controller
        .service_wake(&mut hal)
        .expect("mock HAL cannot fail");

    let pulses = carrier_pulses(&hal.events);
    assert_eq!(pulses.len(), 13);
    assert_eq!(decode_frame(&pulses), Some(149));
    println!("  ✅ power press emits code 149 as 13 carrier bursts");
}

fn check_sleep_cycle() {
    println!("😴 Sleep cycle...");
    let mut hal = MockRemoteHal::new();
    hal.set_wake_budget(2);
    let mut controller = RemoteController::new(default_command_table(), RemoteConfig::default());

    // Two spurious wakes, then the budget runs out and the loop stops.
    let err = controller.run(&mut hal).unwrap_err();
    assert_eq!(hal.deep_sleeps(), 2);
    println!("  ✅ loop re-enters deep sleep each idle session ({err})");
}
