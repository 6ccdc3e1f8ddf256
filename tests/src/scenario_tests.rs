//! End-to-end scenarios: wake event through pulse train and back to sleep

use remote_core::control::RemoteController;
use remote_core::encoder::POST_DELAY_MS;
use remote_core::hal::mock::{EventKind, MockRemoteHal, IDLE_RAW};
use remote_core::table::{default_command_table, TV_ADDRESS};
use remote_core::test_utils::pulse_capture::{carrier_pulses, decode_frame, Pulse};
use remote_core::types::{ButtonMask, RemoteConfig, SircCode};
use rstest::rstest;

fn raw_for(mask: u8) -> u8 {
    // Active-low port image for a logical button mask.
    !mask
}

fn session(presses: &[u8]) -> MockRemoteHal {
    let mut hal = MockRemoteHal::new();
    for &mask in presses {
        hal.queue_sample(raw_for(mask));
    }
    // Release: two agreeing idle samples end the session.
    hal.queue_sample(IDLE_RAW);
    hal.queue_sample(IDLE_RAW);

    let mut controller = RemoteController::new(default_command_table(), RemoteConfig::default());
    controller.service_wake(&mut hal).unwrap();
    hal
}

#[test]
fn power_press_transmits_code_149_then_sleeps() {
    let hal = session(&[0b0000_0010]);

    let pulses = carrier_pulses(&hal.events);
    assert_eq!(pulses.len(), 13);
    assert_eq!(decode_frame(&pulses), Some(149));

    // Worked example from the protocol contract: on-durations bit 0
    // through bit 11 for 0b000010010101.
    let on_times: Vec<u64> = pulses.iter().skip(1).map(|p| p.on_us).collect();
    assert_eq!(
        on_times,
        vec![1200, 600, 1200, 600, 1200, 600, 600, 1200, 600, 600, 600, 600]
    );

    // 45 ms quiet before the loop resampled and went back to idle.
    let floated_at = hal
        .events
        .iter()
        .find(|e| e.kind == EventKind::Output(false))
        .map(|e| e.at_us)
        .unwrap();
    let last_pulse: &Pulse = pulses.last().unwrap();
    assert_eq!(floated_at, last_pulse.start_us + last_pulse.on_us + last_pulse.off_us);
    assert!(hal.now_us() - floated_at >= POST_DELAY_MS as u64 * 1_000);
}

#[test]
fn both_volume_lines_match_the_mute_entry() {
    let hal = session(&[0b0000_1100]);

    let pulses = carrier_pulses(&hal.events);
    let code = SircCode::from_raw(decode_frame(&pulses).unwrap());
    assert_eq!(code.command(), 20);
    assert_eq!(code.address(), TV_ADDRESS);
}

#[rstest]
#[case(0b0000_0010, 21)] // power
#[case(0b0000_0100, 18)] // volume up
#[case(0b0000_1000, 19)] // volume down
#[case(0b0000_1100, 20)] // mute
#[case(0b0001_0000, 37)] // input select
fn every_mapped_combination_reaches_the_air(#[case] mask: u8, #[case] command: u8) {
    let hal = session(&[mask]);

    let code = SircCode::from_raw(decode_frame(&carrier_pulses(&hal.events)).unwrap());
    assert_eq!(code.command(), command);
    assert_eq!(code.address(), TV_ADDRESS);
}

#[test]
fn unmapped_combination_never_reaches_the_encoder() {
    let hal = session(&[0b0001_0010]);
    assert!(carrier_pulses(&hal.events).is_empty());
}

#[test]
fn spurious_wake_with_nothing_pressed_goes_straight_back_to_sleep() {
    let hal = session(&[]);
    assert!(carrier_pulses(&hal.events).is_empty());
    // Only the initial debounce interval elapsed.
    assert_eq!(hal.now_us(), 10_000);
}

#[test]
fn held_button_repeats_and_release_is_debounced() {
    let hal = session(&[0b0000_0100, 0b0000_0100]);

    let pulses = carrier_pulses(&hal.events);
    assert_eq!(pulses.len(), 2 * 13);
    assert_eq!(
        ButtonMask::from_raw(raw_for(0b0000_0100)),
        ButtonMask::from_bits(0b0000_0100)
    );
}
