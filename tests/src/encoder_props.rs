//! Property tests over the encoder and the command table

use proptest::prelude::*;
use remote_core::encoder::{self, BIT_OFF_US, POST_DELAY_MS};
use remote_core::hal::mock::MockRemoteHal;
use remote_core::table::default_command_table;
use remote_core::test_utils::pulse_capture::{carrier_pulses, decode_frame};
use remote_core::types::{ButtonMask, SircCode};

proptest! {
    /// Any 12-bit code survives the trip through the pulse train.
    #[test]
    fn frames_decode_back_to_their_code(raw in 0u16..0x1000) {
        let mut hal = MockRemoteHal::new();
        encoder::transmit(&mut hal, SircCode::from_raw(raw)).unwrap();

        let pulses = carrier_pulses(&hal.events);
        prop_assert_eq!(pulses.len(), 13);
        prop_assert_eq!(decode_frame(&pulses), Some(raw));
    }

    /// Total frame time is fixed plus 600 us per set bit.
    #[test]
    fn frame_duration_depends_only_on_the_popcount(raw in any::<u16>()) {
        let mut hal = MockRemoteHal::new();
        encoder::transmit(&mut hal, SircCode::from_raw(raw)).unwrap();

        let ones = (raw & 0x0fff).count_ones() as u64;
        let expected = 2400
            + 12 * 600 // zero-bit on-times
            + ones * 600 // extra on-time per one bit
            + 13 * BIT_OFF_US as u64
            + POST_DELAY_MS as u64 * 1_000;
        prop_assert_eq!(hal.now_us(), expected);
    }

    /// Lookup is a pure function of the mask.
    #[test]
    fn lookup_is_idempotent(bits in any::<u8>()) {
        let table = default_command_table();
        let mask = ButtonMask::from_bits(bits);
        let first = table.lookup(mask);
        for _ in 0..4 {
            prop_assert_eq!(table.lookup(mask), first);
        }
    }

    /// Only exact mask equality matches; supersets of an entry miss
    /// unless they are themselves an entry.
    #[test]
    fn lookup_never_matches_by_subset(bits in any::<u8>()) {
        let table = default_command_table();
        let mask = ButtonMask::from_bits(bits);
        if let Some(code) = table.lookup(mask) {
            let entry = table
                .entries()
                .iter()
                .find(|e| e.buttons == mask)
                .expect("a hit must come from an exact entry");
            prop_assert_eq!(entry.code, code);
        }
    }
}
