//! Test utilities for analyzing captured output timelines

#[cfg(feature = "test-utils")]
pub mod pulse_capture {
    //! Reconstruction of carrier pulse trains from mock HAL event logs

    use crate::encoder::{BIT_OFF_US, FRAME_BITS, HEADER_ON_US, ONE_BIT_ON_US, ZERO_BIT_ON_US};
    use crate::hal::mock::{EventKind, TimedEvent};

    /// One carrier burst and the off period that follows it.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Pulse {
        /// Virtual time the carrier was gated on, microseconds.
        pub start_us: u64,
        /// Carrier on-time, microseconds.
        pub on_us: u64,
        /// Off-time until the next burst (or the pin float), microseconds.
        pub off_us: u64,
    }

    impl Pulse {
        /// True if the on-time reads as a 1 data bit.
        pub fn is_one_bit(&self) -> bool {
            // Midpoint between the 600us zero and 1200us one bursts.
            self.on_us >= (ZERO_BIT_ON_US as u64 + ONE_BIT_ON_US as u64) / 2
        }

        /// True if the on-time reads as a frame header.
        pub fn is_header(&self) -> bool {
            self.on_us >= HEADER_ON_US as u64
        }
    }

    /// Extract carrier pulses from a mock event log.
    ///
    /// The off period of the final pulse runs to the next carrier-on or,
    /// for the last pulse of a frame, to the output-disable transition.
    pub fn carrier_pulses(events: &[TimedEvent]) -> Vec<Pulse> {
        let mut pulses = Vec::new();
        let mut on_at: Option<u64> = None;
        let mut off_at: Option<u64> = None;

        for event in events {
            match event.kind {
                EventKind::Carrier(true) => {
                    if let (Some(start), Some(off)) = (on_at.take(), off_at.take()) {
                        pulses.push(Pulse {
                            start_us: start,
                            on_us: off - start,
                            off_us: event.at_us - off,
                        });
                    }
                    on_at = Some(event.at_us);
                }
                EventKind::Carrier(false) => {
                    off_at = Some(event.at_us);
                }
                EventKind::Output(false) => {
                    if let (Some(start), Some(off)) = (on_at.take(), off_at.take()) {
                        pulses.push(Pulse {
                            start_us: start,
                            on_us: off - start,
                            off_us: event.at_us - off,
                        });
                    }
                }
                _ => {}
            }
        }
        pulses
    }

    /// Decode a captured pulse train back into a 12-bit code.
    ///
    /// Returns `None` unless the train is exactly one header followed by
    /// twelve data pulses with the fixed off period after each.
    pub fn decode_frame(pulses: &[Pulse]) -> Option<u16> {
        if pulses.len() != 1 + FRAME_BITS as usize {
            return None;
        }
        let (header, bits) = pulses.split_first()?;
        if !header.is_header() {
            return None;
        }
        if pulses.iter().any(|p| p.off_us != BIT_OFF_US as u64) {
            return None;
        }

        let mut code = 0u16;
        for (index, pulse) in bits.iter().enumerate() {
            if pulse.is_one_bit() {
                code |= 1 << index;
            }
        }
        Some(code)
    }
}
