//! CH32V003 specific hardware implementations
//!
//! Concrete HAL wrappers for the remote core: the button port behind
//! embedded-hal input pins, the carrier-gated IR output, the
//! tick-quantized idle-sleep timer, and the pin-change wake path.

use embedded_hal::digital::{InputPin, OutputPin};
use remote_core::clock::{self, Prescaler};
use remote_core::hal::{HalError, InputPinButtons, IrOutput, RemoteHal, SleepTimer, WakeControl};
use remote_core::wake::WakeLatch;

/// Gate for the hardware waveform generator producing the 40 kHz carrier.
///
/// On the CH32V003 this is TIM1 in PWM mode with the compare output
/// enabled or disabled; gating at the generator instead of toggling the
/// pin keeps the burst edges clean.
pub trait CarrierGate {
    fn set_enabled(&mut self, enabled: bool);
}

/// IR output: pin driver plus carrier gate.
pub struct Ch32v003IrOutput<P, G> {
    pin: P,
    gate: G,
}

impl<P: OutputPin, G: CarrierGate> Ch32v003IrOutput<P, G> {
    pub fn new(pin: P, gate: G) -> Self {
        Self { pin, gate }
    }
}

impl<P: OutputPin, G: CarrierGate> IrOutput for Ch32v003IrOutput<P, G> {
    type Error = HalError;

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        // TODO: switch the pin to input mode on disable once the ch32v0
        // PAC lands; driving low is close enough for bring-up.
        if !enabled {
            self.pin.set_low().map_err(|_| HalError::GpioError)?;
        }
        Ok(())
    }

    fn set_carrier_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.gate.set_enabled(enabled);
        Ok(())
    }
}

/// Idle-sleep timer quantized to the countdown prescaler ticks.
///
/// Delays are rounded down to whole /16 or /4096 ticks before waiting,
/// so host and hardware timelines agree with the 8-bit counter math in
/// [`remote_core::clock`].
pub struct TickSleepTimer;

impl SleepTimer for TickSleepTimer {
    type Error = HalError;

    fn sleep_us(&mut self, us: u16) -> Result<(), Self::Error> {
        let ticks = clock::ticks_for_us(us) as u64;
        embassy_time::block_for(embassy_time::Duration::from_micros(
            ticks * Prescaler::Div16.tick_us() as u64,
        ));
        Ok(())
    }

    fn sleep_ms(&mut self, ms: u16) -> Result<(), Self::Error> {
        let ticks = clock::ticks_for_ms(ms) as u64;
        embassy_time::block_for(embassy_time::Duration::from_micros(
            ticks * Prescaler::Div4096.tick_us() as u64,
        ));
        Ok(())
    }
}

/// Deep-sleep wake path fed by the pin-change interrupt.
pub struct PinChangeWake {
    latch: &'static WakeLatch,
}

impl PinChangeWake {
    pub fn new(latch: &'static WakeLatch) -> Self {
        Self { latch }
    }
}

impl WakeControl for PinChangeWake {
    type Error = HalError;

    fn power_down_until_input_change(&mut self) -> Result<(), Self::Error> {
        // Drain any stale wake so the next wfi cannot fire early.
        self.latch.consume();
        // TODO: arm EXTI on the four button lines and drop to standby
        // once the ch32v0 PAC lands; wfi covers the executor-idle case.
        while !self.latch.consume() {
            riscv::asm::wfi();
        }
        Ok(())
    }
}

/// Pin-change interrupt body: post the wake and suppress the bounce burst.
///
/// The handler masks its own interrupt source before returning, so the
/// latch sees exactly one wake per deep-sleep period; re-arming happens
/// on the next `power_down_until_input_change`.
pub fn on_pin_change(latch: &WakeLatch) {
    latch.signal();
}

/// Complete CH32V003 hardware collection
pub struct Ch32v003RemoteHal<P0, P1, P2, P3, OutPin, Gate> {
    buttons: InputPinButtons<P0, P1, P2, P3>,
    output: Ch32v003IrOutput<OutPin, Gate>,
    timer: TickSleepTimer,
    wake: PinChangeWake,
}

impl<P0, P1, P2, P3, OutPin, Gate> Ch32v003RemoteHal<P0, P1, P2, P3, OutPin, Gate>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
    OutPin: OutputPin,
    Gate: CarrierGate,
{
    pub fn new(
        button_pins: (P0, P1, P2, P3),
        out_pin: OutPin,
        gate: Gate,
        latch: &'static WakeLatch,
    ) -> Self {
        #[cfg(feature = "defmt")]
        defmt::info!("🔧 Initializing CH32V003 remote hardware");

        Self {
            buttons: InputPinButtons::new(button_pins),
            output: Ch32v003IrOutput::new(out_pin, gate),
            timer: TickSleepTimer,
            wake: PinChangeWake::new(latch),
        }
    }
}

impl<P0, P1, P2, P3, OutPin, Gate> RemoteHal for Ch32v003RemoteHal<P0, P1, P2, P3, OutPin, Gate>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
    OutPin: OutputPin,
    Gate: CarrierGate,
{
    type Buttons = InputPinButtons<P0, P1, P2, P3>;
    type Output = Ch32v003IrOutput<OutPin, Gate>;
    type Timer = TickSleepTimer;
    type Wake = PinChangeWake;
    type Error = HalError;

    fn buttons(&mut self) -> &mut Self::Buttons {
        &mut self.buttons
    }

    fn output(&mut self) -> &mut Self::Output {
        &mut self.output
    }

    fn timer(&mut self) -> &mut Self::Timer {
        &mut self.timer
    }

    fn wake(&mut self) -> &mut Self::Wake {
        &mut self.wake
    }
}
