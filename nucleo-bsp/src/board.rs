//! Nucleo-144 (STM32L4R5ZI) wiring and timing constants

use stm32ral::gpio;

use crate::gpio::GPIO;
use crate::rcc::Port;

/// LED2 (blue) sits on PB7, active high
pub const LED_PORT: Port = Port::B;
pub const LED_PIN: u8 = 7;

/// Busy-wait iterations between LED toggles. Not calibrated.
pub const BLINK_DELAY: u32 = 400_000;

/// Shorter delay selected by the firmware's `fast-blink` feature
pub const FAST_BLINK_DELAY: u32 = 100_000;

/// Claim the port LED2 is wired to. `None` if it was already taken.
pub fn take_led_gpio() -> Option<GPIO<gpio::Instance>> {
    gpio::GPIOB::take().map(|p| GPIO::new(LED_PORT, p))
}
