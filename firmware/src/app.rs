use nucleo_bsp as bsp;
use bsp::blinky::Blinky;
use bsp::board;
use rtt_target::rprintln;
use stm32ral::{gpio, rcc};

#[cfg(feature = "fast-blink")]
const DELAY: u32 = board::FAST_BLINK_DELAY;
#[cfg(not(feature = "fast-blink"))]
const DELAY: u32 = board::BLINK_DELAY;

pub struct App<'a> {
    blinky: Blinky<'a, rcc::Instance, gpio::Instance>,
}

impl<'a> App<'a> {
    pub fn new(
        rcc: &'a bsp::rcc::RCC<rcc::Instance>,
        gpio: &'a bsp::gpio::GPIO<gpio::Instance>,
    ) -> Self {
        App {
            blinky: Blinky::new(rcc, gpio.pin(board::LED_PIN), DELAY),
        }
    }

    pub fn setup(&mut self) {
        // Clock the LED's port and turn the LED on
        self.blinky.setup();

        rprintln!(
            "LED on P{:?}{}, {} wait iterations per toggle",
            self.blinky.led().port(),
            self.blinky.led().index(),
            DELAY
        );
    }

    pub fn poll(&mut self) {
        self.blinky.poll();
    }
}
