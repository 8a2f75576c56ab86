use core::ops::Deref;
use stm32ral::{gpio, rcc};

use crate::delay::busy_wait;
use crate::gpio::Pin;
use crate::rcc::RCC;

/// Status LED controller: toggle, count, wait.
pub struct Blinky<'a, R, G> {
    rcc: &'a RCC<R>,
    led: Pin<'a, G>,
    delay: u32,
    counter: u32,
}

impl<'a, R, G> Blinky<'a, R, G>
where
    R: Deref<Target = rcc::RegisterBlock>,
    G: Deref<Target = gpio::RegisterBlock>,
{
    pub fn new(rcc: &'a RCC<R>, led: Pin<'a, G>, delay: u32) -> Self {
        Blinky {
            rcc,
            led,
            delay,
            counter: 0,
        }
    }

    /// Clock the port, make the LED pin a low-speed push-pull output and switch it on
    pub fn setup(&mut self) {
        self.rcc.enable_gpio(self.led.port());
        self.led
            .set_otype_pushpull()
            .set_ospeed_low()
            .set_mode_output()
            .set_high();
    }

    /// One pass of the main loop
    pub fn poll(&mut self) {
        self.led.toggle();
        self.counter = self.counter.wrapping_add(1);
        busy_wait(self.delay);
    }

    pub fn run_for(&mut self, iterations: u32) {
        for _ in 0..iterations {
            self.poll();
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn led(&self) -> &Pin<'a, G> {
        &self.led
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::{Mode, GPIO};
    use crate::rcc::Port;

    struct Board {
        rcc: rcc::RegisterBlock,
        gpiob: gpio::RegisterBlock,
    }

    impl Board {
        fn reset() -> Self {
            unsafe {
                Board {
                    rcc: core::mem::zeroed(),
                    gpiob: core::mem::zeroed(),
                }
            }
        }
    }

    #[test]
    fn setup_then_two_toggles() {
        let board = Board::reset();
        let rcc = RCC::new(&board.rcc);
        let gpiob = GPIO::new(Port::B, &board.gpiob);
        let mut blinky = Blinky::new(&rcc, gpiob.pin(7), 0);

        blinky.setup();

        assert_eq!(board.rcc.AHB2ENR.read(), 1 << 1);
        assert_eq!(board.gpiob.MODER.read(), 0b01 << 14);
        assert_eq!(board.gpiob.ODR.read(), 1 << 7);
        assert_eq!(board.gpiob.OTYPER.read(), 0);
        assert_eq!(gpiob.mode(7), Mode::Output);

        blinky.poll();
        assert_eq!(board.gpiob.ODR.read() & (1 << 7), 0);

        blinky.poll();
        assert_eq!(board.gpiob.ODR.read() & (1 << 7), 1 << 7);
        assert_eq!(blinky.counter(), 2);
    }

    #[test]
    fn setup_leaves_other_pins_alone() {
        let board = Board::reset();
        board.gpiob.MODER.write(0b11 << 2);
        board.gpiob.ODR.write(1 << 3);
        let rcc = RCC::new(&board.rcc);
        let gpiob = GPIO::new(Port::B, &board.gpiob);
        let mut blinky = Blinky::new(&rcc, gpiob.pin(7), 0);

        blinky.setup();

        assert_eq!(board.gpiob.MODER.read(), (0b11 << 2) | (0b01 << 14));
        assert_eq!(board.gpiob.ODR.read(), (1 << 3) | (1 << 7));
    }

    #[test]
    fn counter_tracks_toggles() {
        let board = Board::reset();
        let rcc = RCC::new(&board.rcc);
        let gpiob = GPIO::new(Port::B, &board.gpiob);
        let mut blinky = Blinky::new(&rcc, gpiob.pin(7), 10);
        blinky.setup();

        blinky.run_for(7);

        assert_eq!(blinky.counter(), 7);
        // Odd number of toggles from "on" leaves the LED off
        assert!(!blinky.led().is_set_high());

        blinky.run_for(3);
        assert_eq!(blinky.counter(), 10);
        assert!(blinky.led().is_set_high());
    }

    #[test]
    fn setup_clocks_the_port_the_pin_lives_on() {
        let board = Board::reset();
        let rcc = RCC::new(&board.rcc);
        let gpioe = GPIO::new(Port::E, &board.gpiob);
        let mut blinky = Blinky::new(&rcc, gpioe.pin(3), 0);

        blinky.setup();

        assert_eq!(board.rcc.AHB2ENR.read(), 1 << 4);
        assert!(rcc.is_gpio_enabled(Port::E));
        assert!(!rcc.is_gpio_enabled(Port::B));
        assert_eq!(board.gpiob.ODR.read(), 1 << 3);
    }

    #[test]
    fn zero_iterations_do_nothing() {
        let board = Board::reset();
        let rcc = RCC::new(&board.rcc);
        let gpiob = GPIO::new(Port::B, &board.gpiob);
        let mut blinky = Blinky::new(&rcc, gpiob.pin(7), 0);
        blinky.setup();

        blinky.run_for(0);

        assert_eq!(blinky.counter(), 0);
        assert_eq!(board.gpiob.ODR.read(), 1 << 7);
    }
}
