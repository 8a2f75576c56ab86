use core::ops::Deref;
use stm32ral::gpio;
use stm32ral::gpio::MODER::MODER0::RW as MODE;
use stm32ral::gpio::OSPEEDR::OSPEEDR0::RW as OSPEED;
use stm32ral::gpio::OTYPER::OT0::RW as OTYPE;
use stm32ral::{modify_reg, read_reg};

use crate::rcc::Port;

/// Pin mode encodings of the 2-bit MODER fields
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Mode {
    Input = MODE::Input,
    Output = MODE::Output,
    Alternate = MODE::Alternate,
    Analog = MODE::Analog,
}

impl Mode {
    fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            MODE::Input => Mode::Input,
            MODE::Output => Mode::Output,
            MODE::Alternate => Mode::Alternate,
            _ => Mode::Analog,
        }
    }
}

/// One GPIO port.
///
/// `P` is anything that dereferences to the port's register block: the
/// `stm32ral` instance on the device, or a plain in-memory block. The port
/// letter travels with it so its clock gate can be found from any pin.
pub struct GPIO<P> {
    port: Port,
    p: P,
}

impl<P: Deref<Target = gpio::RegisterBlock>> GPIO<P> {
    pub fn new(port: Port, p: P) -> Self {
        GPIO { port, p }
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn pin(&self, n: u8) -> Pin<'_, P> {
        assert!(n < 16);
        Pin { n, port: self }
    }

    /// Drive pin `n` high, leaving the other ODR bits alone
    pub fn set_high(&self, n: u8) -> &Self {
        assert!(n < 16);
        modify_reg!(gpio, self.p, ODR, |r| r | (1 << n));
        self
    }

    /// Drive pin `n` low, leaving the other ODR bits alone
    pub fn set_low(&self, n: u8) -> &Self {
        assert!(n < 16);
        modify_reg!(gpio, self.p, ODR, |r| r & !(1 << n));
        self
    }

    pub fn toggle(&self, n: u8) -> &Self {
        assert!(n < 16);
        modify_reg!(gpio, self.p, ODR, |r| r ^ (1 << n));
        self
    }

    pub fn set_mode(&self, n: u8, mode: Mode) -> &Self {
        assert!(n < 16);
        let offset = n * 2;
        let mask = 0b11 << offset;
        let val = ((mode as u32) << offset) & mask;
        modify_reg!(gpio, self.p, MODER, |r| (r & !mask) | val);
        self
    }

    pub fn mode(&self, n: u8) -> Mode {
        assert!(n < 16);
        Mode::from_bits(read_reg!(gpio, self.p, MODER) >> (n * 2))
    }

    pub fn set_mode_output(&self, n: u8) -> &Self {
        self.set_mode(n, Mode::Output)
    }

    fn set_otype(&self, n: u8, otype: u32) -> &Self {
        assert!(n < 16);
        let offset = n;
        let mask = 0b1 << offset;
        let val = (otype << offset) & mask;
        modify_reg!(gpio, self.p, OTYPER, |r| (r & !mask) | val);
        self
    }

    pub fn set_otype_opendrain(&self, n: u8) -> &Self {
        self.set_otype(n, OTYPE::OpenDrain)
    }

    pub fn set_otype_pushpull(&self, n: u8) -> &Self {
        self.set_otype(n, OTYPE::PushPull)
    }

    fn set_ospeed(&self, n: u8, ospeed: u32) -> &Self {
        assert!(n < 16);
        let offset = n * 2;
        let mask = 0b11 << offset;
        let val = (ospeed << offset) & mask;
        modify_reg!(gpio, self.p, OSPEEDR, |r| (r & !mask) | val);
        self
    }

    pub fn set_ospeed_low(&self, n: u8) -> &Self {
        self.set_ospeed(n, OSPEED::LowSpeed)
    }

    pub fn set_ospeed_medium(&self, n: u8) -> &Self {
        self.set_ospeed(n, OSPEED::MediumSpeed)
    }

    pub fn set_ospeed_veryhigh(&self, n: u8) -> &Self {
        self.set_ospeed(n, OSPEED::VeryHighSpeed)
    }

    pub fn get_odr(&self) -> u32 {
        read_reg!(gpio, self.p, ODR)
    }

    pub fn get_pin_odr(&self, n: u8) -> u32 {
        (self.get_odr() & (1 << n)) >> n
    }

    pub fn get_idr(&self) -> u32 {
        read_reg!(gpio, self.p, IDR)
    }

    pub fn get_pin_idr(&self, n: u8) -> u32 {
        (self.get_idr() & (1 << n)) >> n
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum PinState {
    Low = 0,
    High = 1,
}

pub struct Pin<'a, P> {
    n: u8,
    port: &'a GPIO<P>,
}

impl<'a, P: Deref<Target = gpio::RegisterBlock>> Pin<'a, P> {
    pub fn index(&self) -> u8 {
        self.n
    }

    pub fn port(&self) -> Port {
        self.port.port()
    }

    pub fn set_high(&self) -> &Self {
        self.port.set_high(self.n);
        self
    }

    pub fn set_low(&self) -> &Self {
        self.port.set_low(self.n);
        self
    }

    pub fn set_state(&self, state: PinState) -> &Self {
        match state {
            PinState::Low => self.set_low(),
            PinState::High => self.set_high(),
        }
    }

    /// Level currently driven by the output latch
    pub fn get_output_state(&self) -> PinState {
        match self.port.get_pin_odr(self.n) {
            0 => PinState::Low,
            _ => PinState::High,
        }
    }

    /// Level sampled on the pad
    pub fn get_state(&self) -> PinState {
        match self.port.get_pin_idr(self.n) {
            0 => PinState::Low,
            _ => PinState::High,
        }
    }

    pub fn is_set_high(&self) -> bool {
        self.get_output_state() == PinState::High
    }

    pub fn is_low(&self) -> bool {
        self.get_state() == PinState::Low
    }

    pub fn toggle(&self) -> &Self {
        self.port.toggle(self.n);
        self
    }

    pub fn mode(&self) -> Mode {
        self.port.mode(self.n)
    }

    pub fn set_mode_output(&self) -> &Self {
        self.port.set_mode_output(self.n);
        self
    }

    pub fn set_otype_pushpull(&self) -> &Self {
        self.port.set_otype_pushpull(self.n);
        self
    }

    pub fn set_ospeed_low(&self) -> &Self {
        self.port.set_ospeed_low(self.n);
        self
    }
}
