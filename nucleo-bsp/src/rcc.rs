use core::ops::Deref;
use stm32ral::rcc;
use stm32ral::rcc::AHB2ENR;
use stm32ral::{modify_reg, read_reg};

/// GPIO ports on the AHB2 bus that share the `gpio` register layout.
///
/// The discriminant is the port's clock gate bit in `AHB2ENR`. Port I is
/// left out: it has its own register block type on this part.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Port {
    A = AHB2ENR::GPIOAEN::offset,
    B = AHB2ENR::GPIOBEN::offset,
    C = AHB2ENR::GPIOCEN::offset,
    D = AHB2ENR::GPIODEN::offset,
    E = AHB2ENR::GPIOEEN::offset,
    F = AHB2ENR::GPIOFEN::offset,
    G = AHB2ENR::GPIOGEN::offset,
    H = AHB2ENR::GPIOHEN::offset,
}

impl Port {
    const fn enable_mask(self) -> u32 {
        1 << (self as u32)
    }
}

pub struct RCC<P> {
    rcc: P,
}

impl<P: Deref<Target = rcc::RegisterBlock>> RCC<P> {
    pub fn new(rcc: P) -> Self {
        RCC { rcc }
    }

    /// Ungate the clock of a GPIO port.
    ///
    /// Accesses to the port's registers have no effect until this is done.
    pub fn enable_gpio(&self, port: Port) -> &Self {
        modify_reg!(rcc, self.rcc, AHB2ENR, |r| r | port.enable_mask());
        self
    }

    pub fn disable_gpio(&self, port: Port) -> &Self {
        modify_reg!(rcc, self.rcc, AHB2ENR, |r| r & !port.enable_mask());
        self
    }

    pub fn is_gpio_enabled(&self, port: Port) -> bool {
        read_reg!(rcc, self.rcc, AHB2ENR) & port.enable_mask() != 0
    }
}
