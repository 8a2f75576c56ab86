#![no_std]
#![no_main]

mod app;

use panic_rtt_target as _;
use cortex_m_rt::entry;
use git_version::git_version;
use rtt_target::{rtt_init_print, rprintln};
use nucleo_bsp::board;
use nucleo_bsp::rcc::RCC;

const GIT_VERSION: &str = git_version!(fallback = "unknown");

#[entry]
fn main() -> ! {
    rtt_init_print!();

    rprintln!("nucleo-blinky {}", GIT_VERSION);

    let rcc = RCC::new(stm32ral::rcc::RCC::take().unwrap());
    let led_gpio = board::take_led_gpio().unwrap();

    let mut app = app::App::new(&rcc, &led_gpio);
    app.setup();

    loop {
        app.poll();
    }
}
