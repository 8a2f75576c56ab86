use core::ptr;

/// Spin for `iterations` no-op instructions.
///
/// The loop counter lives behind volatile accesses so the loop survives
/// optimisation. Nothing calibrates it: the time taken scales with the core
/// clock. Returns the counter's final value.
#[inline(never)]
pub fn busy_wait(iterations: u32) -> u32 {
    let mut i: u32 = 0;
    // SAFETY: `i` is a live local; volatile only pins the accesses in place.
    unsafe {
        while ptr::read_volatile(&i) < iterations {
            nop();
            let next = ptr::read_volatile(&i) + 1;
            ptr::write_volatile(&mut i, next);
        }
        ptr::read_volatile(&i)
    }
}

#[inline(always)]
fn nop() {
    #[cfg(target_arch = "arm")]
    cortex_m::asm::nop();
    #[cfg(not(target_arch = "arm"))]
    core::hint::spin_loop();
}
