//! Random numbers in the ranges the GC and JIT testing functions care about.
use crate::random::RandomSource;
use crate::Environment;

/// Bound on the inner draw of [`allocation_count`].
pub const ALLOCATION_SPREAD: u64 = 6000;
/// Zeal levels are drawn from `0..ZEAL_LEVELS`.
pub const ZEAL_LEVELS: u64 = 14;
/// Zeal level the browser can't take (bug 815241).
pub const EMBEDDED_EXCLUDED_ZEAL: u64 = 9;
pub const BASELINE_TRIGGERS: u64 = 20;
pub const ION_TRIGGERS: u64 = 40;

/// A number of allocations, for `schedulegc` and zeal periods.
///
/// `exp(uniform(uniform(6000)) / 1000)`: mostly small, now and then a few hundred.
/// Randomizing the inner bound skews this harder toward small counts than
/// a single draw would.
pub fn allocation_count(rng: &mut dyn RandomSource) -> u64 {
    let bound = rng.uniform_int(ALLOCATION_SPREAD);
    let exponent = rng.uniform_int(bound);
    let count = (exponent as f64 / 1000.0).exp().floor() as u64;
    debug_assert!(count >= 1);
    count
}

/// A `gczeal` level, uniform over `0..14`.
/// The browser gets `0` in place of the excluded level; it isn't redrawn.
pub fn gc_zeal_level(rng: &mut dyn RandomSource, environment: Environment) -> u64 {
    let level = rng.uniform_int(ZEAL_LEVELS);
    if environment.is_embedded() && level == EMBEDDED_EXCLUDED_ZEAL {
        0
    } else {
        level
    }
}

/// A `gcslice` work budget, `2^(32u)` for uniform `u`. Heavily skewed small,
/// but reaching all the way to `u32::MAX`.
pub fn gc_slice_budget(rng: &mut dyn RandomSource) -> u64 {
    let budget = 2f64.powf(rng.uniform_float() * 32.0).floor() as u64;
    debug_assert!(budget >= 1 && budget <= 1 << 32);
    budget
}

/// Uses before baseline compilation kicks in.
pub fn baseline_trigger(rng: &mut dyn RandomSource) -> u64 {
    rng.uniform_int(BASELINE_TRIGGERS)
}

/// Uses before Ion compilation kicks in.
pub fn ion_trigger(rng: &mut dyn RandomSource) -> u64 {
    rng.uniform_int(ION_TRIGGERS)
}
