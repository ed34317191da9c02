//! The process wide random source.
//!
//! There's one generation loop, so one stream of draws. Seeding it once
//! and drawing from nothing else is what makes a run replayable.
use ::log::info;
use ::once_cell::sync::OnceCell;
use ::parking_lot::Mutex;
use ::rand::{Rng, SeedableRng};
use ::rand_pcg::Pcg32;

static RNG: OnceCell<Mutex<Pcg32>> = OnceCell::new();

#[derive(::thiserror::Error, Debug)]
#[error("the random source was already seeded with {0}")]
pub(crate) struct AlreadySeeded(pub u64);

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed the random source. With no seed given, one is made up and logged.
pub(crate) fn seed(seed: Option<u64>) -> Result<u64, AlreadySeeded> {
    let seed = seed.unwrap_or_else(|| ::rand::thread_rng().gen());
    if SEED.set(seed).is_err() {
        return Err(AlreadySeeded(*SEED.get().unwrap_or(&seed)));
    }
    let _ = RNG.set(Mutex::new(Pcg32::seed_from_u64(seed)));
    info!("seed: {}", seed);
    Ok(seed)
}

/// Run `f` with the process wide random source.
/// Seeds from entropy if nothing seeded it first.
pub(crate) fn with_rng<T>(f: impl FnOnce(&mut Pcg32) -> T) -> T {
    let rng = RNG.get_or_init(|| {
        let seed = ::rand::thread_rng().gen();
        let _ = SEED.set(seed);
        info!("unseeded use of the random source, seed: {}", seed);
        Mutex::new(Pcg32::seed_from_u64(seed))
    });
    f(&mut *rng.lock())
}
