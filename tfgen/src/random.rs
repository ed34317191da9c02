//! The uniform random source every generator in this crate draws from.
use ::rand::{Rng, RngCore};

/// A uniform source of randomness.
///
/// Everything in this crate only ever asks for these two kinds of draw,
/// so a seeded source replays a generation run exactly, draw for draw.
/// Any [`RngCore`] is a `RandomSource`.
pub trait RandomSource {
    /// An integer in `[0, n)`.
    /// `uniform_int(0)` is `0`, which keeps nested bounds like
    /// `uniform_int(uniform_int(k))` well defined.
    fn uniform_int(&mut self, n: u64) -> u64;
    /// A real in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;

    /// A fair coin.
    fn coin(&mut self) -> bool {
        self.uniform_int(2) != 0
    }
    /// `true` with probability `1 / n`.
    fn one_in(&mut self, n: u64) -> bool {
        self.uniform_int(n) == 0
    }
}

impl<R: RngCore> RandomSource for R {
    fn uniform_int(&mut self, n: u64) -> u64 {
        if n == 0 {
            0
        } else {
            self.gen_range(0, n)
        }
    }
    fn uniform_float(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
