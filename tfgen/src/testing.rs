//! Shared test fixtures.
use crate::env::{ExprGenerator, ObjectCatalog};
use crate::random::RandomSource;
use crate::{CodeFragment, Environment};
use ::std::collections::VecDeque;

/// A random source that replays a fixed script of integer draws.
/// Panics if a scripted value doesn't fit the bound it's asked for,
/// or if the script runs dry. Like any other source, `uniform_int(0)`
/// is `0` and doesn't take from the script.
pub(crate) struct Scripted {
    ints: VecDeque<u64>,
    floats: VecDeque<f64>,
}
impl Scripted {
    pub(crate) fn new(ints: &[u64]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            floats: VecDeque::new(),
        }
    }
    pub(crate) fn with_floats(mut self, floats: &[f64]) -> Self {
        self.floats = floats.iter().copied().collect();
        self
    }
    pub(crate) fn exhausted(&self) -> bool {
        self.ints.is_empty() && self.floats.is_empty()
    }
}
impl RandomSource for Scripted {
    fn uniform_int(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        let next = self.ints.pop_front().expect("integer script ran dry");
        assert!(next < n, "scripted {} for a draw below {}", next, n);
        next
    }
    fn uniform_float(&mut self) -> f64 {
        self.floats.pop_front().expect("float script ran dry")
    }
}

/// Expression stand-in that records the depth it was asked for.
pub(crate) struct DepthExprs;
impl ExprGenerator for DepthExprs {
    fn make_expr(&self, _rng: &mut dyn RandomSource, depth: u32, _bindings: &[String], _env: Environment) -> CodeFragment {
        format!("expr{}", depth)
    }
}

pub(crate) struct Things;
impl ObjectCatalog for Things {
    fn any_object(&self, _rng: &mut dyn RandomSource) -> CodeFragment {
        "document.body".into()
    }
    fn window_global(&self, _rng: &mut dyn RandomSource) -> CodeFragment {
        "window".into()
    }
}

/// Pearson's chi-squared statistic.
pub(crate) fn chi_squared(observed: &[u64], expected: &[f64]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            let d = o as f64 - e;
            d * d / e
        })
        .sum()
}
