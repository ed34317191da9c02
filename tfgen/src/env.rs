//! Turning hook names and argument positions into text for a particular environment.
//!
//! The browser exposes the testing functions on a privileged object,
//! the shell exposes them as globals. The shell side also has the
//! differential testing guard, which lives here so that it applies to
//! every hook, whichever template asked for it.
use crate::hook::Hook;
use crate::random::RandomSource;
use crate::{CodeFragment, Environment};
use ::log::trace;

/// Object the browser hangs the testing functions off of.
pub const DEFAULT_NAMESPACE: &str = "fuzzPriv";
/// Shell builtin that `--no-asmjs` flips.
pub const DEFAULT_PROBE: &str = "isAsmJSCompilationAvailable";
/// One shell hook reference in this many is guarded.
pub const DEFAULT_GUARD_ODDS: u64 = 5;

/// Makes arbitrary expressions for argument positions that take any value.
pub trait ExprGenerator {
    /// `depth` is the remaining recursion budget. At `0` the result
    /// must be terminal.
    fn make_expr(
        &self,
        rng: &mut dyn RandomSource,
        depth: u32,
        bindings: &[String],
        environment: Environment,
    ) -> CodeFragment;
}

/// Browser side references to live objects.
pub trait ObjectCatalog {
    fn any_object(&self, rng: &mut dyn RandomSource) -> CodeFragment;
    /// A reference to some window's global object.
    fn window_global(&self, rng: &mut dyn RandomSource) -> CodeFragment;
}

#[derive(Clone, Copy)]
pub struct EnvironmentAdapter<'a> {
    exprs: &'a dyn ExprGenerator,
    things: &'a dyn ObjectCatalog,
    namespace: &'a str,
    probe: &'a str,
    guard_odds: u64,
}

impl<'a> EnvironmentAdapter<'a> {
    pub fn new(exprs: &'a dyn ExprGenerator, things: &'a dyn ObjectCatalog) -> Self {
        Self {
            exprs,
            things,
            namespace: DEFAULT_NAMESPACE,
            probe: DEFAULT_PROBE,
            guard_odds: DEFAULT_GUARD_ODDS,
        }
    }
    pub fn namespace(self, namespace: &'a str) -> Self {
        Self { namespace, ..self }
    }
    pub fn probe(self, probe: &'a str) -> Self {
        Self { probe, ..self }
    }
    /// Guard one hook reference in `odds`. `0` switches the guard off.
    pub fn guard_odds(self, odds: u64) -> Self {
        Self {
            guard_odds: odds,
            ..self
        }
    }

    /// Text that evaluates to the callable for `hook`.
    ///
    /// In the shell, one time in [`guard_odds`](Self::guard_odds) this is
    /// `(probe() ? hook : (function(){}))` instead of the bare name, with
    /// the probe negated half the time. Running a testing function by hand
    /// would show up in `uneval(this)`, but `--no-asmjs` flips the probe,
    /// so the two sides of a differential run both still see the same
    /// globals and only differ in which of them actually did the work.
    pub fn resolve_hook_call(&self, rng: &mut dyn RandomSource, hook: Hook, environment: Environment) -> CodeFragment {
        match environment {
            Environment::Embedded => format!("{}.{}", self.namespace, hook.name()),
            Environment::Standalone => {
                if self.guard_odds != 0 && rng.one_in(self.guard_odds) {
                    let negate = if rng.coin() { "!" } else { "" };
                    trace!("guarding {} behind {}{}()", hook, negate, self.probe);
                    format!("({}{}() ? {} : (function(){{}}))", negate, self.probe, hook.name())
                } else {
                    hook.name().to_owned()
                }
            }
        }
    }

    /// A global object argument.
    pub fn resolve_global(
        &self,
        rng: &mut dyn RandomSource,
        depth: u32,
        bindings: &[String],
        environment: Environment,
    ) -> CodeFragment {
        match environment {
            Environment::Embedded => self.things.window_global(rng),
            Environment::Standalone => self.exprs.make_expr(rng, depth.saturating_sub(1), bindings, environment),
        }
    }

    /// Any object argument.
    pub fn resolve_object(
        &self,
        rng: &mut dyn RandomSource,
        depth: u32,
        bindings: &[String],
        environment: Environment,
    ) -> CodeFragment {
        match environment {
            Environment::Embedded => self.things.any_object(rng),
            Environment::Standalone => self.exprs.make_expr(rng, depth.saturating_sub(1), bindings, environment),
        }
    }
}

impl ::core::fmt::Debug for EnvironmentAdapter<'_> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("EnvironmentAdapter")
            .field("namespace", &self.namespace)
            .field("probe", &self.probe)
            .field("guard_odds", &self.guard_odds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::EnvironmentAdapter;
    use crate::hook::Hook;
    use crate::testing::{DepthExprs, Scripted, Things};
    use crate::Environment::{Embedded, Standalone};
    use ::rand::SeedableRng;
    use ::rand_pcg::Pcg32;

    #[test]
    fn embedded_hooks_are_namespaced() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things);
        // No draws in the browser.
        let mut rng = Scripted::new(&[]);
        assert_eq!(adapter.resolve_hook_call(&mut rng, Hook::Gc, Embedded), "fuzzPriv.gc");
        assert_eq!(adapter.resolve_hook_call(&mut rng, Hook::CountHeap, Embedded), "fuzzPriv.countHeap");
    }

    #[test]
    fn standalone_hooks_are_bare() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things);
        let mut rng = Scripted::new(&[4, 1]);
        assert_eq!(adapter.resolve_hook_call(&mut rng, Hook::MinorGc, Standalone), "minorgc");
        assert_eq!(adapter.resolve_hook_call(&mut rng, Hook::GcSlice, Standalone), "gcslice");
        assert!(rng.exhausted());
    }

    #[test]
    fn negated_guard() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things);
        let mut rng = Scripted::new(&[0, 1]);
        assert_eq!(
            adapter.resolve_hook_call(&mut rng, Hook::Gc, Standalone),
            "(!isAsmJSCompilationAvailable() ? gc : (function(){}))"
        );
    }

    #[test]
    fn plain_guard() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things);
        let mut rng = Scripted::new(&[0, 0]);
        assert_eq!(
            adapter.resolve_hook_call(&mut rng, Hook::VerifyPreBarriers, Standalone),
            "(isAsmJSCompilationAvailable() ? verifyprebarriers : (function(){}))"
        );
    }

    #[test]
    fn guard_frequency() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things);
        let mut rng = Pcg32::seed_from_u64(0x9a4d);
        let calls = 100_000;
        let (mut guarded, mut negated) = (0, 0);
        for _ in 0..calls {
            let text = adapter.resolve_hook_call(&mut rng, Hook::Gc, Standalone);
            if text.contains("isAsmJSCompilationAvailable") {
                guarded += 1;
                if text.starts_with("(!") {
                    negated += 1;
                }
            } else {
                assert_eq!(text, "gc");
            }
        }
        // One in five: about 20000, give or take 126.
        assert!(guarded > 19_200 && guarded < 20_800, "{} of {}", guarded, calls);
        // Half of those: about 10000, give or take 71.
        let half = guarded / 2;
        assert!(negated > half - 500 && negated < half + 500, "{} of {}", negated, guarded);
    }

    #[test]
    fn guard_can_be_switched_off() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things).guard_odds(0);
        let mut rng = Scripted::new(&[]);
        assert_eq!(adapter.resolve_hook_call(&mut rng, Hook::Gc, Standalone), "gc");
    }

    #[test]
    fn custom_namespace_and_probe() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things)
            .namespace("SpecialPowers.Cu")
            .probe("isAsmJSFunction");
        let mut rng = Scripted::new(&[0, 1]);
        assert_eq!(adapter.resolve_hook_call(&mut rng, Hook::Gc, Embedded), "SpecialPowers.Cu.gc");
        assert_eq!(
            adapter.resolve_hook_call(&mut rng, Hook::Gc, Standalone),
            "(!isAsmJSFunction() ? gc : (function(){}))"
        );
    }

    #[test]
    fn arguments_by_environment() {
        let adapter = EnvironmentAdapter::new(&DepthExprs, &Things);
        let mut rng = Scripted::new(&[]);
        assert_eq!(adapter.resolve_global(&mut rng, 3, &[], Embedded), "window");
        assert_eq!(adapter.resolve_object(&mut rng, 3, &[], Embedded), "document.body");
        assert_eq!(adapter.resolve_global(&mut rng, 3, &[], Standalone), "expr2");
        assert_eq!(adapter.resolve_object(&mut rng, 0, &[], Standalone), "expr0");
    }
}
