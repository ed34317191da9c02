//! The table of testing function calls, and how often each one comes up.
//!
//! Weights here set how a fuzzing campaign's attention is split between
//! the hooks. Change them with care.
use crate::catalog::{CatalogError, WeightedCatalog};
use crate::env::EnvironmentAdapter;
use crate::generator::GenerationContext;
use crate::hook::Hook;
use crate::random::RandomSource;
use crate::scalar;
use crate::{CodeFragment, Environment};

/// Renders one call. Hook names are resolved before arguments are drawn,
/// except in [`enable_gc_zeal`], which draws level and period first.
pub type Render = fn(&Scope<'_>, &mut dyn RandomSource) -> CodeFragment;

/// One row of the hook table.
#[derive(Clone, Copy)]
pub struct HookTemplate {
    label: &'static str,
    hook: Hook,
    render: Render,
}
impl HookTemplate {
    /// Short human readable description, unique within the table.
    pub fn label(&self) -> &'static str {
        self.label
    }
    pub fn hook(&self) -> Hook {
        self.hook
    }
    pub fn render(&self, scope: &Scope<'_>, rng: &mut dyn RandomSource) -> CodeFragment {
        (self.render)(scope, rng)
    }
}
impl ::core::fmt::Debug for HookTemplate {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("HookTemplate")
            .field("label", &self.label)
            .field("hook", &self.hook)
            .finish()
    }
}

/// What a template gets to look at while rendering.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'s> {
    adapter: &'s EnvironmentAdapter<'s>,
    context: &'s GenerationContext<'s>,
}
impl<'s> Scope<'s> {
    pub fn new(adapter: &'s EnvironmentAdapter<'s>, context: &'s GenerationContext<'s>) -> Self {
        Self { adapter, context }
    }
    pub fn context(&self) -> &GenerationContext<'s> {
        self.context
    }
    pub fn hook(&self, rng: &mut dyn RandomSource, hook: Hook) -> CodeFragment {
        self.adapter.resolve_hook_call(rng, hook, self.context.environment)
    }
    /// `hook(args)`, with `args` already rendered.
    pub fn call(&self, rng: &mut dyn RandomSource, hook: Hook, args: &str) -> CodeFragment {
        format!("{}({})", self.hook(rng, hook), args)
    }
    pub fn global(&self, rng: &mut dyn RandomSource) -> CodeFragment {
        let GenerationContext { depth, environment, bindings } = *self.context;
        self.adapter.resolve_global(rng, depth, bindings, environment)
    }
    pub fn object(&self, rng: &mut dyn RandomSource) -> CodeFragment {
        let GenerationContext { depth, environment, bindings } = *self.context;
        self.adapter.resolve_object(rng, depth, bindings, environment)
    }
}

/// Throw away the result of `call` syntactically.
/// Some positions misparse a bare call (bug 940253),
/// and some results differ between configurations (bug 944153).
pub fn discard(call: CodeFragment) -> CodeFragment {
    format!("(void {})", call)
}

/// `gczeal(level, period)`: collect every `period` allocations.
/// Level and period are drawn before the hook name.
pub fn enable_gc_zeal(scope: &Scope<'_>, rng: &mut dyn RandomSource) -> CodeFragment {
    let level = scalar::gc_zeal_level(rng, scope.context().environment);
    let period = scalar::allocation_count(rng);
    scope.call(rng, Hook::GcZeal, &format!("{}, {}", level, period))
}

/// Chance, as one in N, that the zeal row really turns zeal on.
/// Zeal makes everything crawl.
pub fn zeal_odds(environment: Environment) -> u64 {
    match environment {
        Environment::Embedded => 1,
        Environment::Standalone => 100,
    }
}

macro_rules! table {
    ($($weight:literal, $label:literal, $hook:ident => $render:expr;)*) => {
        vec![$(
            ($weight, HookTemplate { label: $label, hook: Hook::$hook, render: $render }),
        )*]
    };
}

/// The hook table, in draw order.
pub fn table() -> Vec<(u64, HookTemplate)> {
    use Hook::*;
    table! {
        // Full collections, of everything or of one compartment.
        10, "gc()", Gc => |s, r| discard(s.call(r, Gc, ""));
        10, "gc('compartment')", Gc => |s, r| discard(s.call(r, Gc, "'compartment'"));
        5, "gc(global)", Gc => |s, r| {
            let f = s.hook(r, Gc);
            discard(format!("{}({})", f, s.global(r)))
        };

        // Nursery.
        20, "minorgc(false)", MinorGc => |s, r| discard(s.call(r, MinorGc, "false"));
        20, "minorgc(true)", MinorGc => |s, r| discard(s.call(r, MinorGc, "true"));

        20, "gcslice(budget)", GcSlice => |s, r| {
            let f = s.hook(r, GcSlice);
            format!("{}({})", f, scalar::gc_slice_budget(r))
        };
        10, "selectforgc(object)", SelectForGc => |s, r| {
            let f = s.hook(r, SelectForGc);
            format!("{}({})", f, s.object(r))
        };
        10, "schedulegc(global)", ScheduleGc => |s, r| {
            let f = s.hook(r, ScheduleGc);
            format!("{}({})", f, s.global(r))
        };
        10, "schedulegc(allocations)", ScheduleGc => |s, r| {
            let f = s.hook(r, ScheduleGc);
            format!("{}({})", f, scalar::allocation_count(r))
        };

        1, "gczeal(level, period)", GcZeal => |s, r| {
            let odds = zeal_odds(s.context().environment);
            if odds == 1 || r.one_in(odds) {
                enable_gc_zeal(s, r)
            } else {
                "0".to_owned()
            }
        };

        // Effective in pairs, see `Hook::is_paired`.
        10, "verifyprebarriers()", VerifyPreBarriers => |s, r| s.call(r, VerifyPreBarriers, "");
        10, "verifypostbarriers()", VerifyPostBarriers => |s, r| s.call(r, VerifyPostBarriers, "");

        1, "countHeap()", CountHeap => |s, r| discard(s.call(r, CountHeap, ""));

        5, "validategc(false)", ValidateGc => |s, r| s.call(r, ValidateGc, "false");
        1, "validategc(true)", ValidateGc => |s, r| s.call(r, ValidateGc, "true");
        5, "fullcompartmentchecks(false)", FullCompartmentChecks => |s, r| s.call(r, FullCompartmentChecks, "false");
        1, "fullcompartmentchecks(true)", FullCompartmentChecks => |s, r| s.call(r, FullCompartmentChecks, "true");
        5, "setIonCheckGraphCoherency(false)", SetIonCheckGraphCoherency => |s, r| s.call(r, SetIonCheckGraphCoherency, "false");
        1, "setIonCheckGraphCoherency(true)", SetIonCheckGraphCoherency => |s, r| s.call(r, SetIonCheckGraphCoherency, "true");
        1, "enableOsiPointRegisterChecks()", EnableOsiPointRegisterChecks => |s, r| s.call(r, EnableOsiPointRegisterChecks, "");

        // Run time versions of --baseline-eager, --ion-eager and friends.
        1, "setJitCompilerOption(baseline)", SetJitCompilerOption => |s, r| {
            let f = s.hook(r, SetJitCompilerOption);
            discard(format!("{}('baseline.usecount.trigger', {})", f, scalar::baseline_trigger(r)))
        };
        1, "setJitCompilerOption(ion)", SetJitCompilerOption => |s, r| {
            let f = s.hook(r, SetJitCompilerOption);
            discard(format!("{}('ion.usecount.trigger', {})", f, scalar::ion_trigger(r)))
        };

        5, "deterministicgc(false)", DeterministicGc => |s, r| s.call(r, DeterministicGc, "false");
        1, "deterministicgc(true)", DeterministicGc => |s, r| s.call(r, DeterministicGc, "true");

        5, "gcPreserveCode()", GcPreserveCode => |s, r| s.call(r, GcPreserveCode, "");
    }
}

/// Build the hook catalog. Call this once and share the result.
pub fn hooks() -> Result<WeightedCatalog<HookTemplate>, CatalogError> {
    WeightedCatalog::new(table())
}
