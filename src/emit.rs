//! Stringing generated calls together into programs.
use ::log::{debug, warn};
use ::tfgen::lexical::check_balanced;
use ::tfgen::pairing::BarrierWindows;
use ::tfgen::{GenerationContext, HookInvocationGenerator, RandomSource};

/// A program of `count` calls, one statement per line.
pub(crate) fn program(
    generator: &HookInvocationGenerator<'_>,
    rng: &mut dyn RandomSource,
    context: &GenerationContext<'_>,
    count: usize,
) -> (String, BarrierWindows) {
    let mut text = String::new();
    let mut windows = BarrierWindows::new();
    for _ in 0..count {
        let invocation = generator.generate(rng, context);
        if let Err(e) = check_balanced(invocation.fragment()) {
            // Only a broken expression generator can get us here.
            warn!("{} in generated call `{}`", e, invocation);
        }
        debug!("{}: {}", invocation.label(), invocation);
        windows.observe(&invocation);
        text.push_str(invocation.fragment());
        text.push_str(";\n");
    }
    for hook in windows.open_windows() {
        warn!(
            "program ends with an odd number ({}) of `{}` calls, the last one does nothing",
            windows.observed(hook),
            hook
        );
    }
    (text, windows)
}
