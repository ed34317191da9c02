#![no_main]
use libfuzzer_sys::fuzz_target;

use ::rand_pcg::Pcg32;
use ::tfgen::lexical::check_balanced;
use ::tfgen::templates::hooks;
use ::tfgen::{CodeFragment, Environment, ExprGenerator, GenerationContext, HookInvocationGenerator, ObjectCatalog, RandomSource};

struct Terminal;
impl ExprGenerator for Terminal {
    fn make_expr(&self, _: &mut dyn RandomSource, depth: u32, _: &[String], _: Environment) -> CodeFragment {
        format!("[{}]", depth)
    }
}
impl ObjectCatalog for Terminal {
    fn any_object(&self, _: &mut dyn RandomSource) -> CodeFragment {
        "document".into()
    }
    fn window_global(&self, _: &mut dyn RandomSource) -> CodeFragment {
        "window".into()
    }
}

fuzz_target!(|data: &[u8]| {
    // Sixteen bytes of state and stream, then one byte whose low bit picks
    // the environment and whose rest is the depth. Anything after is ignored.
    if data.len() < 17 { return }
    let state = u64::from_le_bytes([data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7]]);
    let stream = u64::from_le_bytes([data[8], data[9], data[10], data[11], data[12], data[13], data[14], data[15]]);
    let environment = if data[16] & 1 == 0 { Environment::Standalone } else { Environment::Embedded };
    let hooks = hooks().unwrap();
    let generator = HookInvocationGenerator::new(&hooks, &Terminal, &Terminal);
    let mut rng = Pcg32::new(state, stream);
    let context = GenerationContext::new(u32::from(data[16] >> 1), environment);
    for _ in 0..64 {
        let invocation = generator.generate(&mut rng, &context);
        if let Err(e) = check_balanced(invocation.fragment()) {
            panic!("{}: {}", e, invocation);
        }
    }
});
