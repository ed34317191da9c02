//! Stand-ins for the expression generator and the browser object catalog.
//!
//! A real campaign plugs in a full JavaScript expression grammar here.
//! These are just enough to give every argument position something
//! plausible to chew on.
use ::tfgen::{CodeFragment, Environment, ExprGenerator, ObjectCatalog, RandomSource};

const TERMINALS: &[&str] = &[
    "this",
    "0",
    "-0",
    "1.5",
    "NaN",
    "null",
    "undefined",
    "true",
    "''",
    "({})",
    "[]",
    "new Object()",
    "(function(){})",
    "Math",
    "new ArrayBuffer(8)",
    "Symbol()",
];

/// Terminal expressions, the bindings in scope, and with depth to spare
/// an occasional array or object literal around a smaller expression.
#[derive(Debug, Default)]
pub(crate) struct TerminalExprs;

impl TerminalExprs {
    fn terminal(&self, rng: &mut dyn RandomSource, bindings: &[String]) -> CodeFragment {
        if !bindings.is_empty() && rng.coin() {
            bindings[rng.uniform_int(bindings.len() as u64) as usize].clone()
        } else {
            TERMINALS[rng.uniform_int(TERMINALS.len() as u64) as usize].to_owned()
        }
    }
}

impl ExprGenerator for TerminalExprs {
    fn make_expr(&self, rng: &mut dyn RandomSource, depth: u32, bindings: &[String], environment: Environment) -> CodeFragment {
        if depth == 0 {
            return self.terminal(rng, bindings);
        }
        match rng.uniform_int(4) {
            0 => format!("[{}]", self.make_expr(rng, depth - 1, bindings, environment)),
            1 => format!("({{x: {}}})", self.make_expr(rng, depth - 1, bindings, environment)),
            _ => self.terminal(rng, bindings),
        }
    }
}

const WINDOW_GLOBALS: &[&str] = &["window", "window.top", "window.parent", "window.frames[0]", "self"];
const OBJECTS: &[&str] = &[
    "document",
    "document.body",
    "document.documentElement",
    "navigator",
    "location",
    "window.history",
    "document.createElement('div')",
    "new XMLHttpRequest()",
];

/// A fixed list of host objects, standing in for a live object catalog.
#[derive(Debug, Default)]
pub(crate) struct HostThings;

impl ObjectCatalog for HostThings {
    fn any_object(&self, rng: &mut dyn RandomSource) -> CodeFragment {
        OBJECTS[rng.uniform_int(OBJECTS.len() as u64) as usize].to_owned()
    }
    fn window_global(&self, rng: &mut dyn RandomSource) -> CodeFragment {
        WINDOW_GLOBALS[rng.uniform_int(WINDOW_GLOBALS.len() as u64) as usize].to_owned()
    }
}
