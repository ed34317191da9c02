//! The front door: draw a row of the hook table and render it.
use crate::catalog::WeightedCatalog;
use crate::env::{EnvironmentAdapter, ExprGenerator, ObjectCatalog};
use crate::hook::Hook;
use crate::random::RandomSource;
use crate::templates::{self, HookTemplate, Scope};
use crate::{CodeFragment, Environment};

/// Per request generation parameters. Never mutated while generating;
/// only the expression generator spends `depth`, when it recurses.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    /// Remaining recursion budget.
    pub depth: u32,
    pub environment: Environment,
    /// Variable names in scope, for the expression generator to use.
    pub bindings: &'a [String],
}
impl GenerationContext<'static> {
    pub fn new(depth: u32, environment: Environment) -> Self {
        Self {
            depth,
            environment,
            bindings: &[],
        }
    }
}
impl<'a> GenerationContext<'a> {
    pub fn with_bindings<'b>(self, bindings: &'b [String]) -> GenerationContext<'b> {
        GenerationContext {
            depth: self.depth,
            environment: self.environment,
            bindings,
        }
    }
}

/// One generated call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    fragment: CodeFragment,
    label: &'static str,
    /// `None` when the row declined to call anything.
    hook: Option<Hook>,
}
impl Invocation {
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
    pub fn into_fragment(self) -> CodeFragment {
        self.fragment
    }
    /// Label of the table row this came from.
    pub fn label(&self) -> &'static str {
        self.label
    }
    pub fn hook(&self) -> Option<Hook> {
        self.hook
    }
}
impl ::core::fmt::Display for Invocation {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(&self.fragment)
    }
}

/// Generates testing function calls from a hook catalog.
///
/// Pre/post barrier verification only does anything when called twice,
/// and nothing here makes sure that happens. Whether a program gets a
/// matching pair is down to the draws. See [`crate::pairing`] for
/// measuring how often that goes wrong.
#[derive(Debug, Clone, Copy)]
pub struct HookInvocationGenerator<'a> {
    catalog: &'a WeightedCatalog<HookTemplate>,
    adapter: EnvironmentAdapter<'a>,
}

impl<'a> HookInvocationGenerator<'a> {
    pub fn new(
        catalog: &'a WeightedCatalog<HookTemplate>,
        exprs: &'a dyn ExprGenerator,
        things: &'a dyn ObjectCatalog,
    ) -> Self {
        Self::with_adapter(catalog, EnvironmentAdapter::new(exprs, things))
    }
    pub fn with_adapter(catalog: &'a WeightedCatalog<HookTemplate>, adapter: EnvironmentAdapter<'a>) -> Self {
        Self { catalog, adapter }
    }
    pub fn catalog(&self) -> &'a WeightedCatalog<HookTemplate> {
        self.catalog
    }
    pub fn adapter(&self) -> &EnvironmentAdapter<'a> {
        &self.adapter
    }

    pub fn generate(&self, rng: &mut dyn RandomSource, context: &GenerationContext<'_>) -> Invocation {
        let template = self.catalog.draw(rng).value();
        self.render(template, rng, context)
    }

    /// [`generate`](Self::generate), keeping only the text.
    pub fn generate_fragment(&self, rng: &mut dyn RandomSource, context: &GenerationContext<'_>) -> CodeFragment {
        self.generate(rng, context).into_fragment()
    }

    /// Render a specific row, skipping the draw.
    pub fn render(&self, template: &HookTemplate, rng: &mut dyn RandomSource, context: &GenerationContext<'_>) -> Invocation {
        let scope = Scope::new(&self.adapter, context);
        let fragment = template.render(&scope, rng);
        let hook = match template.hook() {
            // The zeal row sometimes stands in a `0` instead.
            Hook::GcZeal if fragment == "0" => None,
            hook => Some(hook),
        };
        Invocation {
            fragment,
            label: template.label(),
            hook,
        }
    }

    /// Turn on GC zeal, unconditionally.
    pub fn enable_gc_zeal(&self, rng: &mut dyn RandomSource, context: &GenerationContext<'_>) -> CodeFragment {
        templates::enable_gc_zeal(&Scope::new(&self.adapter, context), rng)
    }
}
