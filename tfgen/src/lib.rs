//! # tfgen, testing function generation
//!
//! Generates small snippets of JavaScript that call into the testing
//! functions SpiderMonkey exposes to the shell and, through a privileged
//! namespace, to the browser. These are the entry points that force
//! garbage collection, tune JIT heuristics and switch on verification
//! passes, none of which ordinary script can reach.
//!
//! The crate doesn't run anything. Hand it a seeded random source and a
//! [`GenerationContext`], and it gives back one [`Invocation`].
//!
//! ```
//! use ::rand::SeedableRng;
//! use ::tfgen::{templates, Environment, GenerationContext, HookInvocationGenerator};
//! # use ::tfgen::{ExprGenerator, ObjectCatalog, RandomSource, CodeFragment};
//! # struct Zero;
//! # impl ExprGenerator for Zero {
//! #     fn make_expr(&self, _: &mut dyn RandomSource, _: u32, _: &[String], _: Environment) -> CodeFragment {
//! #         "0".into()
//! #     }
//! # }
//! # impl ObjectCatalog for Zero {
//! #     fn any_object(&self, _: &mut dyn RandomSource) -> CodeFragment { "this".into() }
//! #     fn window_global(&self, _: &mut dyn RandomSource) -> CodeFragment { "window".into() }
//! # }
//! let hooks = templates::hooks().expect("the built in table is well formed");
//! let generator = HookInvocationGenerator::new(&hooks, &Zero, &Zero);
//! let mut rng = ::rand::rngs::SmallRng::seed_from_u64(7);
//! let context = GenerationContext::new(2, Environment::Standalone);
//! let invocation = generator.generate(&mut rng, &context);
//! assert!(::tfgen::lexical::is_balanced(invocation.fragment()));
//! ```
pub mod catalog;
pub mod env;
pub mod generator;
pub mod hook;
pub mod lexical;
pub mod pairing;
pub mod random;
pub mod scalar;
pub mod templates;
#[cfg(test)]
mod testing;

pub use catalog::{CatalogError, WeightedCatalog};
pub use env::{EnvironmentAdapter, ExprGenerator, ObjectCatalog};
pub use generator::{GenerationContext, HookInvocationGenerator, Invocation};
pub use hook::Hook;
pub use random::RandomSource;
pub use templates::{HookTemplate, Scope};

/// Generated source text.
/// Nothing in this crate looks inside one beyond concatenation.
pub type CodeFragment = String;

/// Where the generated code is going to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Inside a browser, with testing functions behind a privileged namespace.
    Embedded,
    /// Directly against the JS shell, with testing functions as globals.
    Standalone,
}

impl Environment {
    pub fn is_embedded(self) -> bool {
        self == Environment::Embedded
    }
}

impl ::core::fmt::Display for Environment {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(match self {
            Environment::Embedded => "embedded",
            Environment::Standalone => "standalone",
        })
    }
}

#[derive(::thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown environment `{0}`, expected `embedded` or `standalone`")]
pub struct UnknownEnvironment(pub String);

impl ::core::str::FromStr for Environment {
    type Err = UnknownEnvironment;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embedded" | "browser" => Ok(Environment::Embedded),
            "standalone" | "shell" => Ok(Environment::Standalone),
            _ => Err(UnknownEnvironment(s.to_owned())),
        }
    }
}
