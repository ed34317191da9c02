//! Command line and environment configuration.
use ::structopt::StructOpt;
use ::tfgen::Environment;

/// Generates JavaScript that pokes at SpiderMonkey's testing functions.
#[derive(Debug, StructOpt)]
#[structopt(name = "hookfuzz")]
pub(crate) struct Opt {
    /// Seed for the random source. Random if not given; the seed used is logged.
    #[structopt(long, env = "HOOKFUZZ_SEED")]
    pub seed: Option<u64>,
    /// `standalone` (the JS shell) or `embedded` (a browser).
    #[structopt(long, short = "e", env = "HOOKFUZZ_ENVIRONMENT", default_value = "standalone")]
    pub environment: Environment,
    /// Recursion budget handed to argument expressions.
    #[structopt(long, short = "d", env = "HOOKFUZZ_DEPTH", default_value = "3")]
    pub depth: u32,
    /// Object the browser exposes testing functions on.
    #[structopt(long, env = "HOOKFUZZ_NAMESPACE", default_value = "fuzzPriv")]
    pub namespace: String,
    /// Shell builtin used by the differential testing guard.
    #[structopt(long, env = "HOOKFUZZ_PROBE", default_value = "isAsmJSCompilationAvailable")]
    pub probe: String,
    /// Guard one shell hook reference in this many. 0 disables the guard.
    #[structopt(long, env = "HOOKFUZZ_GUARD_ODDS", default_value = "5")]
    pub guard_odds: u64,
    #[structopt(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Debug, StructOpt, PartialEq)]
pub(crate) enum Mode {
    /// Print programs made of testing function calls.
    Emit {
        /// Calls per program.
        #[structopt(long, short = "n", env = "HOOKFUZZ_COUNT", default_value = "20")]
        count: usize,
        /// Number of programs.
        #[structopt(long, short = "p", env = "HOOKFUZZ_PROGRAMS", default_value = "1")]
        programs: usize,
        /// Variable names the generated arguments may refer to.
        #[structopt(long = "binding", short = "b")]
        bindings: Vec<String>,
    },
    /// Sample the hook table and compare observed with expected frequencies.
    #[cfg(feature = "stats")]
    Stats {
        #[structopt(long, short = "s", env = "HOOKFUZZ_SAMPLES", default_value = "100000")]
        samples: u64,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Emit {
            count: 20,
            programs: 1,
            bindings: Vec::new(),
        }
    }
}
