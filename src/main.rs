#![forbid(unsafe_code)]
mod config;
mod emit;
mod exprs;
mod rng;
#[cfg(feature = "stats")]
mod stats;

use config::{Mode, Opt};
use exprs::{HostThings, TerminalExprs};
use ::log::{error, info};
use ::std::io::{self, Write};
use ::structopt::StructOpt;
use ::tfgen::{CatalogError, EnvironmentAdapter, GenerationContext, HookInvocationGenerator};

#[derive(::thiserror::Error, Debug)]
enum Error {
    #[error("couldn't build the hook catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Seed(#[from] rng::AlreadySeeded),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

fn run(opt: Opt) -> Result<(), Error> {
    let catalog = ::tfgen::templates::hooks()?;
    let seed = rng::seed(opt.seed)?;
    let adapter = EnvironmentAdapter::new(&TerminalExprs, &HostThings)
        .namespace(&opt.namespace)
        .probe(&opt.probe)
        .guard_odds(opt.guard_odds);
    let generator = HookInvocationGenerator::with_adapter(&catalog, adapter);
    let context = GenerationContext::new(opt.depth, opt.environment);
    info!("generating for {} at depth {}", opt.environment, opt.depth);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opt.mode.unwrap_or_default() {
        Mode::Emit { count, programs, bindings } => {
            let context = context.with_bindings(&bindings);
            for number in 0..programs {
                let (text, _) = rng::with_rng(|rng| emit::program(&generator, rng, &context, count));
                writeln!(out, "// hookfuzz seed {} program {}", seed, number)?;
                out.write_all(text.as_bytes())?;
            }
        }
        #[cfg(feature = "stats")]
        Mode::Stats { samples } => {
            let rows = rng::with_rng(|rng| stats::sample(&generator, rng, &context, samples));
            writeln!(out, "{}", stats::table(&rows))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    ::env_logger::init();
    let opt = Opt::from_args();
    if let Err(e) = run(opt) {
        error!("{}", e);
        ::std::process::exit(1);
    }
}
