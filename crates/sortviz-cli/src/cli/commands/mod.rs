use super::args::*;
use anyhow::Context;
use sortviz_core::{load_config, Engine, EngineConfig, SortError};

pub mod algorithms;
pub mod random;
pub mod run;
pub mod serve;

use crate::exit_codes::{REJECTED, SUCCESS};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    tracing::debug!(max_input_len = config.max_input_len, "config loaded");

    match cli.cmd {
        Command::Run(args) => run::run(args, &Engine::new(config)),
        Command::Random(args) => random::run(args, &config),
        Command::Algorithms(args) => algorithms::run(args),
        Command::Serve => serve::run(Engine::new(config)).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}

/// Reports an engine rejection and returns the matching exit code.
pub(crate) fn reject(err: &SortError) -> i32 {
    tracing::debug!(code = err.code(), "request rejected");
    eprintln!("error: {err}");
    REJECTED
}
