use super::reject;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::exit_codes::SUCCESS;
use crate::render;
use anyhow::Context;
use serde::Serialize;
use sortviz_core::input::parse_list;
use sortviz_core::{verify_trace, Algorithm, Engine, Step, TraceStats};

#[derive(Serialize)]
struct RunOutput<'a> {
    algorithm: Algorithm,
    input: &'a [i64],
    steps: &'a [Step],
    stats: TraceStats,
}

pub fn run(args: RunArgs, engine: &Engine) -> anyhow::Result<i32> {
    let algorithm: Algorithm = match args.algorithm.parse() {
        Ok(a) => a,
        Err(e) => return Ok(reject(&e)),
    };

    let input = match &args.array {
        Some(text) => match parse_list(text) {
            Ok(values) => values,
            Err(e) => return Ok(reject(&e)),
        },
        None => {
            let shape = engine.config().random;
            match args.seed {
                Some(seed) => shape.generate_seeded(seed),
                None => shape.generate_fresh(),
            }
        }
    };

    let trace = match engine.run(algorithm, &input) {
        Ok(trace) => trace,
        Err(e) => return Ok(reject(&e)),
    };
    tracing::debug!(%algorithm, len = input.len(), steps = trace.len(), "trace recorded");

    if args.verify {
        verify_trace(&input, &trace).context("trace failed verification")?;
    }

    match args.format {
        OutputFormat::Text => print!("{}", render::render_run(algorithm, &input, &trace)),
        OutputFormat::Json => {
            let out = RunOutput {
                algorithm,
                input: &input,
                steps: trace.steps(),
                stats: trace.stats(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(SUCCESS)
}
