use super::reject;
use crate::cli::args::{OutputFormat, RandomArgs};
use crate::exit_codes::SUCCESS;
use crate::render::format_array;
use sortviz_core::{EngineConfig, SortError};

pub fn run(args: RandomArgs, config: &EngineConfig) -> anyhow::Result<i32> {
    let mut shape = config.random;
    if let Some(len) = args.len {
        shape.len = len;
    }
    if let Some(max) = args.max {
        shape.max = max;
    }
    // Same ceiling the engine applies; nothing is allocated past it.
    if shape.len > config.max_input_len {
        return Ok(reject(&SortError::InputTooLarge {
            len: shape.len,
            max: config.max_input_len,
        }));
    }

    let values = match args.seed {
        Some(seed) => shape.generate_seeded(seed),
        None => shape.generate_fresh(),
    };
    match args.format {
        OutputFormat::Text => println!("{}", format_array(&values)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&values)?),
    }
    Ok(SUCCESS)
}
