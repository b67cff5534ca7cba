use crate::cli::args::{AlgorithmsArgs, OutputFormat};
use crate::exit_codes::SUCCESS;
use serde::Serialize;
use sortviz_core::Algorithm;

#[derive(Serialize)]
struct AlgorithmInfo {
    name: &'static str,
    label: &'static str,
    stable: bool,
    non_negative_only: bool,
}

pub fn run(args: AlgorithmsArgs) -> anyhow::Result<i32> {
    let infos: Vec<AlgorithmInfo> = Algorithm::ALL
        .iter()
        .map(|&a| AlgorithmInfo {
            name: a.name(),
            label: a.label(),
            stable: a.is_stable(),
            non_negative_only: a.requires_non_negative(),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for info in &infos {
                let mut notes = Vec::new();
                if info.stable {
                    notes.push("stable");
                }
                if info.non_negative_only {
                    notes.push("non-negative input only");
                }
                println!("{:<10} {:<15} {}", info.name, info.label, notes.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&infos)?),
    }
    Ok(SUCCESS)
}
