//! Text rendering of traces for the terminal.

use sortviz_core::{Algorithm, Trace};
use std::fmt::Write;

pub fn format_array(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Step <n>: <message>` / `Array: ...` pairs, numbered from 1.
pub fn render_steps(trace: &Trace) -> String {
    let mut out = String::new();
    for (i, step) in trace.iter().enumerate() {
        let _ = writeln!(out, "Step {}: {}", i + 1, step.message);
        let _ = writeln!(out, "Array: {}", format_array(&step.array));
    }
    out
}

pub fn render_run(algorithm: Algorithm, input: &[i64], trace: &Trace) -> String {
    let stats = trace.stats();
    let mut out = format!("{} on [{}]\n\n", algorithm.label(), format_array(input));
    out.push_str(&render_steps(trace));
    let _ = writeln!(
        out,
        "\n{} steps, {} comparisons, {} swaps, {} writes",
        trace.len(),
        stats.comparisons,
        stats.swaps,
        stats.writes
    );
    out
}
