//! Sorting trace engine.
//!
//! Runs one of six classic sorting algorithms over an integer array and
//! records every observable action as a [`Step`]: a message plus an
//! independent snapshot of the array at that instant.
//!
//! ```
//! let trace = sortviz_core::run("bubble", &[5, 3, 8, 1]).unwrap();
//! assert_eq!(trace.final_array(), Some(&[1, 3, 5, 8][..]));
//! ```

pub mod algorithm;
pub mod config;
pub mod engine;
mod error;
pub mod input;
pub mod random;
mod sorts;
pub mod trace;
pub mod verify;

pub use algorithm::Algorithm;
pub use config::{load_config, ConfigError, EngineConfig};
pub use engine::{run, Engine};
pub use error::{SortError, SortResult};
pub use random::RandomArray;
pub use sorts::merge::sort_with_origins;
pub use trace::{Step, Trace, TraceStats};
pub use verify::{verify_trace, TraceViolation};
