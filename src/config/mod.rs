//! Runtime configuration for the binaries.
//!
//! - `cli`: positional `[input_path] [output_path]` arguments of `sobel`.
//! - `stages`: JSON config consumed by `sobel_stages`.

pub mod cli;
pub mod stages;

pub use cli::{parse_args, CliArgs, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use stages::{load_config, StageOutputConfig, StageToolConfig};
