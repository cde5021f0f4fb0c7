//! CLI command handlers

pub mod commands;

pub use commands::{convert, default_output_path, print_summary, ConversionSummary, ConvertOptions};

/// Printed on any argument error
pub const USAGE: &str = "Usage: xlsx2dic input.xlsx [output.dic]";
