//!
//! The country list converter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The country list converter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file.
    /// The parent directory must already exist.
    #[arg(short, long, default_value = country_list_converter::DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,
}
