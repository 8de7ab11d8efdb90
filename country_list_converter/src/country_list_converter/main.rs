//!
//! The country list converter binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    let output = country_list_converter::Output::try_from(country_list_converter::COUNTRIES)?;
    output.write_to_file(arguments.output_path.as_path())?;

    if !arguments.quiet {
        println!(
            "{} {} entries to {:?}",
            "Written".bright_green().bold(),
            output.length,
            arguments.output_path
        );
    }

    Ok(())
}
