//!
//! The country list converter library.
//!

pub mod countries;
pub mod output;


use std::path::Path;

pub use self::countries::COUNTRIES;
pub use self::output::error::Error as OutputError;
pub use self::output::formatter::Formatter as OutputFormatter;
pub use self::output::Output;

/// The file name used when no destination is given.
pub const DEFAULT_FILE_NAME: &str = "countries.json";

/// The destination the binary writes to when run without arguments.
pub const DEFAULT_OUTPUT_PATH: &str = "exercises/countries.json";

///
/// Saves a list of strings as a JSON array file.
///
/// The file is created or truncated. Non-ASCII characters are written as raw UTF-8.
///
pub fn convert_list_to_json<T, P>(items: &[T], destination: P) -> Result<(), OutputError>
where
    T: AsRef<str>,
    P: AsRef<Path>,
{
    let output = Output::try_from(items)?;
    output.write_to_file(destination.as_ref())
}

///
/// Saves a list of strings as [`DEFAULT_FILE_NAME`] in the current directory.
///
pub fn convert_list_to_json_default<T>(items: &[T]) -> Result<(), OutputError>
where
    T: AsRef<str>,
{
    convert_list_to_json(items, DEFAULT_FILE_NAME)
}
