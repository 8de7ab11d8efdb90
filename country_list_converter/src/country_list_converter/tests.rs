//!
//! Tests for the country list converter arguments.
//!

#![cfg(test)]

use std::path::PathBuf;

use clap::Parser;

use super::arguments::Arguments;

#[test]
fn default() {
    let arguments = Arguments::try_parse_from(["country-list-converter"])
        .expect("Failed to parse arguments");

    assert!(!arguments.quiet);
    assert_eq!(
        arguments.output_path,
        PathBuf::from(country_list_converter::DEFAULT_OUTPUT_PATH)
    );
}

#[test]
fn output_path() {
    let arguments =
        Arguments::try_parse_from(["country-list-converter", "--output-path", "out.json", "-q"])
            .expect("Failed to parse arguments");

    assert!(arguments.quiet);
    assert_eq!(arguments.output_path, PathBuf::from("out.json"));
}

#[test]
fn error_unknown_argument() {
    let result = Arguments::try_parse_from(["country-list-converter", "--input-path", "in.txt"]);

    assert!(result.is_err());
}
