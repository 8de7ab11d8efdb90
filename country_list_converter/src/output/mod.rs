//!
//! Converter output.
//!

pub mod error;
pub mod formatter;

use std::path::Path;

use serde::Serializer;

use self::error::Error;
use self::formatter::Formatter;

///
/// Encoded JSON array document, ready to be written to disk.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    /// Serialized JSON.
    pub content: String,
    /// Number of array elements.
    pub length: usize,
}

impl Output {
    ///
    /// Writes the document to a file, creating or truncating it.
    ///
    pub fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, self.content.as_bytes()).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })
    }
}

impl<T> TryFrom<&[T]> for Output
where
    T: AsRef<str>,
{
    type Error = Error;

    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        let mut buffer = Vec::with_capacity(items.len() * 16 + 2);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, Formatter);
        serializer.collect_seq(items.iter().map(AsRef::as_ref))?;
        let content = String::from_utf8(buffer).expect("Always valid");
        Ok(Self {
            content,
            length: items.len(),
        })
    }
}
