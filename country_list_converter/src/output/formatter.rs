//!
//! Single-line JSON formatter.
//!

use std::io::Write;

///
/// Single-line JSON formatter with a space after every separator.
///
/// Produces `["A", "B"]` and `{"a": 1, "b": 2}`. String escaping is left to the
/// default `serde_json` implementation, which keeps non-ASCII characters as they are.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Formatter;

impl serde_json::ser::Formatter for Formatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}
