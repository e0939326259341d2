//! Redaction of sensitive `key=value` fields in delimited log lines.

mod formatter;
mod redactor;

pub use formatter::{LogRecord, RedactingFormatter, PII_FIELDS};
pub use redactor::{filter_datum, Redactor};
