use std::borrow::Cow;

use tracing::Level;

use super::redactor::Redactor;

/// Fields considered personally identifiable.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub name: Cow<'a, str>,
    pub level: Level,
    pub time: Cow<'a, str>,
    pub message: Cow<'a, str>,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        name: impl Into<Cow<'a, str>>,
        level: Level,
        time: impl Into<Cow<'a, str>>,
        message: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            time: time.into(),
            message: message.into(),
        }
    }
}

/// Formats [`LogRecord`]s as `[HOLBERTON] <name> <level> <time>: <message>`,
/// with the configured fields of the message redacted.
#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    redactor: Redactor,
}

impl RedactingFormatter {
    pub const REDACTION: &'static str = "***";

    pub const SEPARATOR: char = ';';

    pub fn new<F>(fields: &[F]) -> Self
    where
        F: AsRef<str>,
    {
        Self {
            redactor: Redactor::new(fields, Self::REDACTION, Self::SEPARATOR),
        }
    }

    pub fn pii() -> Self {
        Self::new(&PII_FIELDS)
    }

    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let message = self.redactor.filter(&record.message);

        format!(
            "[HOLBERTON] {} {} {:<15}: {}",
            record.name,
            level_name(record.level),
            record.time,
            message
        )
    }
}

const fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        _ => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_and_redacts() {
        let formatter = RedactingFormatter::new(&["email", "ssn", "password"]);

        let record = LogRecord::new(
            "my_logger",
            Level::INFO,
            "2019-11-19 18:24:25,105",
            "name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobby2019;",
        );

        assert_eq!(
            formatter.format(&record),
            "[HOLBERTON] my_logger INFO 2019-11-19 18:24:25,105: name=Bob;email=***;ssn=***;password=***;"
        );
    }

    #[test]
    fn pii_formatter_redacts_name() {
        let formatter = RedactingFormatter::pii();

        let record = LogRecord::new("user_data", Level::WARN, "t", "name=Bob;ip=1.2.3.4;");

        assert_eq!(
            formatter.format(&record),
            "[HOLBERTON] user_data WARNING t              : name=***;ip=1.2.3.4;"
        );
    }

    #[test]
    fn level_names() {
        let formatter = RedactingFormatter::new::<&str>(&[]);

        for (level, name) in [
            (Level::ERROR, "ERROR"),
            (Level::WARN, "WARNING"),
            (Level::INFO, "INFO"),
            (Level::DEBUG, "DEBUG"),
        ] {
            let record = LogRecord::new("l", level, "0123456789abcdef", "m");

            assert_eq!(
                formatter.format(&record),
                format!("[HOLBERTON] l {name} 0123456789abcdef: m")
            );
        }
    }
}
