use std::borrow::Cow;

use regex::{Captures, Regex};

/// Replaces the value of every `field=value<separator>` occurrence in `message` with `redaction`.
///
/// Matching is minimal (up to the first `separator` after at least one value character),
/// non-overlapping and left to right. A trailing field without a closing `separator` is left untouched.
///
/// Compiles the pattern on every call, use [`Redactor`] for repeated filtering.
pub fn filter_datum<F>(fields: &[F], redaction: &str, message: &str, separator: char) -> String
where
    F: AsRef<str>,
{
    Redactor::new(fields, redaction.to_owned(), separator)
        .filter(message)
        .into_owned()
}

/// Precompiled form of [`filter_datum`].
#[derive(Debug, Clone)]
pub struct Redactor {
    // None when there are no fields to redact
    pattern: Option<Regex>,
    redaction: Cow<'static, str>,
    separator: char,
}

impl Redactor {
    pub fn new<F>(fields: &[F], redaction: impl Into<Cow<'static, str>>, separator: char) -> Self
    where
        F: AsRef<str>,
    {
        Self {
            pattern: Self::compile(fields, separator),
            redaction: redaction.into(),
            separator,
        }
    }

    fn compile<F>(fields: &[F], separator: char) -> Option<Regex>
    where
        F: AsRef<str>,
    {
        if fields.is_empty() {
            return None;
        }

        let alternation = fields
            .iter()
            .map(|field| regex::escape(field.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        let separator = regex::escape(separator.encode_utf8(&mut [0; 4]));

        let pattern = format!("({alternation})=.+?{separator}");

        // Every user supplied part is escaped.
        Some(Regex::new(&pattern).expect("escaped redaction pattern is always valid"))
    }

    pub fn redaction(&self) -> &str {
        &self.redaction
    }

    pub const fn separator(&self) -> char {
        self.separator
    }

    pub fn filter<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(message);
        };

        pattern.replace_all(message, |caps: &Captures<'_>| {
            format!("{}={}{}", &caps[1], self.redaction, self.separator)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [&str; 2] = ["password", "date_of_birth"];

    #[test]
    fn redacts_listed_fields() {
        let message = "name=egg;email=eggmin@eggsample.com;password=eggcellent;date_of_birth=12/12/1986;";

        let filtered = filter_datum(&FIELDS, "xxx", message, ';');

        assert_eq!(
            filtered,
            "name=egg;email=eggmin@eggsample.com;password=xxx;date_of_birth=xxx;"
        );
    }

    #[test]
    fn honours_custom_separator() {
        let message = "name=bob|email=bob@dylan.com|password=bobbycool|date_of_birth=03/04/1993|";

        let filtered = filter_datum(&FIELDS, "xxx", message, '|');

        assert_eq!(
            filtered,
            "name=bob|email=bob@dylan.com|password=xxx|date_of_birth=xxx|"
        );
    }

    #[test]
    fn absent_fields_are_untouched() {
        let message = "name=egg;email=eggmin@eggsample.com;";

        assert_eq!(filter_datum(&FIELDS, "xxx", message, ';'), message);
    }

    #[test]
    fn no_fields_is_a_no_op() {
        let message = "password=secret;";

        assert_eq!(filter_datum::<&str>(&[], "xxx", message, ';'), message);
    }

    #[test]
    fn repeated_fields_are_redacted_independently() {
        let message = "password=one;user=a;password=two;";

        assert_eq!(
            filter_datum(&["password"], "REDACTED", message, ';'),
            "password=REDACTED;user=a;password=REDACTED;"
        );
    }

    #[test]
    fn missing_trailing_separator_is_left_as_is() {
        let message = "user=a;password=secret";

        assert_eq!(filter_datum(&["password"], "REDACTED", message, ';'), message);
    }

    #[test]
    fn value_stops_at_first_separator() {
        let message = "before password=a;b;after";

        assert_eq!(
            filter_datum(&["password"], "REDACTED", message, ';'),
            "before password=REDACTED;b;after"
        );
    }

    #[test]
    fn metacharacters_are_literal() {
        let message = "a.b=1;axb=2;";

        assert_eq!(filter_datum(&["a.b"], "X", message, ';'), "a.b=X;axb=2;");
        assert_eq!(filter_datum(&["a.b"], "X", message, '.'), message);
    }

    #[test]
    fn redaction_with_dollar_sign_is_literal() {
        let redactor = Redactor::new(&["password"], "$1", ';');

        assert_eq!(redactor.filter("password=secret;"), "password=$1;");
    }
}
