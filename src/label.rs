/// A key/value pair attached to one log line.
///
/// Labels only borrow their strings; they live as long as the logging call
/// that writes them. Both halves are written verbatim, without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Label<'a> {
    pub const fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }
}

impl<'a> From<(&'a str, &'a str)> for Label<'a> {
    fn from((key, value): (&'a str, &'a str)) -> Self {
        Self { key, value }
    }
}

/// Builds an array of [`Label`]s in call order.
///
/// # Examples
///
/// ```
/// # use line_logger::{labels, Label};
/// let port = String::from("8080");
/// let labels = labels!["port" => &port, "proto" => "tcp"];
/// assert_eq!(labels, [Label::new("port", "8080"), Label::new("proto", "tcp")]);
///
/// let none: [Label; 0] = labels![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! labels {
    () => {
        []
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$($crate::Label::new($key, $value)),+]
    };
}
