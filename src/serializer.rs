use crate::date_encoder::append_timestamp;
use crate::efficient_clock::WallTime;
use crate::label::Label;
use crate::level::Level;
use crate::line_buffer::LineBuffer;

/// Composes one log line into `buf`.
///
/// Layout: `YYYY-MM-DD HH:MM:SS [LEVEL] message key1:value1 key2:value2\n`
///
/// A `level` of `None` (a level name that was not recognised) writes no
/// marker at all; the timestamp is then followed directly by the message.
/// Message, keys and values are copied verbatim.
///
/// # Examples
///
/// ```
/// # use line_logger::{serialize_line, Label, Level, LineBuffer, WallTime};
/// let mut buf = LineBuffer::new();
/// serialize_line(
///     &mut buf,
///     Some(Level::Info),
///     &WallTime::new(2024, 3, 5, 9, 7, 3),
///     "server started",
///     &[Label::new("port", "8080")],
/// );
/// assert_eq!(buf.bytes(), b"2024-03-05 09:07:03 [INFO] server started port:8080\n");
/// ```
pub fn serialize_line(
    buf: &mut LineBuffer,
    level: Option<Level>,
    at: &WallTime,
    msg: &str,
    labels: &[Label<'_>],
) {
    append_timestamp(buf, at);

    if let Some(level) = level {
        buf.append(level.marker());
    }

    buf.append(msg.as_bytes());

    for label in labels {
        buf.push(b' ');
        buf.append(label.key.as_bytes());
        buf.push(b':');
        buf.append(label.value.as_bytes());
    }

    buf.push(b'\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: WallTime = WallTime::new(2024, 3, 5, 9, 7, 3);

    fn line(level: Option<Level>, msg: &str, labels: &[Label<'_>]) -> String {
        let mut buf = LineBuffer::new();
        serialize_line(&mut buf, level, &AT, msg, labels);
        String::from_utf8(buf.bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_no_labels() {
        assert_eq!(
            line(Some(Level::Warn), "disk low", &[]),
            "2024-03-05 09:07:03 [WARN] disk low\n"
        );
    }

    #[test]
    fn test_labels_in_order() {
        let labels = [Label::new("b", "2"), Label::new("a", "1"), Label::new("c", "3")];
        assert_eq!(
            line(Some(Level::Error), "boom", &labels),
            "2024-03-05 09:07:03 [ERROR] boom b:2 a:1 c:3\n"
        );
    }

    #[test]
    fn test_unknown_level_writes_no_marker() {
        assert_eq!(
            line(None, "plain", &[Label::new("k", "v")]),
            "2024-03-05 09:07:03plain k:v\n"
        );
    }

    #[test]
    fn test_verbatim_bytes() {
        assert_eq!(
            line(Some(Level::Debug), "a:b [x]\ty", &[Label::new("", ""), Label::new("k k", "v:v")]),
            "2024-03-05 09:07:03 [DEBUG] a:b [x]\ty : k k:v:v\n"
        );
    }
}
