//! Integer and timestamp encoding straight into a [`LineBuffer`].
//!
//! Used only by the line serializer. Nothing here goes through `fmt`: each
//! number is split into digits by repeated division by 10 and the digits are
//! stored back-to-front in slots reserved at the end of the buffer.

use crate::efficient_clock::WallTime;
use crate::line_buffer::LineBuffer;

/// Number of decimal digits in `x` (at least 1).
#[inline]
fn digit_count(mut x: u32) -> usize {
    let mut n = 1;
    while x >= 10 {
        x /= 10;
        n += 1;
    }
    n
}

/// Appends `x` in decimal, with one leading zero when `x < 10`.
///
/// Month, day and time fields therefore always take two digits, while a
/// four-digit year is written as is.
#[inline]
pub(crate) fn append_int(buf: &mut LineBuffer, mut x: u32) {
    let width = digit_count(x).max(2);
    let slots = buf.reserve_slots(width);
    // slots start out as b'0', so a single-digit value keeps its pad
    for slot in slots.iter_mut().rev() {
        *slot = b'0' + (x % 10) as u8;
        x /= 10;
        if x == 0 {
            break;
        }
    }
}

/// Appends `YYYY-MM-DD HH:MM:SS`.
pub(crate) fn append_timestamp(buf: &mut LineBuffer, t: &WallTime) {
    append_int(buf, t.year);
    buf.push(b'-');
    append_int(buf, t.month);
    buf.push(b'-');
    append_int(buf, t.day);
    buf.push(b' ');
    append_int(buf, t.hour);
    buf.push(b':');
    append_int(buf, t.minute);
    buf.push(b':');
    append_int(buf, t.second);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(x: u32) -> String {
        let mut buf = LineBuffer::new();
        append_int(&mut buf, x);
        String::from_utf8(buf.bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_two_digit_fields() {
        for x in 0..100 {
            let s = encode(x);
            assert_eq!(s.len(), 2, "value {} encoded as {:?}", x, s);
            assert_eq!(s, format!("{:02}", x));
        }
    }

    #[test]
    fn test_year_range_is_unpadded() {
        for x in 100..10_000 {
            assert_eq!(encode(x), x.to_string());
        }
    }

    #[test]
    fn test_large_values() {
        assert_eq!(encode(u32::MAX), u32::MAX.to_string());
        assert_eq!(encode(1_000_000), "1000000");
    }

    #[test]
    fn test_appends_after_existing_bytes() {
        let mut buf = LineBuffer::new();
        buf.append(b"x=");
        append_int(&mut buf, 7);
        append_int(&mut buf, 42);
        assert_eq!(buf.bytes(), b"x=0742");
    }

    #[test]
    fn test_timestamp_layout() {
        let mut buf = LineBuffer::new();
        append_timestamp(&mut buf, &WallTime::new(2024, 3, 5, 9, 7, 3));
        assert_eq!(buf.bytes(), b"2024-03-05 09:07:03");
    }

    #[test]
    fn test_timestamp_two_digit_fields() {
        let mut buf = LineBuffer::new();
        append_timestamp(&mut buf, &WallTime::new(1999, 12, 31, 23, 59, 58));
        assert_eq!(buf.bytes(), b"1999-12-31 23:59:58");
    }

    #[test]
    fn test_timestamp_midnight() {
        let mut buf = LineBuffer::new();
        append_timestamp(&mut buf, &WallTime::new(2000, 1, 1, 0, 0, 0));
        assert_eq!(buf.bytes(), b"2000-01-01 00:00:00");
    }
}
