use crate::character::Character;
use crate::end_marker::Terminal;
use crate::positions::CStrPosition;
use crate::view::View;
use std::ffi::CStr;
use std::ops::Range;

/// A view over null-terminated character data
///
/// With the default [`Terminal`] end the view stops at the first NUL; with
/// a [`CStrPosition`] end it stops at that explicit bound.
pub type CStringView<'a, C, E = Terminal> = View<CStrPosition<'a, C>, E>;

/// View the characters of `data` up to its first NUL
///
/// The end of the slice counts as a terminator, so data without a NUL is
/// read in full.
pub fn cstring<C: Character>(data: &[C]) -> CStringView<'_, C> {
    View::new(CStrPosition::new(data, 0), Terminal)
}

/// View the bytes of a Rust C string, excluding its terminator
pub fn cstr(data: &CStr) -> CStringView<'_, u8> {
    cstring(data.to_bytes_with_nul())
}

/// View the characters of `data` within `range`, bounded by position
///
/// The range may be empty but must lie within `data`.
pub fn cstring_range<C: Character>(
    data: &[C],
    range: Range<usize>,
) -> CStringView<'_, C, CStrPosition<'_, C>> {
    debug_assert!(
        range.start <= range.end && range.end <= data.len(),
        "character range {range:?} out of bounds"
    );
    View::new(
        CStrPosition::new(data, range.start),
        CStrPosition::new(data, range.end),
    )
}

/// View the first `count` characters of `data`, bounded by position
pub fn cstring_counted<C: Character>(
    data: &[C],
    count: usize,
) -> CStringView<'_, C, CStrPosition<'_, C>> {
    cstring_range(data, 0..count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Category;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cstring() {
        let ab = cstring(b"ab\0");

        assert_eq!(ab.collect_as::<Vec<u8>>(), b"ab".to_vec());
        assert_eq!(ab.distance(), 2);
        assert_eq!(ab.category(), Category::Forward);
    }

    #[test]
    fn test_cstring_stops_at_first_nul() {
        assert_eq!(cstring(b"ab\0cd\0").distance(), 2);
        assert!(cstring(b"\0").is_empty());
        assert!(cstring::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_cstring_without_terminator() {
        assert_eq!(cstring(b"abc").collect_as::<Vec<u8>>(), b"abc".to_vec());
    }

    #[test]
    fn test_cstr() {
        let hello = cstr(c"hello");

        assert_eq!(hello.distance(), 5);
        assert_eq!(hello.front(), b'h');
    }

    #[test]
    fn test_cstring_range() {
        let data = b"hello world";
        let world = cstring_range(data, 6..11);

        assert_eq!(world.collect_as::<Vec<u8>>(), b"world".to_vec());
        assert_eq!(world.distance(), 5);
        assert!(cstring_range(data, 3..3).is_empty());
    }

    #[test]
    fn test_cstring_range_spans_embedded_nul() {
        let data = b"a\0b";
        let spanned = cstring_range(data, 0..3);

        assert_eq!(spanned.collect_as::<Vec<u8>>(), b"a\0b".to_vec());
        assert_eq!(spanned.distance(), 3);
        assert_eq!(cstring(data).distance(), 1);
    }

    #[test]
    fn test_cstring_counted() {
        let data = ['r', 'u', 's', 't'];
        let ru = cstring_counted(&data, 2);

        assert_eq!(ru.collect_as::<String>(), "ru");
    }

    #[test]
    fn test_terminal_form_converts_to_explicit_bounds() {
        let common = cstring(b"abc\0").to_common();

        assert_eq!(common.begin(), CStrPosition::new(b"abc\0", 0));
        assert_eq!(common.end(), CStrPosition::Terminator);
        assert_eq!(common.distance(), 3);
    }
}
