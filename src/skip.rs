use crate::error::ViewError;
use crate::position::Position;
use crate::view::{IntoView, View};

/// Convenience function to drop the first `amount` elements of a view
///
/// The result keeps the source's position and end types. `amount` must not
/// exceed the view's length; use [`try_skip`] when that is not known.
pub fn skip<V: IntoView>(source: V, amount: usize) -> View<V::Position, V::End> {
    let (first, last) = source.into_view().into_parts();
    tracing::trace!(amount, "skipping leading elements");
    View::new(first.advance_by(amount), last)
}

/// Checked [`skip`]
pub fn try_skip<V: IntoView>(
    source: V,
    amount: usize,
) -> Result<View<V::Position, V::End>, ViewError> {
    let source = source.into_view();
    ViewError::check_available(amount, source.distance())?;
    Ok(skip(source, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cstring::cstring;
    use crate::filter::filter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_skip_slice() {
        let data = [1, 2, 3, 4];
        let rest = skip(&data, 2);

        assert_eq!(rest.collect_as::<Vec<_>>(), vec![&3, &4]);
        assert_eq!(rest.distance(), 2);
    }

    #[test]
    fn test_skip_everything() {
        let data = [1, 2];
        assert!(skip(&data, 2).is_empty());
    }

    #[test]
    fn test_skip_cstring() {
        let world = skip(cstring(b"hello world\0"), 6);
        assert_eq!(world.collect_as::<Vec<u8>>(), b"world".to_vec());
    }

    #[test]
    fn test_skip_counts_accepted_elements() {
        let data = [1, 2, 3, 4, 5, 6];
        let evens = filter(&data, |x: &&i32| **x % 2 == 0);

        assert_eq!(skip(evens, 1).collect_as::<Vec<_>>(), vec![&4, &6]);
    }

    #[test]
    fn test_try_skip() {
        let data = [1, 2, 3];

        assert_eq!(try_skip(&data, 3).map(|v| v.distance()), Ok(0));
        assert_eq!(
            try_skip(&data, 4).map(|v| v.distance()),
            Err(ViewError::OutOfRange {
                requested: 4,
                available: 3
            })
        );
    }
}
