use crate::capability::{IntoCommon, ToCommon};
use crate::end_marker::{EndMarker, Terminal};
use crate::error::ViewError;
use crate::position::{Exhaustible, Homogeneous, Position};
use crate::skip::skip;
use crate::view::{IntoView, View};

/// Position limited to a number of elements of an inner traversal
///
/// Exhausted once `count` reaches `target`, or earlier when the inner
/// traversal runs out first. Forward only.
#[derive(Debug, Clone)]
pub struct TakePosition<P, E> {
    inner: P,
    last: E,
    target: usize,
    count: usize,
}

impl<P, E> TakePosition<P, E> {
    pub fn new(inner: P, last: E, target: usize) -> Self {
        TakePosition {
            inner,
            last,
            target,
            count: 0,
        }
    }

    /// Elements produced so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<P: PartialEq, E> PartialEq for TakePosition<P, E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<P: Position, E: Clone> Position for TakePosition<P, E> {
    type Item = P::Item;

    fn value(&self) -> P::Item {
        self.inner.value()
    }

    fn next(self) -> Self {
        TakePosition {
            inner: self.inner.next(),
            count: self.count + 1,
            ..self
        }
    }

    fn advance_by(self, n: usize) -> Self {
        TakePosition {
            inner: self.inner.advance_by(n),
            count: self.count + n,
            ..self
        }
    }
}

impl<P: Position, E: EndMarker<P>> Exhaustible for TakePosition<P, E> {
    fn is_exhausted(&self) -> bool {
        self.count >= self.target || self.last.reached_by(&self.inner)
    }

    fn remaining(&self) -> usize {
        let wanted = self.target.saturating_sub(self.count);
        if wanted == 0 {
            return 0;
        }
        wanted.min(self.last.distance_from(&self.inner))
    }
}

impl<P: Homogeneous, E: Clone> Homogeneous for TakePosition<P, E> {
    fn steps_to(&self, end: &Self) -> usize {
        self.inner.steps_to(&end.inner)
    }
}

/// The end is found by walking, since the limit may stop short of the
/// inner traversal's own end.
impl<P, E> ToCommon for TakePosition<P, E>
where
    P: IntoCommon<E>,
    E: EndMarker<P>,
{
    type Common = TakePosition<P::Common, P::Common>;

    fn to_common(&self) -> (Self::Common, Self::Common) {
        let (first, inner_last) = self.inner.clone().into_common(self.last.clone());
        let taken = self.remaining();
        let last = first.clone().advance_by(taken);
        let target = self.target.saturating_sub(self.count);
        (
            TakePosition::new(first, inner_last.clone(), target),
            TakePosition {
                inner: last,
                last: inner_last,
                target,
                count: taken,
            },
        )
    }
}

/// Convenience function to lazily keep at most `amount` leading elements
pub fn take<V: IntoView>(source: V, amount: usize) -> View<TakePosition<V::Position, V::End>> {
    let (first, last) = source.into_view().into_parts();
    View::new(TakePosition::new(first, last, amount), Terminal)
}

/// Alias of [`take`] for sources addressed by a start and a count
pub fn counted<V: IntoView>(source: V, amount: usize) -> View<TakePosition<V::Position, V::End>> {
    take(source, amount)
}

/// The elements in `from..to`; requires `from <= to <= distance()`
pub fn slice<V: IntoView>(
    source: V,
    from: usize,
    to: usize,
) -> View<TakePosition<V::Position, V::End>> {
    debug_assert!(from <= to, "slice start {from} after end {to}");
    take(skip(source, from), to - from)
}

/// Checked [`slice`] that validates the bounds against the view's length
pub fn try_slice<V: IntoView>(
    source: V,
    from: usize,
    to: usize,
) -> Result<View<TakePosition<V::Position, V::End>>, ViewError> {
    ViewError::check_range(from, to)?;
    let source = source.into_view();
    ViewError::check_available(to, source.distance())?;
    Ok(slice(source, from, to))
}
