use crate::capability::{DirectBack, IntoCommon, Swappable, ToCommon};
use crate::end_marker::{EndMarker, Terminal};
use crate::position::{Bidirectional, Category, Exhaustible, Homogeneous, Position};
use crate::view::{IntoView, View};
use std::fmt;

/// Position that only stops on elements accepted by a predicate
///
/// Construction moves to the first accepted element, and every step skips
/// the run of rejected elements after it, so a step costs O(k) for a run
/// of k rejected elements.
#[derive(Clone)]
pub struct FilterPosition<P, E, F> {
    inner: P,
    last: E,
    predicate: F,
}

impl<P, E, F> FilterPosition<P, E, F>
where
    P: Position,
    E: EndMarker<P>,
    F: Fn(&P::Item) -> bool + Clone,
{
    pub fn new(inner: P, last: E, predicate: F) -> Self {
        let mut skipped = 0;
        let mut inner = inner;
        while !last.reached_by(&inner) && !predicate(&inner.value()) {
            inner = inner.next();
            skipped += 1;
        }
        tracing::trace!(skipped, "filter positioned on first accepted element");
        FilterPosition {
            inner,
            last,
            predicate,
        }
    }

    fn accepts_current(&self) -> bool {
        (self.predicate)(&self.inner.value())
    }

    fn seek_forward(mut self) -> Self {
        while !self.last.reached_by(&self.inner) && !self.accepts_current() {
            self.inner = self.inner.next();
        }
        self
    }
}

impl<P: fmt::Debug, E: fmt::Debug, F> fmt::Debug for FilterPosition<P, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPosition")
            .field("inner", &self.inner)
            .field("last", &self.last)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<P: PartialEq, E, F> PartialEq for FilterPosition<P, E, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<P, E, F> Position for FilterPosition<P, E, F>
where
    P: Position,
    E: EndMarker<P>,
    F: Fn(&P::Item) -> bool + Clone,
{
    type Item = P::Item;

    const CATEGORY: Category = P::CATEGORY.weaker(Category::Bidirectional);

    fn value(&self) -> P::Item {
        self.inner.value()
    }

    fn next(self) -> Self {
        FilterPosition {
            inner: self.inner.next(),
            ..self
        }
        .seek_forward()
    }
}

impl<P, E, F> Exhaustible for FilterPosition<P, E, F>
where
    P: Position,
    E: EndMarker<P>,
    F: Fn(&P::Item) -> bool + Clone,
{
    fn is_exhausted(&self) -> bool {
        self.last.reached_by(&self.inner)
    }
}

impl<P, E, F> Homogeneous for FilterPosition<P, E, F>
where
    P: Homogeneous,
    E: EndMarker<P>,
    F: Fn(&P::Item) -> bool + Clone,
{
}

/// Retreating stops on the previous accepted element, or on the bound
/// once the position has been swapped.
impl<P, E, F> Bidirectional for FilterPosition<P, E, F>
where
    P: Bidirectional,
    E: EndMarker<P>,
    F: Fn(&P::Item) -> bool + Clone,
{
    fn prev(mut self) -> Self {
        loop {
            self.inner = self.inner.prev();
            if self.last.reached_by(&self.inner) || self.accepts_current() {
                return self;
            }
        }
    }
}

impl<P, F> Swappable for FilterPosition<P, P, F>
where
    P: Bidirectional + Homogeneous,
    F: Fn(&P::Item) -> bool + Clone,
{
    fn swap_direction(self) -> Self {
        FilterPosition {
            inner: self.last,
            last: self.inner,
            predicate: self.predicate,
        }
    }
}

impl<P, F> Swappable for FilterPosition<P, Terminal, F>
where
    P: Swappable,
    F: Fn(&P::Item) -> bool + Clone,
{
    fn swap_direction(self) -> Self {
        FilterPosition {
            inner: self.inner.swap_direction(),
            ..self
        }
    }
}

impl<P, E, F> DirectBack for FilterPosition<P, E, F>
where
    Self: Swappable,
{
    fn back(&self) -> Self::Item {
        self.clone().swap_direction().prev().value()
    }
}

impl<P, E, F> ToCommon for FilterPosition<P, E, F>
where
    P: IntoCommon<E>,
    E: EndMarker<P>,
    F: Fn(&P::Item) -> bool + Clone,
{
    type Common = FilterPosition<P::Common, P::Common, F>;

    fn to_common(&self) -> (Self::Common, Self::Common) {
        let (first, last) = self.inner.clone().into_common(self.last.clone());
        (
            FilterPosition {
                inner: first,
                last: last.clone(),
                predicate: self.predicate.clone(),
            },
            FilterPosition {
                inner: last.clone(),
                last,
                predicate: self.predicate.clone(),
            },
        )
    }
}

/// Convenience function to lazily keep the elements accepted by `predicate`
pub fn filter<V, F>(source: V, predicate: F) -> View<FilterPosition<V::Position, V::End, F>>
where
    V: IntoView,
    F: Fn(&<V::Position as Position>::Item) -> bool + Clone,
{
    let (first, last) = source.into_view().into_parts();
    View::new(FilterPosition::new(first, last, predicate), Terminal)
}
