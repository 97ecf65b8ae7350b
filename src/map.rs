use crate::capability::{DirectBack, IntoCommon, Swappable, ToCommon};
use crate::end_marker::{EndMarker, Terminal};
use crate::position::{Bidirectional, Category, Exhaustible, Homogeneous, Position, RandomAccess};
use crate::view::{IntoView, View};
use std::fmt;

/// Position that transforms every element of an inner traversal
///
/// The transform runs on each dereference; nothing is cached, so reading
/// the same position twice calls the function twice.
#[derive(Clone)]
pub struct MapPosition<P, E, F> {
    inner: P,
    last: E,
    mapper: F,
}

impl<P, E, F> MapPosition<P, E, F> {
    pub fn new(inner: P, last: E, mapper: F) -> Self {
        MapPosition {
            inner,
            last,
            mapper,
        }
    }
}

impl<P: fmt::Debug, E: fmt::Debug, F> fmt::Debug for MapPosition<P, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapPosition")
            .field("inner", &self.inner)
            .field("last", &self.last)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<P: PartialEq, E, F> PartialEq for MapPosition<P, E, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<P, E, F, U> Position for MapPosition<P, E, F>
where
    P: Position,
    E: Clone,
    F: Fn(P::Item) -> U + Clone,
{
    type Item = U;

    const CATEGORY: Category = P::CATEGORY;

    fn value(&self) -> U {
        (self.mapper)(self.inner.value())
    }

    fn next(self) -> Self {
        MapPosition {
            inner: self.inner.next(),
            ..self
        }
    }

    fn advance_by(self, n: usize) -> Self {
        MapPosition {
            inner: self.inner.advance_by(n),
            ..self
        }
    }
}

impl<P, E, F, U> Exhaustible for MapPosition<P, E, F>
where
    P: Position,
    E: EndMarker<P>,
    F: Fn(P::Item) -> U + Clone,
{
    fn is_exhausted(&self) -> bool {
        self.last.reached_by(&self.inner)
    }

    fn remaining(&self) -> usize {
        self.last.distance_from(&self.inner)
    }
}

impl<P, E, F, U> Homogeneous for MapPosition<P, E, F>
where
    P: Homogeneous,
    E: Clone,
    F: Fn(P::Item) -> U + Clone,
{
    fn steps_to(&self, end: &Self) -> usize {
        self.inner.steps_to(&end.inner)
    }
}

impl<P, E, F, U> Bidirectional for MapPosition<P, E, F>
where
    P: Bidirectional,
    E: Clone,
    F: Fn(P::Item) -> U + Clone,
{
    fn prev(self) -> Self {
        MapPosition {
            inner: self.inner.prev(),
            ..self
        }
    }
}

impl<P, E, F, U> RandomAccess for MapPosition<P, E, F>
where
    P: RandomAccess,
    E: Clone,
    F: Fn(P::Item) -> U + Clone,
{
    fn nth(&self, n: usize) -> U {
        (self.mapper)(self.inner.nth(n))
    }
}

impl<P, F, U> DirectBack for MapPosition<P, P, F>
where
    P: Bidirectional + Homogeneous,
    F: Fn(P::Item) -> U + Clone,
{
    fn back(&self) -> U {
        (self.mapper)(self.last.clone().prev().value())
    }
}

impl<P, F, U> DirectBack for MapPosition<P, Terminal, F>
where
    P: DirectBack,
    F: Fn(P::Item) -> U + Clone,
{
    fn back(&self) -> U {
        (self.mapper)(self.inner.back())
    }
}

impl<P, F, U> Swappable for MapPosition<P, P, F>
where
    P: Bidirectional + Homogeneous,
    F: Fn(P::Item) -> U + Clone,
{
    fn swap_direction(self) -> Self {
        MapPosition {
            inner: self.last,
            last: self.inner,
            mapper: self.mapper,
        }
    }
}

impl<P, F, U> Swappable for MapPosition<P, Terminal, F>
where
    P: Swappable,
    F: Fn(P::Item) -> U + Clone,
{
    fn swap_direction(self) -> Self {
        MapPosition {
            inner: self.inner.swap_direction(),
            ..self
        }
    }
}

impl<P, E, F, U> ToCommon for MapPosition<P, E, F>
where
    P: IntoCommon<E>,
    E: Clone,
    F: Fn(P::Item) -> U + Clone,
{
    type Common = MapPosition<P::Common, P::Common, F>;

    fn to_common(&self) -> (Self::Common, Self::Common) {
        let (first, last) = self.inner.clone().into_common(self.last.clone());
        (
            MapPosition::new(first, last.clone(), self.mapper.clone()),
            MapPosition::new(last.clone(), last, self.mapper.clone()),
        )
    }
}

/// Convenience function to lazily transform every element of a view
pub fn map<V, F, U>(source: V, mapper: F) -> View<MapPosition<V::Position, V::End, F>>
where
    V: IntoView,
    F: Fn(<V::Position as Position>::Item) -> U + Clone,
{
    let (first, last) = source.into_view().into_parts();
    View::new(MapPosition::new(first, last, mapper), Terminal)
}

fn copy_value<T: Copy>(value: &T) -> T {
    *value
}

/// Convenience function to turn a view of references into a view of copies
pub fn copied<'a, V, T>(source: V) -> View<MapPosition<V::Position, V::End, fn(&'a T) -> T>>
where
    V: IntoView,
    V::Position: Position<Item = &'a T>,
    T: Copy + 'a,
{
    map(source, copy_value as fn(&'a T) -> T)
}
