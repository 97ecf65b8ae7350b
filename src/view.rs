use crate::capability::{IntoCommon, LastElement};
use crate::end_marker::{EndMarker, Terminal};
use crate::position::{Category, Position, RandomAccess};
use crate::positions::SlicePosition;
use crate::reverse::{ReverseWith, reverse};
use std::iter::FusedIterator;

/// A lazy sequence: a first position paired with an end marker
///
/// Views are cheap values. Copying one duplicates every piece of adapter
/// state it holds, so copies can be traversed independently.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct View<P, E = Terminal> {
    first: P,
    last: E,
}

impl<P, E> View<P, E> {
    pub const fn new(first: P, last: E) -> Self {
        View { first, last }
    }

    pub fn into_parts(self) -> (P, E) {
        (self.first, self.last)
    }
}

impl<P, E> View<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    pub fn begin(&self) -> P {
        self.first.clone()
    }

    pub fn end(&self) -> E {
        self.last.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.last.reached_by(&self.first)
    }

    /// Traversal strength of the underlying position
    pub fn category(&self) -> Category {
        P::CATEGORY
    }

    /// The first element; the view must not be empty
    pub fn front(&self) -> P::Item {
        self.first.value()
    }

    /// The last element; the view must not be empty
    ///
    /// Read through the end position when it is a peer, or through the
    /// position's own [`DirectBack`](crate::DirectBack) capability when the
    /// view ends in the terminal tag.
    pub fn back(&self) -> P::Item
    where
        P: LastElement<E>,
    {
        self.first.last_element(&self.last)
    }

    /// The element `n` steps from the front; `n` must be below `distance()`
    pub fn at(&self, n: usize) -> P::Item
    where
        P: RandomAccess,
    {
        self.first.nth(n)
    }

    /// Number of elements in the view
    ///
    /// O(1) when the position reports its size or is random access,
    /// otherwise a full traversal.
    pub fn distance(&self) -> usize {
        self.last.distance_from(&self.first)
    }

    pub fn iter(&self) -> Iter<P, E> {
        Iter::new(self.first.clone(), self.last.clone())
    }

    /// Push every element into `out` in traversal order
    pub fn copy_into<X>(&self, out: &mut X)
    where
        X: Extend<P::Item>,
    {
        out.extend(self.iter());
    }

    /// Push every element, transformed by `f`, into `out`
    pub fn transform_into<X, U>(&self, out: &mut X, f: impl FnMut(P::Item) -> U)
    where
        X: Extend<U>,
    {
        out.extend(self.iter().map(f));
    }

    /// Consume the view, moving every element into `out`
    pub fn move_into<X>(self, out: &mut X)
    where
        X: Extend<P::Item>,
    {
        out.extend(self);
    }

    /// Materialize the view into a container of the caller's choice
    pub fn collect_as<C>(&self) -> C
    where
        C: FromIterator<P::Item>,
    {
        self.iter().collect()
    }

    pub fn transform_collect_as<C, U>(&self, f: impl FnMut(P::Item) -> U) -> C
    where
        C: FromIterator<U>,
    {
        self.iter().map(f).collect()
    }

    /// Assign elements positionally into a fixed-size container
    ///
    /// Stops at whichever of the view and `out` runs out first and returns
    /// how many slots were written.
    pub fn assign_into(&self, out: &mut [P::Item]) -> usize {
        let mut written = 0;
        for (slot, item) in out.iter_mut().zip(self.iter()) {
            *slot = item;
            written += 1;
        }
        written
    }

    /// Left fold in traversal order
    pub fn foldl<T>(&self, mut f: impl FnMut(T, P::Item) -> T, init: T) -> T {
        let mut acc = init;
        for item in self.iter() {
            acc = f(acc, item);
        }
        acc
    }

    /// Right fold: a left fold over the reversed view
    pub fn foldr<T>(&self, f: impl FnMut(T, P::Item) -> T, init: T) -> T
    where
        P: ReverseWith<E>,
    {
        reverse(self.clone()).foldl(f, init)
    }

    /// The same elements as a view whose position and end share one type
    pub fn to_common(self) -> View<P::Common, P::Common>
    where
        P: IntoCommon<E>,
    {
        let (first, last) = self.first.into_common(self.last);
        View::new(first, last)
    }
}

impl<P, E> IntoIterator for View<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Item = P::Item;
    type IntoIter = Iter<P, E>;

    fn into_iter(self) -> Iter<P, E> {
        Iter::new(self.first, self.last)
    }
}

impl<P, E> IntoIterator for &View<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Item = P::Item;
    type IntoIter = Iter<P, E>;

    fn into_iter(self) -> Iter<P, E> {
        self.iter()
    }
}

/// Standard iterator driving a view to its end
#[derive(Debug, Clone)]
pub struct Iter<P, E> {
    position: Option<P>,
    last: E,
}

impl<P, E> Iter<P, E> {
    fn new(first: P, last: E) -> Self {
        Iter {
            position: Some(first),
            last,
        }
    }
}

impl<P, E> Iterator for Iter<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        let position = self.position.take()?;
        if self.last.reached_by(&position) {
            self.position = Some(position);
            return None;
        }
        let value = position.value();
        self.position = Some(position.next());
        Some(value)
    }

    /// Exact for random-access traversals, where the distance to the end is
    /// computed without walking. Other traversals report no bound.
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.position {
            Some(position) if matches!(P::CATEGORY, Category::RandomAccess) => {
                let remaining = self.last.distance_from(position);
                (remaining, Some(remaining))
            }
            Some(_) => (0, None),
            None => (0, Some(0)),
        }
    }
}

/// The position stays on the end once reached, so every later call yields
/// `None`.
impl<P, E> FusedIterator for Iter<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
}

/// Anything that can be looked at as a [`View`]
pub trait IntoView {
    type Position: Position;
    type End: EndMarker<Self::Position>;

    fn into_view(self) -> View<Self::Position, Self::End>;
}

impl<P, E> IntoView for View<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Position = P;
    type End = E;

    fn into_view(self) -> Self {
        self
    }
}

impl<P, E> IntoView for &View<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Position = P;
    type End = E;

    fn into_view(self) -> View<P, E> {
        self.clone()
    }
}

impl<'a, T> IntoView for &'a [T] {
    type Position = SlicePosition<'a, T>;
    type End = SlicePosition<'a, T>;

    fn into_view(self) -> View<Self::Position, Self::End> {
        let (first, last) = SlicePosition::bounds(self);
        View::new(first, last)
    }
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
    type Position = SlicePosition<'a, T>;
    type End = SlicePosition<'a, T>;

    fn into_view(self) -> View<Self::Position, Self::End> {
        self.as_slice().into_view()
    }
}

impl<'a, T> IntoView for &'a Vec<T> {
    type Position = SlicePosition<'a, T>;
    type End = SlicePosition<'a, T>;

    fn into_view(self) -> View<Self::Position, Self::End> {
        self.as_slice().into_view()
    }
}

/// Convenience function to look at any source as a [`View`]
pub fn view<V: IntoView>(source: V) -> View<V::Position, V::End> {
    source.into_view()
}

/// Convenience function to convert any source to a homogeneous [`View`]
pub fn to_common<V>(
    source: V,
) -> View<<V::Position as IntoCommon<V::End>>::Common, <V::Position as IntoCommon<V::End>>::Common>
where
    V: IntoView,
    V::Position: IntoCommon<V::End>,
{
    source.into_view().to_common()
}
