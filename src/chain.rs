use crate::capability::IntoCommon;
use crate::concat::{ConcatPosition, concat};
use crate::end_marker::{EndMarker, Terminal};
use crate::filter::{FilterPosition, filter};
use crate::flatten::{FlattenPosition, flatten};
use crate::join::{JoinPosition, join};
use crate::map::{MapPosition, copied, map};
use crate::position::{Homogeneous, Position};
use crate::reverse::{ReverseWith, reverse};
use crate::skip::skip;
use crate::take::{TakePosition, slice, take};
use crate::view::{IntoView, Iter, View};
use std::ops::Deref;

/// Fluent wrapper offering every adapter as a method
///
/// Each stage consumes the chain and returns a new one around the adapted
/// view, so pipelines read left to right:
///
/// ```
/// use viewcomb::chain;
///
/// let data = [1, 2, 3, 4, 5, 6];
/// let picked: Vec<i32> = chain(&data)
///     .filter(|x: &&i32| **x % 2 == 0)
///     .map(|x: &i32| x * 10)
///     .take(2)
///     .collect_as();
/// assert_eq!(picked, vec![20, 40]);
/// ```
///
/// A chain dereferences to its [`View`], so terminal operations are called
/// on it directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Chain<P, E = Terminal> {
    view: View<P, E>,
}

impl<P, E> Chain<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    pub fn new(view: View<P, E>) -> Self {
        Chain { view }
    }

    pub fn filter<F>(self, predicate: F) -> Chain<FilterPosition<P, E, F>>
    where
        F: Fn(&P::Item) -> bool + Clone,
    {
        Chain::new(filter(self.view, predicate))
    }

    pub fn map<F, U>(self, mapper: F) -> Chain<MapPosition<P, E, F>>
    where
        F: Fn(P::Item) -> U + Clone,
    {
        Chain::new(map(self.view, mapper))
    }

    pub fn take(self, amount: usize) -> Chain<TakePosition<P, E>> {
        Chain::new(take(self.view, amount))
    }

    pub fn slice(self, from: usize, to: usize) -> Chain<TakePosition<P, E>> {
        Chain::new(slice(self.view, from, to))
    }

    pub fn skip(self, amount: usize) -> Chain<P, E> {
        Chain::new(skip(self.view, amount))
    }

    /// Traverse back to front
    ///
    /// Peer-ended chains reverse into the symmetric pair of reversed
    /// positions; terminal-ended chains swap their position's direction.
    pub fn reverse(self) -> Chain<P::Reversed, P::ReversedEnd>
    where
        P: ReverseWith<E>,
    {
        Chain::new(reverse(self.view))
    }

    /// Append `other`, which must yield the same element type
    ///
    /// ```compile_fail
    /// use viewcomb::{chain, cstring};
    ///
    /// let mixed = chain(cstring(b"ab\0")).concat(&[1i32, 2]);
    /// ```
    pub fn concat<V>(self, other: V) -> Chain<ConcatPosition<P, E, V::Position, V::End>>
    where
        V: IntoView,
        V::Position: Position<Item = P::Item>,
    {
        Chain::new(concat(self.view, other))
    }

    /// Emit `delimiter` between elements; it must yield the same element type
    ///
    /// ```compile_fail
    /// use viewcomb::{chain, cstring};
    ///
    /// let mixed = chain(cstring(b"ab\0")).join(&[0i32]);
    /// ```
    pub fn join<D>(self, delimiter: D) -> Chain<JoinPosition<P, E, D::Position, D::End>>
    where
        D: IntoView,
        D::Position: Position<Item = P::Item>,
    {
        Chain::new(join(self.view, delimiter))
    }

    pub fn flatten<C, I, IE>(self) -> Chain<FlattenPosition<C, I, IE>, FlattenPosition<C, I, IE>>
    where
        P: IntoCommon<E, Common = C>,
        C: Homogeneous,
        C::Item: IntoView<Position = I, End = IE>,
        I: Position + PartialEq,
        IE: EndMarker<I>,
    {
        Chain::new(flatten(self.view))
    }

    pub fn copied<'a, T>(self) -> Chain<MapPosition<P, E, fn(&'a T) -> T>>
    where
        P: Position<Item = &'a T>,
        T: Copy + 'a,
    {
        Chain::new(copied(self.view))
    }

    pub fn to_common(self) -> Chain<P::Common, P::Common>
    where
        P: IntoCommon<E>,
    {
        Chain::new(self.view.to_common())
    }

    /// Drive the pipeline to its end, calling `op` on every element
    ///
    /// Returns the chain unchanged so it can be extended or consumed again.
    pub fn for_each(self, mut op: impl FnMut(P::Item)) -> Self {
        for item in self.view.iter() {
            op(item);
        }
        self
    }
}

impl<P, E> Deref for Chain<P, E> {
    type Target = View<P, E>;

    fn deref(&self) -> &View<P, E> {
        &self.view
    }
}

impl<P, E> IntoView for Chain<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Position = P;
    type End = E;

    fn into_view(self) -> View<P, E> {
        self.view
    }
}

impl<P, E> IntoView for &Chain<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Position = P;
    type End = E;

    fn into_view(self) -> View<P, E> {
        self.view.clone()
    }
}

impl<P, E> IntoIterator for Chain<P, E>
where
    P: Position,
    E: EndMarker<P>,
{
    type Item = P::Item;
    type IntoIter = Iter<P, E>;

    fn into_iter(self) -> Iter<P, E> {
        self.view.into_iter()
    }
}

/// Convenience function to start a fluent pipeline from any source
pub fn chain<V: IntoView>(source: V) -> Chain<V::Position, V::End> {
    Chain::new(source.into_view())
}
