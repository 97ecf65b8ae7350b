use crate::capability::Swappable;
use crate::end_marker::{EndMarker, Terminal};
use crate::position::{Bidirectional, Category, Exhaustible, Homogeneous, Position};
use crate::view::{IntoView, View};

/// Position walking a bidirectional traversal backwards
///
/// The wrapped position sits one step past the element being read, the
/// same way a reverse iterator wraps its base.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reversed<P>(P);

impl<P> Reversed<P> {
    pub fn new(base: P) -> Self {
        Reversed(base)
    }

    pub fn base(self) -> P {
        self.0
    }
}

impl<P: Bidirectional> Position for Reversed<P> {
    type Item = P::Item;

    const CATEGORY: Category = P::CATEGORY.weaker(Category::Bidirectional);

    fn value(&self) -> P::Item {
        self.0.clone().prev().value()
    }

    fn next(self) -> Self {
        Reversed(self.0.prev())
    }
}

impl<P: Bidirectional> Bidirectional for Reversed<P> {
    fn prev(self) -> Self {
        Reversed(self.0.next())
    }
}

impl<P: Bidirectional + Homogeneous> Homogeneous for Reversed<P> {
    fn steps_to(&self, end: &Self) -> usize {
        end.0.steps_to(&self.0)
    }
}

/// Only meaningful over a swapped base, whose bound is the old start
impl<P: Swappable> Exhaustible for Reversed<P> {
    fn is_exhausted(&self) -> bool {
        self.0.is_exhausted()
    }
}

impl<P: Swappable> Swappable for Reversed<P> {
    fn swap_direction(self) -> Self {
        Reversed(self.0.swap_direction())
    }
}

/// Reversal strategy selected by the end marker's type
///
/// A peer-ended view reverses into the symmetric pair of reversed
/// positions. A terminal-ended view first swaps its position's direction.
pub trait ReverseWith<E>: Position {
    type Reversed: Position<Item = Self::Item>;
    type ReversedEnd: EndMarker<Self::Reversed>;

    fn reverse_with(self, last: E) -> View<Self::Reversed, Self::ReversedEnd>;
}

impl<P: Bidirectional + Homogeneous> ReverseWith<P> for P {
    type Reversed = Reversed<P>;
    type ReversedEnd = Reversed<P>;

    fn reverse_with(self, last: P) -> View<Reversed<P>, Reversed<P>> {
        View::new(Reversed(last), Reversed(self))
    }
}

impl<P: Swappable> ReverseWith<Terminal> for P {
    type Reversed = Reversed<P>;
    type ReversedEnd = Terminal;

    fn reverse_with(self, _last: Terminal) -> View<Reversed<P>, Terminal> {
        View::new(Reversed(self.swap_direction()), Terminal)
    }
}

/// Convenience function to traverse a bidirectional view back to front
pub fn reverse<V>(
    source: V,
) -> View<
    <V::Position as ReverseWith<V::End>>::Reversed,
    <V::Position as ReverseWith<V::End>>::ReversedEnd,
>
where
    V: IntoView,
    V::Position: ReverseWith<V::End>,
{
    let (first, last) = source.into_view().into_parts();
    first.reverse_with(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use crate::map::map;
    use crate::view::view;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reverse_slice() {
        let data = [1, 2, 3];
        let reversed = reverse(&data);

        assert_eq!(reversed.collect_as::<Vec<_>>(), vec![&3, &2, &1]);
        assert_eq!(reversed.distance(), 3);
        assert_eq!(reversed.front(), &3);
        assert_eq!(reversed.back(), &1);
    }

    #[test]
    fn test_reverse_twice_restores_order() {
        let data = [1, 2, 3, 4];
        let twice = reverse(reverse(&data));

        assert_eq!(twice.collect_as::<Vec<_>>(), vec![&1, &2, &3, &4]);
    }

    #[test]
    fn test_reverse_empty() {
        let data: [u8; 0] = [];
        assert!(reverse(&data).is_empty());
    }

    #[test]
    fn test_reverse_terminal_view_through_swap() {
        let data = [1, 2, 3];
        let doubled = map(&data, |x: &i32| x * 2);
        let reversed = reverse(&doubled);

        assert_eq!(reversed.collect_as::<Vec<_>>(), vec![6, 4, 2]);
        assert_eq!(reversed.distance(), 3);
    }

    #[test]
    fn test_reverse_twice_through_swap() {
        let data = [1, 2, 3];
        let doubled = map(&data, |x: &i32| x * 2);
        let twice = reverse(reverse(doubled));

        assert_eq!(twice.collect_as::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_reverse_filter() {
        let data = [1, 2, 3, 4, 5, 6];
        let evens = filter(&data, |x: &&i32| **x % 2 == 0);

        assert_eq!(reverse(evens).collect_as::<Vec<_>>(), vec![&6, &4, &2]);
    }

    #[test]
    fn test_reversed_category() {
        let data = [1];
        assert_eq!(reverse(view(&data)).category(), Category::Bidirectional);
    }
}
