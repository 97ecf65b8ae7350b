use crate::capability::{IntoCommon, ToCommon};
use crate::end_marker::{EndMarker, Terminal};
use crate::position::{Exhaustible, Homogeneous, Position};
use crate::view::{IntoView, View};

/// Position that drains one traversal and then continues with another
///
/// Both sides must yield the same item type; a mismatch fails to compile.
/// Forward only.
#[derive(Debug, Clone)]
pub struct ConcatPosition<P1, E1, P2, E2> {
    first: P1,
    first_last: E1,
    second: P2,
    second_last: E2,
}

impl<P1, E1, P2, E2> ConcatPosition<P1, E1, P2, E2> {
    pub fn new(first: P1, first_last: E1, second: P2, second_last: E2) -> Self {
        ConcatPosition {
            first,
            first_last,
            second,
            second_last,
        }
    }
}

impl<P1, E1, P2, E2> ConcatPosition<P1, E1, P2, E2>
where
    P1: Position,
    E1: EndMarker<P1>,
{
    fn first_drained(&self) -> bool {
        self.first_last.reached_by(&self.first)
    }
}

impl<P1: PartialEq, E1, P2: PartialEq, E2> PartialEq for ConcatPosition<P1, E1, P2, E2> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<P1, E1, P2, E2> Position for ConcatPosition<P1, E1, P2, E2>
where
    P1: Position,
    E1: EndMarker<P1>,
    P2: Position<Item = P1::Item>,
    E2: Clone,
{
    type Item = P1::Item;

    fn value(&self) -> P1::Item {
        if self.first_drained() {
            self.second.value()
        } else {
            self.first.value()
        }
    }

    fn next(self) -> Self {
        if self.first_drained() {
            ConcatPosition {
                second: self.second.next(),
                ..self
            }
        } else {
            ConcatPosition {
                first: self.first.next(),
                ..self
            }
        }
    }
}

impl<P1, E1, P2, E2> Exhaustible for ConcatPosition<P1, E1, P2, E2>
where
    P1: Position,
    E1: EndMarker<P1>,
    P2: Position<Item = P1::Item>,
    E2: EndMarker<P2>,
{
    fn is_exhausted(&self) -> bool {
        self.first_drained() && self.second_last.reached_by(&self.second)
    }

    fn remaining(&self) -> usize {
        self.first_last.distance_from(&self.first) + self.second_last.distance_from(&self.second)
    }
}

impl<P1, E1, P2, E2> Homogeneous for ConcatPosition<P1, E1, P2, E2>
where
    P1: Homogeneous,
    E1: EndMarker<P1>,
    P2: Homogeneous<Item = P1::Item>,
    E2: Clone,
{
    fn steps_to(&self, end: &Self) -> usize {
        self.first.steps_to(&end.first) + self.second.steps_to(&end.second)
    }
}

impl<P1, E1, P2, E2> ToCommon for ConcatPosition<P1, E1, P2, E2>
where
    P1: IntoCommon<E1>,
    E1: EndMarker<P1>,
    P2: IntoCommon<E2, Item = P1::Item>,
    E2: Clone,
{
    type Common = ConcatPosition<P1::Common, P1::Common, P2::Common, P2::Common>;

    fn to_common(&self) -> (Self::Common, Self::Common) {
        let (first, first_last) = self.first.clone().into_common(self.first_last.clone());
        let (second, second_last) = self.second.clone().into_common(self.second_last.clone());
        (
            ConcatPosition::new(first, first_last.clone(), second, second_last.clone()),
            ConcatPosition::new(
                first_last.clone(),
                first_last,
                second_last.clone(),
                second_last,
            ),
        )
    }
}

/// Convenience function to traverse `a` and then `b`
///
/// ```
/// use viewcomb::{concat, cstring};
///
/// let joined: Vec<u8> = concat(cstring(b"ab\0"), cstring(b"cd\0")).collect_as();
/// assert_eq!(joined, b"abcd".to_vec());
/// ```
///
/// Both sides must yield the same element type:
///
/// ```compile_fail
/// use viewcomb::{concat, cstring};
///
/// let mixed = concat(cstring(b"ab\0"), &[1i32, 2]);
/// ```
pub fn concat<A, B>(a: A, b: B) -> View<ConcatPosition<A::Position, A::End, B::Position, B::End>>
where
    A: IntoView,
    B: IntoView,
    B::Position: Position<Item = <A::Position as Position>::Item>,
{
    let (first, first_last) = a.into_view().into_parts();
    let (second, second_last) = b.into_view().into_parts();
    View::new(
        ConcatPosition::new(first, first_last, second, second_last),
        Terminal,
    )
}
