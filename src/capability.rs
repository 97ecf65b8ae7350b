//! Optional position capabilities
//!
//! Each capability is a trait that adapters implement when their inputs
//! allow it. Generic code asks for a capability by naming it as a bound, so
//! the choice between strategies is made once at compose time and never per
//! element. The dispatch traits at the bottom ([`IntoCommon`],
//! [`LastElement`]) pick between the peer and the terminal-tag strategy from
//! the end marker's type alone.

use crate::end_marker::Terminal;
use crate::position::{Bidirectional, Exhaustible, Homogeneous, Position};

/// Direct access to the last element of the traversal starting here
pub trait DirectBack: Position {
    fn back(&self) -> Self::Item;
}

/// Reversal without a dedicated reverse-position type
///
/// `swap_direction` is called on the first position of a view and returns
/// a position sitting at the view's end whose bound is the old start:
/// retreating walks back towards the start and [`Exhaustible::is_exhausted`]
/// reports reaching it. Swapping twice restores the original position.
pub trait Swappable: Bidirectional + Exhaustible {
    fn swap_direction(self) -> Self;
}

/// Conversion of a terminal-tag traversal into a pair of peer positions
pub trait ToCommon: Position {
    type Common: Homogeneous<Item = Self::Item>;

    /// The pair `(first, last)` covering the same elements as `self`
    fn to_common(&self) -> (Self::Common, Self::Common);
}

/// Homogeneous conversion for either end marker discipline
///
/// Peer-ended traversals are already homogeneous and convert for free;
/// terminal-ended ones go through [`ToCommon`].
pub trait IntoCommon<E>: Position {
    type Common: Homogeneous<Item = Self::Item>;

    fn into_common(self, last: E) -> (Self::Common, Self::Common);
}

impl<P: Homogeneous> IntoCommon<P> for P {
    type Common = P;

    fn into_common(self, last: P) -> (P, P) {
        (self, last)
    }
}

impl<P: ToCommon> IntoCommon<Terminal> for P {
    type Common = P::Common;

    fn into_common(self, _last: Terminal) -> (Self::Common, Self::Common) {
        self.to_common()
    }
}

/// Last element of a traversal bounded by `E`
///
/// With a peer end the element is read by stepping a copy of the end back
/// once; with the terminal tag the position must offer [`DirectBack`].
pub trait LastElement<E>: Position {
    fn last_element(&self, last: &E) -> Self::Item;
}

impl<P: Bidirectional + Homogeneous> LastElement<P> for P {
    fn last_element(&self, last: &P) -> Self::Item {
        last.clone().prev().value()
    }
}

impl<P: DirectBack> LastElement<Terminal> for P {
    fn last_element(&self, _last: &Terminal) -> Self::Item {
        self.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::{CStrPosition, SlicePosition};

    #[test]
    fn test_peer_pair_converts_unchanged() {
        let data = [4, 5, 6];
        let first = SlicePosition::new(&data, 1);
        let last = SlicePosition::new(&data, 3);

        let (common_first, common_last) = first.into_common(last);
        assert_eq!(common_first, first);
        assert_eq!(common_last, last);
    }

    #[test]
    fn test_terminal_pair_converts_through_to_common() {
        let data = *b"abc\0";
        let first = CStrPosition::new(&data, 0);

        let (common_first, common_last) = first.into_common(Terminal);
        assert_eq!(common_first.steps_to(&common_last), 3);
        assert_eq!(common_last, CStrPosition::Terminator);
    }

    #[test]
    fn test_last_element_with_peer_end() {
        let data = [1, 2, 3];
        let first = SlicePosition::new(&data, 0);
        let last = SlicePosition::new(&data, 3);

        assert_eq!(first.last_element(&last), &3);
    }

    #[test]
    fn test_last_element_with_terminal_end() {
        let data = [1, 2, 3];
        let first = SlicePosition::new(&data, 0);

        assert_eq!(first.last_element(&Terminal), &3);
    }
}
