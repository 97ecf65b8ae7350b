use crate::position::{Exhaustible, Homogeneous};

/// Zero-size end marker for positions that detect exhaustion on their own
///
/// Single-pass adapters (filtered, mapped, counted sequences) cannot produce
/// their true end position without walking to it, so their views end in
/// `Terminal` and ask the position whether it is exhausted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Terminal;

/// Something a position can run into at the end of a view
///
/// There are exactly two disciplines: a peer position of the same type
/// compared by equality, or the [`Terminal`] tag that defers to
/// [`Exhaustible::is_exhausted`].
pub trait EndMarker<P>: Clone {
    /// Whether `position` has reached this end
    fn reached_by(&self, position: &P) -> bool;

    /// Number of elements between `position` and this end
    fn distance_from(&self, position: &P) -> usize;
}

impl<P: Homogeneous> EndMarker<P> for P {
    fn reached_by(&self, position: &P) -> bool {
        position == self
    }

    fn distance_from(&self, position: &P) -> usize {
        position.steps_to(self)
    }
}

impl<P: Exhaustible> EndMarker<P> for Terminal {
    fn reached_by(&self, position: &P) -> bool {
        position.is_exhausted()
    }

    fn distance_from(&self, position: &P) -> usize {
        position.remaining()
    }
}
