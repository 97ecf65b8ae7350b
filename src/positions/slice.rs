use crate::capability::{DirectBack, ToCommon};
use crate::position::{Bidirectional, Category, Exhaustible, Homogeneous, Position, RandomAccess};

/// Position over an in-memory slice
///
/// This is the random-access source every array-like sequence starts from.
/// It yields references into the slice and can end either at a peer
/// position or at the [`Terminal`](crate::Terminal) tag, in which case the
/// slice's own length is the bound.
#[derive(Debug)]
pub struct SlicePosition<'a, T> {
    data: &'a [T],
    /// Index of the current element; equals `data.len()` once exhausted
    index: usize,
}

impl<'a, T> SlicePosition<'a, T> {
    pub fn new(data: &'a [T], index: usize) -> Self {
        debug_assert!(index <= data.len(), "slice position out of range");
        SlicePosition { data, index }
    }

    /// Positions at the first element and one past the last
    pub fn bounds(data: &'a [T]) -> (Self, Self) {
        (Self::new(data, 0), Self::new(data, data.len()))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn source(&self) -> &'a [T] {
        self.data
    }
}

impl<T> Clone for SlicePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

/// Positions are compared by index; comparing positions into different
/// slices is meaningless.
impl<T> PartialEq for SlicePosition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for SlicePosition<'_, T> {}

impl<'a, T> Position for SlicePosition<'a, T> {
    type Item = &'a T;

    const CATEGORY: Category = Category::RandomAccess;

    fn value(&self) -> &'a T {
        &self.data[self.index]
    }

    fn next(self) -> Self {
        SlicePosition {
            index: self.index + 1,
            ..self
        }
    }

    fn advance_by(self, n: usize) -> Self {
        SlicePosition::new(self.data, self.index + n)
    }
}

impl<T> Exhaustible for SlicePosition<'_, T> {
    fn is_exhausted(&self) -> bool {
        self.index >= self.data.len()
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.index
    }
}

impl<T> Homogeneous for SlicePosition<'_, T> {
    fn steps_to(&self, end: &Self) -> usize {
        debug_assert!(self.index <= end.index, "end precedes position");
        end.index - self.index
    }
}

impl<T> Bidirectional for SlicePosition<'_, T> {
    fn prev(self) -> Self {
        SlicePosition {
            index: self.index - 1,
            ..self
        }
    }
}

impl<T> RandomAccess for SlicePosition<'_, T> {
    fn nth(&self, n: usize) -> Self::Item {
        &self.data[self.index + n]
    }
}

impl<T> DirectBack for SlicePosition<'_, T> {
    fn back(&self) -> Self::Item {
        &self.data[self.data.len() - 1]
    }
}

impl<T> ToCommon for SlicePosition<'_, T> {
    type Common = Self;

    fn to_common(&self) -> (Self, Self) {
        (*self, SlicePosition::new(self.data, self.data.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let data = [10, 20, 30];
        let position = SlicePosition::new(&data, 0);

        assert_eq!(position.value(), &10);

        let position = position.next();
        assert_eq!(position.value(), &20);
        assert_eq!(position.index(), 1);
    }

    #[test]
    fn test_exhaustion() {
        let data = [1, 2];
        let mut position = SlicePosition::new(&data, 0);

        assert!(!position.is_exhausted());
        position = position.next().next();
        assert!(position.is_exhausted());
        assert_eq!(position.remaining(), 0);
    }

    #[test]
    fn test_empty_data() {
        let data: [u32; 0] = [];
        let (first, last) = SlicePosition::bounds(&data);

        assert!(first.is_exhausted());
        assert_eq!(first, last);
        assert_eq!(first.steps_to(&last), 0);
    }

    #[test]
    fn test_random_access() {
        let data = [5, 6, 7, 8, 9];
        let position = SlicePosition::new(&data, 1);

        assert_eq!(position.nth(0), &6);
        assert_eq!(position.nth(3), &9);
        assert_eq!(position.advance_by(2).value(), &8);
        assert_eq!(position.remaining(), 4);
    }

    #[test]
    fn test_prev() {
        let data = [1, 2, 3];
        let position = SlicePosition::new(&data, 3).prev();

        assert_eq!(position.value(), &3);
        assert_eq!(position.prev().value(), &2);
    }

    #[test]
    fn test_copy_independence() {
        let data = [1, 2, 3, 4];
        let position = SlicePosition::new(&data, 0);

        let saved_at_1 = position;
        let position = position.next().next();

        assert_eq!(position.value(), &3);
        assert_eq!(saved_at_1.value(), &1);
        assert_eq!(saved_at_1.next().value(), &2);
    }

    #[test]
    fn test_back_and_to_common() {
        let data = [1, 2, 3];
        let position = SlicePosition::new(&data, 1);

        assert_eq!(position.back(), &3);

        let (first, last) = position.to_common();
        assert_eq!(first.steps_to(&last), 2);
    }

    #[test]
    fn test_category() {
        assert_eq!(SlicePosition::<u8>::CATEGORY, Category::RandomAccess);
    }
}
