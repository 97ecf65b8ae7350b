/// Traversal strength of a position, ordered from weakest to strongest.
///
/// Every [`Position`] declares its category as an associated constant, so an
/// adapter can compute its own category from its inputs at compile time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Category {
    /// The weaker of two categories
    pub const fn weaker(self, other: Category) -> Category {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }
}

/// A copyable cursor into a lazy sequence
///
/// A position can read the element it points at and move on to the next one.
/// Reading an exhausted position is a contract violation: implementations are
/// free to panic and are never required to report it.
pub trait Position: Clone {
    /// The type of elements produced by dereferencing
    type Item;

    /// How far this position can move besides forward
    const CATEGORY: Category = Category::Forward;

    /// Read the element at the current position
    ///
    /// Adapters recompute the element on every call; nothing is memoized.
    fn value(&self) -> Self::Item;

    /// Advance the position to the next element
    fn next(self) -> Self;

    /// Advance the position `n` times
    ///
    /// Random-access positions override this with an O(1) jump.
    fn advance_by(self, n: usize) -> Self {
        let mut position = self;
        for _ in 0..n {
            position = position.next();
        }
        position
    }
}

/// A position that can tell from its own state that it has reached the end
///
/// This is the entry point used by the zero-size [`Terminal`](crate::Terminal)
/// end marker.
pub trait Exhaustible: Position {
    /// Whether there is no element left at this position. Must be O(1).
    fn is_exhausted(&self) -> bool;

    /// Number of elements left before exhaustion
    ///
    /// Linear by default; positions that know their size report it directly.
    fn remaining(&self) -> usize {
        let mut position = self.clone();
        let mut count = 0;
        while !position.is_exhausted() {
            position = position.next();
            count += 1;
        }
        count
    }
}

/// A position whose end can be another value of the same type
///
/// This is the peer-to-peer comparison entry point. Two positions of the
/// same adapter compare equal iff their wrapped inner positions do.
pub trait Homogeneous: Position + PartialEq {
    /// Number of advances needed to move from `self` to `end`
    fn steps_to(&self, end: &Self) -> usize {
        let mut position = self.clone();
        let mut count = 0;
        while position != *end {
            position = position.next();
            count += 1;
        }
        count
    }
}

/// A position that can also move backwards
pub trait Bidirectional: Position {
    /// Retreat the position to the previous element
    fn prev(self) -> Self;
}

/// A position that can read any element ahead of it in O(1)
pub trait RandomAccess: Bidirectional {
    /// Read the element `n` steps ahead of the current position
    fn nth(&self, n: usize) -> Self::Item;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ordering() {
        assert!(Category::Forward < Category::Bidirectional);
        assert!(Category::Bidirectional < Category::RandomAccess);
    }

    #[test]
    fn test_category_weaker() {
        assert_eq!(
            Category::RandomAccess.weaker(Category::Bidirectional),
            Category::Bidirectional
        );
        assert_eq!(
            Category::Forward.weaker(Category::RandomAccess),
            Category::Forward
        );
        assert_eq!(
            Category::Bidirectional.weaker(Category::Bidirectional),
            Category::Bidirectional
        );
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Countdown(u32);

    impl Position for Countdown {
        type Item = u32;

        fn value(&self) -> u32 {
            self.0
        }

        fn next(self) -> Self {
            Countdown(self.0 - 1)
        }
    }

    impl Exhaustible for Countdown {
        fn is_exhausted(&self) -> bool {
            self.0 == 0
        }
    }

    impl Homogeneous for Countdown {}

    #[test]
    fn test_default_advance_by() {
        assert_eq!(Countdown(5).advance_by(3), Countdown(2));
        assert_eq!(Countdown(5).advance_by(0), Countdown(5));
    }

    #[test]
    fn test_default_remaining_is_linear_count() {
        assert_eq!(Countdown(4).remaining(), 4);
        assert_eq!(Countdown(0).remaining(), 0);
    }

    #[test]
    fn test_default_steps_to() {
        assert_eq!(Countdown(7).steps_to(&Countdown(2)), 5);
        assert_eq!(Countdown(2).steps_to(&Countdown(2)), 0);
    }

    #[test]
    fn test_default_category_is_forward() {
        assert_eq!(Countdown::CATEGORY, Category::Forward);
    }
}
