use crate::capability::{IntoCommon, ToCommon};
use crate::end_marker::EndMarker;
use crate::position::{Bidirectional, Category, Exhaustible, Homogeneous, Position};
use crate::view::{IntoView, View};

/// Cursor into the inner sequence currently being emitted
#[derive(Debug, Clone)]
struct Segment<I, IE> {
    first: I,
    current: I,
    last: IE,
}

/// Position over the elements of every inner sequence, in order
///
/// The outer traversal is homogeneous, so the flattened view can end at a
/// peer position. Empty inner sequences are skipped in both directions.
/// One call flattens one level of nesting; deeper nesting flattens by
/// composing calls.
#[derive(Debug, Clone)]
pub struct FlattenPosition<P, I, IE> {
    outer: P,
    outer_last: P,
    /// `None` exactly when the outer traversal is exhausted
    inner: Option<Segment<I, IE>>,
}

impl<P, I, IE> FlattenPosition<P, I, IE>
where
    P: Homogeneous,
    P::Item: IntoView<Position = I, End = IE>,
    I: Position,
    IE: EndMarker<I>,
{
    pub fn new(outer: P, outer_last: P) -> Self {
        FlattenPosition {
            outer,
            outer_last,
            inner: None,
        }
        .settle()
    }

    /// The position past the last element of the final inner sequence
    pub fn end(outer_last: P) -> Self {
        FlattenPosition {
            outer: outer_last.clone(),
            outer_last,
            inner: None,
        }
    }

    /// Move the outer cursor to the first non-empty inner sequence
    fn settle(mut self) -> Self {
        while self.outer != self.outer_last {
            let (first, last) = self.outer.value().into_view().into_parts();
            if !last.reached_by(&first) {
                self.inner = Some(Segment {
                    current: first.clone(),
                    first,
                    last,
                });
                return self;
            }
            self.outer = self.outer.next();
        }
        self.inner = None;
        self
    }
}

impl<P: PartialEq, I: PartialEq, IE> PartialEq for FlattenPosition<P, I, IE> {
    fn eq(&self, other: &Self) -> bool {
        self.outer == other.outer
            && self.inner.as_ref().map(|segment| &segment.current)
                == other.inner.as_ref().map(|segment| &segment.current)
    }
}

impl<P, I, IE> Position for FlattenPosition<P, I, IE>
where
    P: Homogeneous,
    P::Item: IntoView<Position = I, End = IE>,
    I: Position,
    IE: EndMarker<I>,
{
    type Item = I::Item;

    const CATEGORY: Category = Category::Bidirectional;

    fn value(&self) -> I::Item {
        match &self.inner {
            Some(segment) => segment.current.value(),
            None => panic!("cannot read past the end of a flattened view"),
        }
    }

    fn next(self) -> Self {
        let FlattenPosition {
            outer,
            outer_last,
            inner,
        } = self;
        let Some(segment) = inner else {
            return FlattenPosition::end(outer_last);
        };
        let current = segment.current.next();
        if segment.last.reached_by(&current) {
            FlattenPosition {
                outer: outer.next(),
                outer_last,
                inner: None,
            }
            .settle()
        } else {
            FlattenPosition {
                outer,
                outer_last,
                inner: Some(Segment { current, ..segment }),
            }
        }
    }
}

impl<P, I, IE> Exhaustible for FlattenPosition<P, I, IE>
where
    P: Homogeneous,
    P::Item: IntoView<Position = I, End = IE>,
    I: Position,
    IE: EndMarker<I>,
{
    fn is_exhausted(&self) -> bool {
        self.inner.is_none()
    }
}

impl<P, I, IE> Homogeneous for FlattenPosition<P, I, IE>
where
    P: Homogeneous,
    P::Item: IntoView<Position = I, End = IE>,
    I: Position + PartialEq,
    IE: EndMarker<I>,
{
}

/// Retreating re-derives the previous inner sequence from its end, which
/// needs inner sequences that end at a peer position.
impl<P, I> Bidirectional for FlattenPosition<P, I, I>
where
    P: Homogeneous + Bidirectional,
    P::Item: IntoView<Position = I, End = I>,
    I: Homogeneous + Bidirectional,
{
    fn prev(self) -> Self {
        let FlattenPosition {
            mut outer,
            outer_last,
            inner,
        } = self;
        if let Some(segment) = inner {
            if segment.current != segment.first {
                return FlattenPosition {
                    outer,
                    outer_last,
                    inner: Some(Segment {
                        current: segment.current.prev(),
                        ..segment
                    }),
                };
            }
        }
        loop {
            outer = outer.prev();
            let (first, last) = outer.value().into_view().into_parts();
            if first != last {
                let current = last.clone().prev();
                return FlattenPosition {
                    outer,
                    outer_last,
                    inner: Some(Segment {
                        first,
                        current,
                        last,
                    }),
                };
            }
        }
    }
}

impl<P, I, IE> ToCommon for FlattenPosition<P, I, IE>
where
    P: Homogeneous,
    P::Item: IntoView<Position = I, End = IE>,
    I: Position + PartialEq,
    IE: EndMarker<I>,
{
    type Common = Self;

    fn to_common(&self) -> (Self, Self) {
        (self.clone(), FlattenPosition::end(self.outer_last.clone()))
    }
}

/// Convenience function to traverse a sequence of sequences as one sequence
pub fn flatten<V, C, I, IE>(source: V) -> View<FlattenPosition<C, I, IE>, FlattenPosition<C, I, IE>>
where
    V: IntoView,
    V::Position: IntoCommon<V::End, Common = C>,
    C: Homogeneous,
    C::Item: IntoView<Position = I, End = IE>,
    I: Position + PartialEq,
    IE: EndMarker<I>,
{
    let (first, last) = source.into_view().into_parts();
    let (first, last) = first.into_common(last);
    tracing::trace!("flattening one level of nesting");
    View::new(
        FlattenPosition::new(first, last.clone()),
        FlattenPosition::end(last),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cstring::cstring;
    use crate::map::map;
    use crate::reverse::reverse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flatten_two_levels() {
        let nested = vec![vec![1, 2], vec![3], vec![4, 5]];
        let flat = flatten(&nested);

        assert_eq!(flat.collect_as::<Vec<_>>(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(flat.distance(), 5);
    }

    #[test]
    fn test_flatten_skips_empty_inner_sequences() {
        let nested = vec![vec![], vec![1], vec![], vec![], vec![2, 3], vec![]];
        let flat = flatten(&nested);

        assert_eq!(flat.collect_as::<Vec<_>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_flatten_all_empty() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![]];
        assert!(flatten(&nested).is_empty());

        let none: Vec<Vec<i32>> = Vec::new();
        assert!(flatten(&none).is_empty());
    }

    #[test]
    fn test_flatten_three_levels() {
        let nested = vec![vec![vec![1], vec![]], vec![], vec![vec![2, 3], vec![4]]];
        let flat = flatten(flatten(&nested));

        assert_eq!(flat.collect_as::<Vec<_>>(), vec![&1, &2, &3, &4]);
    }

    #[test]
    fn test_flatten_back_and_reverse() {
        let nested = vec![vec![1, 2], vec![], vec![3], vec![]];
        let flat = flatten(&nested);

        assert_eq!(flat.back(), &3);
        assert_eq!(reverse(flat).collect_as::<Vec<_>>(), vec![&3, &2, &1]);
    }

    #[test]
    fn test_flatten_prev_crosses_empty_segments() {
        let nested = vec![vec![1], vec![], vec![], vec![2]];
        let flat = flatten(&nested);

        let second = flat.begin().next();
        assert_eq!(second.value(), &2);
        assert_eq!(second.prev().value(), &1);
    }

    #[test]
    fn test_flatten_mapped_views() {
        let words = ["ab", "", "cd"];
        let letters = flatten(map(&words, |word| cstring(word.as_bytes())));

        assert_eq!(letters.collect_as::<Vec<u8>>(), b"abcd".to_vec());
        assert_eq!(letters.category(), Category::Bidirectional);
    }
}
