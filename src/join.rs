use crate::capability::{IntoCommon, ToCommon};
use crate::end_marker::{EndMarker, Terminal};
use crate::position::{Exhaustible, Homogeneous, Position};
use crate::view::{IntoView, View};

/// Position interleaving a delimiter between the elements of a source
///
/// The cursor alternates between two phases: emitting the current source
/// element, and emitting the delimiter in full. The delimiter phase is only
/// entered while source elements remain, so the delimiter never trails.
/// Forward only.
#[derive(Debug, Clone)]
pub struct JoinPosition<P, E, D, DE> {
    source: P,
    last: E,
    delimiter_first: D,
    delimiter_last: DE,
    cursor: D,
    emitting_source: bool,
}

impl<P, E, D: Clone, DE> JoinPosition<P, E, D, DE> {
    pub fn new(source: P, last: E, delimiter_first: D, delimiter_last: DE) -> Self {
        JoinPosition {
            source,
            last,
            cursor: delimiter_first.clone(),
            delimiter_first,
            delimiter_last,
            emitting_source: true,
        }
    }
}

impl<P: PartialEq, E, D: PartialEq, DE> PartialEq for JoinPosition<P, E, D, DE> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.emitting_source == other.emitting_source
            && (self.emitting_source || self.cursor == other.cursor)
    }
}

impl<P, E, D, DE> Position for JoinPosition<P, E, D, DE>
where
    P: Position,
    E: EndMarker<P>,
    D: Position<Item = P::Item>,
    DE: EndMarker<D>,
{
    type Item = P::Item;

    fn value(&self) -> P::Item {
        if self.emitting_source {
            self.source.value()
        } else {
            self.cursor.value()
        }
    }

    fn next(self) -> Self {
        if self.emitting_source {
            let source = self.source.next();
            let delimit = !self.last.reached_by(&source)
                && !self.delimiter_last.reached_by(&self.delimiter_first);
            JoinPosition {
                source,
                cursor: self.delimiter_first.clone(),
                emitting_source: !delimit,
                ..self
            }
        } else {
            let cursor = self.cursor.next();
            JoinPosition {
                emitting_source: self.delimiter_last.reached_by(&cursor),
                cursor,
                ..self
            }
        }
    }
}

impl<P, E, D, DE> Exhaustible for JoinPosition<P, E, D, DE>
where
    P: Position,
    E: EndMarker<P>,
    D: Position<Item = P::Item>,
    DE: EndMarker<D>,
{
    fn is_exhausted(&self) -> bool {
        self.emitting_source && self.last.reached_by(&self.source)
    }

    fn remaining(&self) -> usize {
        let sources = self.last.distance_from(&self.source);
        if sources == 0 {
            return 0;
        }
        let delimiter = self.delimiter_last.distance_from(&self.delimiter_first);
        let interleaved = sources + (sources - 1) * delimiter;
        if self.emitting_source {
            interleaved
        } else {
            self.delimiter_last.distance_from(&self.cursor) + interleaved
        }
    }
}

impl<P, E, D, DE> Homogeneous for JoinPosition<P, E, D, DE>
where
    P: Homogeneous,
    E: EndMarker<P>,
    D: Position<Item = P::Item> + PartialEq,
    DE: EndMarker<D>,
{
}

impl<P, E, D, DE> ToCommon for JoinPosition<P, E, D, DE>
where
    P: IntoCommon<E>,
    E: EndMarker<P>,
    D: Position<Item = P::Item> + PartialEq,
    DE: EndMarker<D>,
{
    type Common = JoinPosition<P::Common, P::Common, D, DE>;

    fn to_common(&self) -> (Self::Common, Self::Common) {
        let (source, last) = self.source.clone().into_common(self.last.clone());
        let first = JoinPosition {
            source,
            last: last.clone(),
            delimiter_first: self.delimiter_first.clone(),
            delimiter_last: self.delimiter_last.clone(),
            cursor: self.cursor.clone(),
            emitting_source: self.emitting_source,
        };
        let end = JoinPosition::new(
            last.clone(),
            last,
            self.delimiter_first.clone(),
            self.delimiter_last.clone(),
        );
        (first, end)
    }
}

/// Convenience function to emit `delimiter` between consecutive elements
///
/// An empty delimiter yields the source sequence unchanged.
///
/// ```
/// use viewcomb::{cstring, join};
///
/// let listed: Vec<u8> = join(cstring(b"abc\0"), cstring(b", ")).collect_as();
/// assert_eq!(listed, b"a, b, c".to_vec());
/// ```
///
/// The delimiter must yield the source's element type:
///
/// ```compile_fail
/// use viewcomb::{cstring, join};
///
/// let mixed = join(cstring(b"ab\0"), &[0i32]);
/// ```
pub fn join<V, D>(
    source: V,
    delimiter: D,
) -> View<JoinPosition<V::Position, V::End, D::Position, D::End>>
where
    V: IntoView,
    D: IntoView,
    D::Position: Position<Item = <V::Position as Position>::Item>,
{
    let (first, last) = source.into_view().into_parts();
    let (delimiter_first, delimiter_last) = delimiter.into_view().into_parts();
    View::new(
        JoinPosition::new(first, last, delimiter_first, delimiter_last),
        Terminal,
    )
}
