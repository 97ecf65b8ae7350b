use crate::end_marker::EndMarker;
use crate::position::Position;
use crate::view::{IntoView, View};
use std::fmt;

/// Display adapter writing the elements of a view between delimiters
#[derive(Debug, Clone)]
pub struct Formatted<P, E, D> {
    view: View<P, E>,
    delimiter: D,
}

impl<P, E, D> fmt::Display for Formatted<P, E, D>
where
    P: Position,
    P::Item: fmt::Display,
    E: EndMarker<P>,
    D: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.view.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", self.delimiter)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Convenience function to display a view with `delimiter` between elements
pub fn format<V, D>(source: V, delimiter: D) -> Formatted<V::Position, V::End, D>
where
    V: IntoView,
    D: fmt::Display,
{
    Formatted {
        view: source.into_view(),
        delimiter,
    }
}
