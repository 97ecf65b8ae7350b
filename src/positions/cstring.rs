use crate::capability::ToCommon;
use crate::character::Character;
use crate::position::{Exhaustible, Homogeneous, Position};

/// Position over null-terminated character data
///
/// A cursor is exhausted once it sits on a NUL. The end of the backing slice
/// counts as an implicit terminator, so data without a NUL is still bounded.
/// `Terminator` stands for "wherever the terminator is" and is only ever
/// used as the end of a homogeneous view.
#[derive(Debug, Copy, Clone)]
pub enum CStrPosition<'a, C: Character> {
    At { data: &'a [C], index: usize },
    Terminator,
}

impl<'a, C: Character> CStrPosition<'a, C> {
    pub fn new(data: &'a [C], index: usize) -> Self {
        CStrPosition::At { data, index }
    }
}

/// Two cursors are equal when they share an index, so an explicit bound
/// past an embedded NUL is still reached by walking. `Terminator` equals
/// every exhausted cursor. This relation is therefore not transitive: two
/// exhausted cursors at different indices both equal `Terminator` but not
/// each other. Compare cursors with cursors, or cursors with `Terminator`.
impl<C: Character> PartialEq for CStrPosition<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CStrPosition::At { index: a, .. }, CStrPosition::At { index: b, .. }) => a == b,
            (position @ CStrPosition::At { .. }, CStrPosition::Terminator)
            | (CStrPosition::Terminator, position @ CStrPosition::At { .. }) => {
                position.is_exhausted()
            }
            (CStrPosition::Terminator, CStrPosition::Terminator) => true,
        }
    }
}

impl<C: Character> Position for CStrPosition<'_, C> {
    type Item = C;

    fn value(&self) -> C {
        match self {
            CStrPosition::At { data, index } => data[*index],
            CStrPosition::Terminator => panic!("cannot read the terminator of a C string"),
        }
    }

    fn next(self) -> Self {
        match self {
            CStrPosition::At { data, index } => CStrPosition::At {
                data,
                index: index + 1,
            },
            CStrPosition::Terminator => CStrPosition::Terminator,
        }
    }
}

impl<C: Character> Exhaustible for CStrPosition<'_, C> {
    fn is_exhausted(&self) -> bool {
        match self {
            CStrPosition::At { data, index } => data.get(*index).is_none_or(|c| c.is_nul()),
            CStrPosition::Terminator => true,
        }
    }

    fn remaining(&self) -> usize {
        match self {
            CStrPosition::At { data, index } => {
                let rest = data.get(*index..).unwrap_or_default();
                rest.iter().position(|c| c.is_nul()).unwrap_or(rest.len())
            }
            CStrPosition::Terminator => 0,
        }
    }
}

/// No cursor lies after `Terminator`, so counting from it yields zero.
impl<C: Character> Homogeneous for CStrPosition<'_, C> {
    fn steps_to(&self, end: &Self) -> usize {
        match (self, end) {
            (CStrPosition::At { index: a, .. }, CStrPosition::At { index: b, .. }) => b - a,
            (_, CStrPosition::Terminator) => self.remaining(),
            (CStrPosition::Terminator, CStrPosition::At { .. }) => 0,
        }
    }
}

impl<C: Character> ToCommon for CStrPosition<'_, C> {
    type Common = Self;

    fn to_common(&self) -> (Self, Self) {
        (*self, CStrPosition::Terminator)
    }
}
