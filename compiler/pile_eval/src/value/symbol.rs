use std::fmt;

use pile_ir::Position;

use super::Heap;

/// An identifier, optionally tagged with where it appeared in source.
///
/// Two symbols are equal when their ids are equal; the position is only
/// carried for diagnostics.
#[derive(Clone, Debug)]
pub struct Symbol {
    id: Heap<String>,
    position: Option<Position>,
}

impl Symbol {
    pub fn new(id: impl Into<String>) -> Self {
        Symbol {
            id: Heap::new(id.into()),
            position: None,
        }
    }

    pub fn with_position(id: impl Into<String>, position: Position) -> Self {
        Symbol {
            id: Heap::new(id.into()),
            position: Some(position),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
