//! Cell symbols handed to the presentation layer.

use crate::common::{Orientation, Segment};
use crate::config::DEFAULT_FREE_SYMBOL;

/// The symbol alphabet a grid is rendered with.
///
/// Passed explicitly to whatever needs it rather than living in a global table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolSet {
    pub free: char,
    pub buffer: char,
    pub single: char,
    pub horizontal_bow: char,
    pub horizontal_hull: char,
    pub vertical_bow: char,
    pub vertical_hull: char,
}

impl SymbolSet {
    /// Default symbols with a custom free-cell symbol.
    pub const fn with_free(free: char) -> Self {
        Self {
            free,
            buffer: '\u{2022}',
            single: '\u{25C6}',
            horizontal_bow: '\u{25C0}',
            horizontal_hull: '\u{25A4}',
            vertical_bow: '\u{25B2}',
            vertical_hull: '\u{25A5}',
        }
    }

    /// Symbol for one ship segment.
    pub fn segment(&self, segment: Segment) -> char {
        match segment {
            Segment::Single
            | Segment::Bow(Orientation::Single)
            | Segment::Hull(Orientation::Single) => self.single,
            Segment::Bow(Orientation::Horizontal) => self.horizontal_bow,
            Segment::Hull(Orientation::Horizontal) => self.horizontal_hull,
            Segment::Bow(Orientation::Vertical) => self.vertical_bow,
            Segment::Hull(Orientation::Vertical) => self.vertical_hull,
        }
    }

    /// Returns `true` if `symbol` marks part of a ship.
    pub fn is_ship(&self, symbol: char) -> bool {
        [
            self.single,
            self.horizontal_bow,
            self.horizontal_hull,
            self.vertical_bow,
            self.vertical_hull,
        ]
        .contains(&symbol)
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::with_free(DEFAULT_FREE_SYMBOL)
    }
}
