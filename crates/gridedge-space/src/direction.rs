//! The eight king-move directions.

use gridedge_core::KING_DEGREE;
use std::fmt;

/// A compass offset from a cell to one of its eight neighbours.
///
/// Variants are declared in edge-table order: a cell's block of records
/// lists its neighbours top-left first and bottom-right last. The
/// discriminant of each variant is its slot within that block.
///
/// # Examples
///
/// ```
/// use gridedge_space::Direction;
///
/// assert_eq!(Direction::ALL[0], Direction::TopLeft);
/// assert_eq!(Direction::Top.offset(), (-1, 0));
/// assert_eq!(Direction::TopRight.opposite(), Direction::BottomLeft);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    /// Row above, column to the left.
    TopLeft,
    /// Row above, same column.
    Top,
    /// Row above, column to the right.
    TopRight,
    /// Same row, column to the left.
    Left,
    /// Same row, column to the right.
    Right,
    /// Row below, column to the left.
    BottomLeft,
    /// Row below, same column.
    Bottom,
    /// Row below, column to the right.
    BottomRight,
}

impl Direction {
    /// Number of directions (and records per cell).
    pub const COUNT: usize = KING_DEGREE;

    /// All directions in edge-table order.
    pub const ALL: [Direction; KING_DEGREE] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// `(row, col)` offset of the neighbour in this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::TopLeft => (-1, -1),
            Self::Top => (-1, 0),
            Self::TopRight => (-1, 1),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::BottomLeft => (1, -1),
            Self::Bottom => (1, 0),
            Self::BottomRight => (1, 1),
        }
    }

    /// Position of this direction within a cell's block of records.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// The direction at `slot` within a cell's block, if `slot < 8`.
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    /// The direction pointing back at the source cell.
    ///
    /// The order of [`ALL`](Self::ALL) is point-symmetric, so the opposite
    /// of slot `k` is slot `7 - k`.
    pub const fn opposite(self) -> Self {
        Self::ALL[Self::COUNT - 1 - self.slot()]
    }

    /// Kebab-case name, e.g. `"bottom-left"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Left => "left",
            Self::Right => "right",
            Self::BottomLeft => "bottom-left",
            Self::Bottom => "bottom",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
