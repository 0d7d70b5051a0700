//! Edge records and the columnar view of a table.

/// One row of an edge table.
///
/// `to` and `weight` are both `None` when the direction leaves the grid,
/// and both `Some` otherwise. A present `weight` is the value of the `to`
/// cell, which may itself be `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    /// Label of the source cell.
    pub from: usize,
    /// Label of the neighbouring cell, if the direction stays in the grid.
    pub to: Option<usize>,
    /// Value of the neighbouring cell, if it exists.
    pub weight: Option<f64>,
}

impl EdgeRecord {
    /// Whether the record names a real neighbour.
    pub fn is_present(&self) -> bool {
        self.to.is_some()
    }
}

/// The three columns of an edge table, in contract order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeColumns {
    /// Source cell labels.
    pub from: Vec<usize>,
    /// Neighbour cell labels.
    pub to: Vec<Option<usize>>,
    /// Neighbour values.
    pub weight: Vec<Option<f64>>,
}

impl EdgeColumns {
    /// Column names in contract order.
    pub const NAMES: [&'static str; 3] = ["from", "to", "weight"];

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.from.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }
}

impl FromIterator<EdgeRecord> for EdgeColumns {
    fn from_iter<I: IntoIterator<Item = EdgeRecord>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut cols = Self {
            from: Vec::with_capacity(lower),
            to: Vec::with_capacity(lower),
            weight: Vec::with_capacity(lower),
        };
        for rec in iter {
            cols.from.push(rec.from);
            cols.to.push(rec.to);
            cols.weight.push(rec.weight);
        }
        cols
    }
}
