//! Edge-list build configuration.

use std::fmt;

/// Numbering used for the `from` and `to` columns of an edge table.
///
/// Cells are numbered from zero internally. The caller-facing contract
/// is 1-based, so [`IndexBase::One`] is the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexBase {
    /// Cell `i` is labelled `i`.
    Zero,
    /// Cell `i` is labelled `i + 1`.
    One,
}

impl IndexBase {
    /// Amount added to a zero-based cell index on output.
    pub const fn offset(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Label of the zero-based cell `index`.
    pub const fn apply(self, index: usize) -> usize {
        index + self.offset()
    }

    /// Zero-based cell index of `label`, or `None` if `label` is below the
    /// base.
    pub const fn strip(self, label: usize) -> Option<usize> {
        label.checked_sub(self.offset())
    }
}

impl Default for IndexBase {
    fn default() -> Self {
        Self::One
    }
}

impl fmt::Display for IndexBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-based", self.offset())
    }
}

/// Options for [`build_edge_list_with`](crate::build_edge_list_with).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeListConfig {
    /// Numbering of the `from` and `to` columns. Default: [`IndexBase::One`].
    pub index_base: IndexBase,
}

impl Default for EdgeListConfig {
    fn default() -> Self {
        Self {
            index_base: IndexBase::One,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_based() {
        assert_eq!(EdgeListConfig::default().index_base, IndexBase::One);
        assert_eq!(IndexBase::default().offset(), 1);
    }

    #[test]
    fn apply_and_strip_invert() {
        for base in [IndexBase::Zero, IndexBase::One] {
            for i in [0usize, 1, 17] {
                assert_eq!(base.strip(base.apply(i)), Some(i));
            }
        }
        assert_eq!(IndexBase::One.strip(0), None);
    }

    #[test]
    fn display() {
        assert_eq!(IndexBase::Zero.to_string(), "0-based");
        assert_eq!(IndexBase::One.to_string(), "1-based");
    }
}
