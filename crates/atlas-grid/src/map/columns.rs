//! Column lettering and grid cell addresses.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of letters available for column names.
pub const MAX_COLUMNS: usize = 26;

/// Column lettering for a grid of a given width.
///
/// Built once from the column count and never modified: index 0 is `A`,
/// index 1 is `B`, and so on up to the configured width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    letters: Box<[char]>,
}

impl ColumnTable {
    /// Creates the table for `columns` columns, capped at 26.
    pub fn new(columns: usize) -> Self {
        let letters = ('A'..='Z').take(columns.min(MAX_COLUMNS)).collect();
        Self { letters }
    }

    /// Number of lettered columns.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter for a column index, or `None` when the index is negative or
    /// past the last column.
    pub fn letter(&self, index: i64) -> Option<char> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.letters.get(i).copied())
    }

    /// Column index of `letter`, matched case-insensitively.
    pub fn index_of(&self, letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        self.letters.iter().position(|&c| c == upper)
    }
}

/// An on-grid server cell, such as `C4`.
///
/// Only produced by lookups that have already checked the column and row
/// against the grid, so holding one means the cell exists. Serialize-only
/// for the same reason.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridAddress {
    column: char,
    column_index: usize,
    row: u32,
}

impl GridAddress {
    pub(crate) fn new(column: char, column_index: usize, row: u32) -> Self {
        Self {
            column,
            column_index,
            row,
        }
    }

    /// Column letter, always uppercase.
    pub fn column(&self) -> char {
        self.column
    }

    /// Zero-based column index.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// One-based row number.
    pub fn row(&self) -> u32 {
        self.row
    }
}

impl fmt::Display for GridAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}
