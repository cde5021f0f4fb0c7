use crate::types::CellGrid;
use std::ops::Range;

/// Fixed positions of the lexicon sheet
///
/// Row 0 carries word counts and is not read. Column 0 holds row labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub parent_row: usize,
    pub id_row: usize,
    pub name_row: usize,
    pub description_row: usize,
    pub first_word_row: usize,
    pub first_data_col: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            parent_row: 1,
            id_row: 2,
            name_row: 3,
            description_row: 4,
            first_word_row: 5,
            first_data_col: 1,
        }
    }
}

impl SheetLayout {
    /// Columns that may describe a category
    pub fn data_columns(&self, grid: &CellGrid) -> Range<usize> {
        self.first_data_col..grid.width().max(self.first_data_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_data_columns_skip_label_column() {
        let grid = CellGrid::from_rows(vec![vec![Cell::from("label"), Cell::Missing, Cell::Missing]]);
        assert_eq!(SheetLayout::default().data_columns(&grid), 1..3);
    }

    #[test]
    fn test_data_columns_on_narrow_grid() {
        let grid = CellGrid::from_rows(vec![vec![Cell::from("label")]]);
        assert!(SheetLayout::default().data_columns(&grid).is_empty());
        assert!(SheetLayout::default().data_columns(&CellGrid::new(0, 0)).is_empty());
    }
}
