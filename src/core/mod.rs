//! Core conversion: category tree, word extraction and aggregation
//!
//! All three steps read the same [`CellGrid`](crate::types::CellGrid) through a
//! [`SheetLayout`] that names the fixed metadata rows.

pub mod category_tree;
pub mod layout;
pub mod words;

pub use category_tree::build_category_tree;
pub use layout::SheetLayout;
pub use words::{aggregate_words, extract_word_pairs};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::{Cell, CellGrid};

    /// One lexicon column: parent, id, name, description, then words
    pub(crate) struct Column {
        pub parent: Cell,
        pub id: Cell,
        pub name: Cell,
        pub description: Cell,
        pub words: Vec<Cell>,
    }

    impl Column {
        pub(crate) fn new(id: f64, name: &str, description: &str) -> Self {
            Self {
                parent: Cell::Missing,
                id: Cell::Number(id),
                name: Cell::from(name),
                description: Cell::from(description),
                words: Vec::new(),
            }
        }

        pub(crate) fn parent(mut self, parent: impl Into<Cell>) -> Self {
            self.parent = parent.into();
            self
        }

        pub(crate) fn words(mut self, words: &[&str]) -> Self {
            self.words = words.iter().map(|w| Cell::from(*w)).collect();
            self
        }
    }

    /// Lay the columns out in the fixed sheet shape, labels in column 0
    pub(crate) fn lexicon_grid(columns: Vec<Column>) -> CellGrid {
        let depth = columns.iter().map(|c| c.words.len()).max().unwrap_or(0);
        let mut rows: Vec<Vec<Cell>> = vec![
            vec![Cell::from("count")],
            vec![Cell::from("parent")],
            vec![Cell::from("id")],
            vec![Cell::from("name")],
            vec![Cell::from("description")],
        ];
        rows.extend((0..depth).map(|_| vec![Cell::Missing]));

        for column in columns {
            rows[0].push(Cell::Number(column.words.len() as f64));
            rows[1].push(column.parent);
            rows[2].push(column.id);
            rows[3].push(column.name);
            rows[4].push(column.description);
            for row in 0..depth {
                let word = column.words.get(row).cloned().unwrap_or(Cell::Missing);
                rows[5 + row].push(word);
            }
        }
        CellGrid::from_rows(rows)
    }
}
