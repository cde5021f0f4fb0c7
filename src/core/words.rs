//! Word extraction and aggregation

use super::SheetLayout;
use crate::types::{normalize_id, CategoryId, CellGrid, WordIndex};
use tracing::debug;

/// Collect (word, category id) pairs from the word rows, column by column
///
/// A column takes part when its id cell normalizes; its name is not checked.
/// Cell text is trimmed and blank results are dropped.
pub fn extract_word_pairs(grid: &CellGrid, layout: &SheetLayout) -> Vec<(String, CategoryId)> {
    let mut pairs = Vec::new();

    for col in layout.data_columns(grid) {
        let Some(id) = normalize_id(grid.get(layout.id_row, col)) else {
            continue;
        };

        for cell in grid.column(col, layout.first_word_row) {
            let Some(text) = cell.as_text() else {
                continue;
            };
            let word = text.trim();
            if !word.is_empty() {
                pairs.push((word.to_string(), id.clone()));
            }
        }
    }

    debug!(pairs = pairs.len(), "extracted word pairs");
    pairs
}

/// Invert pairs into word → distinct category ids
pub fn aggregate_words<I>(pairs: I) -> WordIndex
where
    I: IntoIterator<Item = (String, CategoryId)>,
{
    let mut index = WordIndex::new();
    for (word, id) in pairs {
        index.insert(word, id);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{lexicon_grid, Column};
    use crate::types::Cell;

    fn id(n: i64) -> CategoryId {
        CategoryId::from(n)
    }

    fn pair(word: &str, n: i64) -> (String, CategoryId) {
        (word.to_string(), id(n))
    }

    #[test]
    fn test_pairs_are_column_major() {
        let grid = lexicon_grid(vec![
            Column::new(1.0, "Posemo", "").words(&["happy", "glad"]),
            Column::new(2.0, "Negemo", "").words(&["sad"]),
        ]);
        let pairs = extract_word_pairs(&grid, &SheetLayout::default());
        assert_eq!(pairs, vec![pair("happy", 1), pair("glad", 1), pair("sad", 2)]);
    }

    #[test]
    fn test_blank_cells_are_dropped_and_words_trimmed() {
        let grid = lexicon_grid(vec![
            Column::new(1.0, "a", "").words(&["", "   ", " joy ", "\tcalm\n"]),
        ]);
        let pairs = extract_word_pairs(&grid, &SheetLayout::default());
        assert_eq!(pairs, vec![pair("joy", 1), pair("calm", 1)]);
    }

    #[test]
    fn test_numeric_word_cells_render_without_fraction() {
        let mut column = Column::new(5.0, "num", "");
        column.words = vec![Cell::Number(911.0), Cell::Number(2.5)];
        let grid = lexicon_grid(vec![column]);
        let pairs = extract_word_pairs(&grid, &SheetLayout::default());
        assert_eq!(pairs, vec![pair("911", 5), pair("2.5", 5)]);
    }

    #[test]
    fn test_column_with_invalid_id_contributes_nothing() {
        let mut column = Column::new(0.0, "bad", "").words(&["lost"]);
        column.id = Cell::from("n/a");
        let grid = lexicon_grid(vec![column, Column::new(3.0, "ok", "").words(&["kept"])]);
        let pairs = extract_word_pairs(&grid, &SheetLayout::default());
        assert_eq!(pairs, vec![pair("kept", 3)]);
    }

    #[test]
    fn test_column_without_name_still_contributes_words() {
        let mut column = Column::new(8.0, "", "").words(&["stray"]);
        column.name = Cell::Missing;
        let grid = lexicon_grid(vec![column]);
        let pairs = extract_word_pairs(&grid, &SheetLayout::default());
        assert_eq!(pairs, vec![pair("stray", 8)]);
    }

    #[test]
    fn test_aggregate_dedupes_repeated_category() {
        let index = aggregate_words(vec![
            pair("happy", 1),
            pair("happy", 1),
            pair("happy", 10),
            pair("happy", 2),
        ]);
        assert_eq!(index.get("happy").unwrap(), &[id(1), id(10), id(2)]);
    }

    #[test]
    fn test_aggregate_iterates_words_in_order() {
        let index = aggregate_words(vec![pair("dog", 1), pair("cat", 1), pair("ant", 1)]);
        let words: Vec<&str> = index.iter().map(|(word, _)| word).collect();
        assert_eq!(words, vec!["ant", "cat", "dog"]);
    }

    #[test]
    fn test_aggregate_keeps_case_distinct() {
        let index = aggregate_words(vec![pair("Happy", 1), pair("happy", 1)]);
        assert_eq!(index.len(), 2);
    }
}
