use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

//==============================================================================
// Cells
//==============================================================================

/// A single spreadsheet cell, reduced to the shapes the converter cares about
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Bool(bool),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Render the cell the way the sheet displays it (`12.0` → `"12"`)
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Number(n) => Some(n.to_string()),
            Cell::Text(s) => Some(s.clone()),
            Cell::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
            Cell::Missing => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

static MISSING: Cell = Cell::Missing;

/// Rectangular, row-major grid of cells addressed by 0-based (row, column)
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Grid of the given size with every cell missing
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Missing; height * width],
        }
    }

    /// Build a grid from ragged rows, padding short rows with missing cells
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(height * width);
        for mut row in rows {
            row.resize(width, Cell::Missing);
            cells.extend(row);
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = cell;
        }
    }

    /// Cell at (row, col); anything outside the grid reads as missing
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        if row < self.height && col < self.width {
            &self.cells[row * self.width + col]
        } else {
            &MISSING
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_missing)
    }

    /// Cells of one column, from `from_row` to the last row
    pub fn column(&self, col: usize, from_row: usize) -> impl Iterator<Item = &Cell> + '_ {
        (from_row..self.height).map(move |row| self.get(row, col))
    }
}

//==============================================================================
// Category ids
//==============================================================================

/// Normalized category id: the decimal string of a truncated integer
///
/// Ordering is numeric, so `"2"` sorts before `"10"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn sign_and_digits(&self) -> (bool, &str) {
        match self.0.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, self.0.as_str()),
        }
    }
}

impl From<i64> for CategoryId {
    fn from(n: i64) -> Self {
        CategoryId(n.to_string())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for CategoryId {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical integer strings: no leading zeros, no "-0"
        fn magnitude(a: &str, b: &str) -> Ordering {
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }

        match (self.sign_and_digits(), other.sign_and_digits()) {
            ((false, _), (true, _)) => Ordering::Greater,
            ((true, _), (false, _)) => Ordering::Less,
            ((false, a), (false, b)) => magnitude(a, b),
            ((true, a), (true, b)) => magnitude(b, a),
        }
    }
}

impl PartialOrd for CategoryId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Normalize a cell into a category id: parse as a float, truncate toward zero,
/// render as an integer string. Booleans count as 1 and 0. Missing, non-numeric
/// and non-finite cells yield `None`.
pub fn normalize_id(cell: &Cell) -> Option<CategoryId> {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        Cell::Bool(b) => f64::from(u8::from(*b)),
        Cell::Missing => return None,
    };

    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated == 0.0 {
        return Some(CategoryId("0".to_string()));
    }
    Some(CategoryId(format!("{:.0}", truncated)))
}

//==============================================================================
// Categories
//==============================================================================

/// One category of the lexicon; children are stored as id references
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub parent: Option<CategoryId>,
    pub children: Vec<CategoryId>,
}

impl Category {
    pub fn new(id: CategoryId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: Option<CategoryId>) -> Self {
        self.parent = parent;
        self
    }
}

/// Forest of categories keyed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTree {
    pub cats: HashMap<CategoryId, Category>,
    pub roots: Vec<CategoryId>,
}

impl CategoryTree {
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.cats.get(id)
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }
}

//==============================================================================
// Words
//==============================================================================

/// Word → distinct category ids, ids kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordIndex {
    words: BTreeMap<String, Vec<CategoryId>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` belongs to `id`; repeats of the same pair are ignored
    pub fn insert(&mut self, word: String, id: CategoryId) {
        let ids = self.words.entry(word).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    pub fn get(&self, word: &str) -> Option<&[CategoryId]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Words in ascending order with their category ids
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CategoryId])> {
        self.words
            .iter()
            .map(|(word, ids)| (word.as_str(), ids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
