//! xlsx2dic - spreadsheet lexicon to LIWC dictionary
//!
//! Reads a lexicon sheet (category metadata in fixed rows, one word list per
//! category column) and writes the `%`-delimited LIWC `.dic` format.
//!
//! # Example
//!
//! ```no_run
//! use xlsx2dic::core::{aggregate_words, build_category_tree, extract_word_pairs, SheetLayout};
//! use xlsx2dic::excel::ExcelImporter;
//! use xlsx2dic::writer::save_dictionary;
//! use std::path::Path;
//!
//! let grid = ExcelImporter::new("lexicon.xlsx").import()?;
//! let layout = SheetLayout::default();
//!
//! let tree = build_category_tree(&grid, &layout);
//! let words = aggregate_words(extract_word_pairs(&grid, &layout));
//!
//! save_dictionary(Path::new("lexicon.dic"), &tree, &words)?;
//! # Ok::<(), xlsx2dic::error::DicError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{DicError, DicResult};
pub use types::{normalize_id, Category, CategoryId, CategoryTree, Cell, CellGrid, WordIndex};
