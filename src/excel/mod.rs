//! Spreadsheet import
//!
//! Reads one worksheet of an Excel/ODS workbook into a [`CellGrid`](crate::types::CellGrid).
//! No header interpretation happens here; the grid mirrors the sheet from A1.

mod importer;

pub use importer::ExcelImporter;
