//! Excel importer implementation - workbook → CellGrid

use crate::error::{DicError, DicResult};
use crate::types::{Cell, CellGrid};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Serial numbers past 9999-12-31 are not dates Excel can show
const MAX_EXCEL_SERIAL: f64 = 2_958_466.0;

/// Loads a single worksheet into a cell grid
pub struct ExcelImporter {
    path: PathBuf,
    sheet: Option<String>,
}

impl ExcelImporter {
    /// Create a new importer reading the first sheet of `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: None,
        }
    }

    /// Read the named sheet instead of the first one
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Open the workbook and convert the selected sheet
    pub fn import(&self) -> DicResult<CellGrid> {
        let mut workbook = open_workbook_auto(&self.path)
            .map_err(|e| DicError::load(&self.path, format!("cannot open workbook: {}", e)))?;

        let range = match &self.sheet {
            Some(name) => workbook.worksheet_range(name).map_err(|e| {
                DicError::load(&self.path, format!("cannot read sheet '{}': {}", name, e))
            })?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| DicError::load(&self.path, "workbook has no sheets"))?
                .map_err(|e| DicError::load(&self.path, format!("cannot read first sheet: {}", e)))?,
        };

        let grid = grid_from_range(&range);
        debug!(
            path = %self.path.display(),
            rows = grid.height(),
            cols = grid.width(),
            "loaded sheet"
        );
        if grid.is_empty() {
            warn!(path = %self.path.display(), "sheet has no cells");
        }
        Ok(grid)
    }
}

/// Convert a calamine range into a grid anchored at A1
///
/// calamine trims leading blank rows/columns from the range; positions here
/// stay absolute so the fixed metadata rows line up with the sheet.
fn grid_from_range(range: &Range<Data>) -> CellGrid {
    let (Some((row0, col0)), Some((row_end, col_end))) = (range.start(), range.end()) else {
        return CellGrid::new(0, 0);
    };

    let mut grid = CellGrid::new(row_end as usize + 1, col_end as usize + 1);
    for (row, col, data) in range.used_cells() {
        grid.set(row0 as usize + row, col0 as usize + col, cell_from_data(data));
    }
    grid
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::String(s) if s.is_empty() => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match excel_datetime_text(dt.as_f64()) {
            Some(text) => Cell::Text(text),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        _ => Cell::Missing,
    }
}

/// Render an Excel (1900 system) serial as `YYYY-MM-DD HH:MM:SS`, or
/// `HH:MM:SS` for a pure time of day
fn excel_datetime_text(serial: f64) -> Option<String> {
    if !serial.is_finite() || !(0.0..MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }

    // Serials 1-60 sit before Excel's phantom 1900-02-29
    let epoch = if serial < 61.0 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let seconds = (serial * 86_400.0).round() as i64;
    let moment: NaiveDateTime = epoch
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::try_seconds(seconds)?)?;

    if serial < 1.0 {
        Some(moment.format("%H:%M:%S").to_string())
    } else {
        Some(moment.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}
