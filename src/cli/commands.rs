use crate::core::{aggregate_words, build_category_tree, extract_word_pairs, SheetLayout};
use crate::error::DicResult;
use crate::excel::ExcelImporter;
use crate::writer;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for one spreadsheet → dictionary conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub input: PathBuf,
    /// Defaults to the input path with a `.dic` extension
    pub output: Option<PathBuf>,
    /// Defaults to the first sheet
    pub sheet: Option<String>,
    /// Build everything but do not write the output file
    pub dry_run: bool,
}

impl ConvertOptions {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// What a conversion produced
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub categories: usize,
    pub roots: usize,
    /// Categories left out of the table because of a parent cycle
    pub unreachable: usize,
    pub pairs: usize,
    pub words: usize,
    /// `None` on a dry run
    pub bytes: Option<usize>,
}

/// `lexicon.xlsx` → `lexicon.dic`; a path without extension gets `.dic` appended
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("dic")
}

/// Run the whole pipeline: load, build the tree, collect words, write
pub fn convert(options: &ConvertOptions) -> DicResult<ConversionSummary> {
    let output = options.output_path();
    let layout = SheetLayout::default();

    let grid = ExcelImporter::new(&options.input)
        .with_sheet(options.sheet.clone())
        .import()?;

    let tree = build_category_tree(&grid, &layout);
    let pairs = extract_word_pairs(&grid, &layout);
    let pair_count = pairs.len();
    let words = aggregate_words(pairs);

    let bytes = if options.dry_run {
        info!(path = %output.display(), "dry run, not writing");
        None
    } else {
        Some(writer::save_dictionary(&output, &tree, &words)?)
    };

    Ok(ConversionSummary {
        output,
        categories: tree.len(),
        roots: tree.roots.len(),
        unreachable: tree.unreachable().len(),
        pairs: pair_count,
        words: words.len(),
        bytes,
    })
}

/// Print the conversion result for a terminal
pub fn print_summary(options: &ConvertOptions, summary: &ConversionSummary, verbose: bool) {
    println!("{}", "📖 xlsx2dic - LIWC dictionary export".bold().green());
    println!("   Input:  {}", options.input.display());
    println!("   Output: {}", summary.output.display());

    if verbose {
        println!(
            "   {} categories ({} top-level), {} word/category pairs",
            summary.categories, summary.roots, summary.pairs
        );
    }
    if summary.unreachable > 0 {
        println!(
            "   {}",
            format!(
                "⚠️  {} categories in a parent cycle were left out of the category table",
                summary.unreachable
            )
            .yellow()
        );
    }

    match summary.bytes {
        Some(bytes) => println!(
            "{} {} categories, {} words ({} bytes)",
            "✅".green(),
            summary.categories,
            summary.words,
            bytes
        ),
        None => println!(
            "{}",
            format!(
                "📋 DRY RUN - {} categories, {} words, nothing written",
                summary.categories, summary.words
            )
            .yellow()
        ),
    }
}
