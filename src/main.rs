use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xlsx2dic::cli::{self, ConvertOptions, USAGE};
use xlsx2dic::DicError;

#[derive(Parser, Debug)]
#[command(name = "xlsx2dic")]
#[command(version)]
#[command(about = "Convert a spreadsheet lexicon into a LIWC .dic dictionary")]
#[command(long_about = "xlsx2dic - spreadsheet lexicon to LIWC dictionary

SHEET LAYOUT (first sheet, column A holds row labels):
  row 1   word counts (ignored)
  row 2   parent category id (empty or own id = top level)
  row 3   category id
  row 4   category short name
  row 5   category description
  row 6+  words belonging to the column's category

OUTPUT:
  %
  1\tPosemo (Positive Emotion)
      2\tNegemo (Negative Emotion)
  %
  glad\t1
  sad\t2

EXAMPLES:
  xlsx2dic lexicon.xlsx                 # writes lexicon.dic
  xlsx2dic lexicon.xlsx out/custom.dic
  xlsx2dic lexicon.xlsx -n -v           # build and report, write nothing

Set RUST_LOG=xlsx2dic=debug for detailed logs.")]
struct Cli {
    /// Spreadsheet with the lexicon (.xlsx, .xlsm, .xlsb, .xls, .ods)
    input: PathBuf,

    /// Output dictionary path (default: input path with a .dic extension)
    output: Option<PathBuf>,

    /// Worksheet to read instead of the first one
    #[arg(short, long, env = "XLSX2DIC_SHEET")]
    sheet: Option<String>,

    /// Build the dictionary without writing the output file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show verbose output and debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Print nothing on success
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", DicError::Usage(USAGE.to_string()));
            return ExitCode::from(1);
        }
    };

    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "❌ Error:".bold().red(), e);
            ExitCode::from(1)
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let options = ConvertOptions {
        input: args.input,
        output: args.output,
        sheet: args.sheet,
        dry_run: args.dry_run,
    };

    let summary = cli::convert(&options)
        .with_context(|| format!("conversion of {} failed", options.input.display()))?;

    if !args.quiet {
        cli::print_summary(&options, &summary, args.verbose);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "xlsx2dic=debug" } else { "xlsx2dic=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
