use cardsmith::cli;
use cardsmith::error::CardResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(about = "Turn a spreadsheet of student reviews into shareable PNG review cards.")]
#[command(long_about = "Cardsmith - Review card generator

Reads a workbook of student reviews (first sheet only) and exports one styled
PNG card per row, named <Name>_ReviewCard.png.

REQUIRED COLUMNS (exact, case-sensitive header names):
  Name, School, Class, Rating, Feedback, Image Link

COMMANDS:
  generate - Render every review row and export PNG cards
  check    - Validate a workbook without exporting

EXAMPLES:
  cardsmith check reviews.xlsx
  cardsmith generate reviews.xlsx -o cards/")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Render every review row and export PNG cards.

Each row becomes one card: profile image (or a gray placeholder when the
Image Link cell is empty), feedback text, a five-star rating indicator and
the student's name, school and class.

Cards are exported one at a time, in row order, at a fixed 400-unit width
rasterized at 2x. A row whose export fails is reported and the batch
continues with the next row.

EXAMPLES:
  cardsmith generate reviews.xlsx
  cardsmith generate reviews.xlsx -o cards/ --verbose")]
    /// Render every review row and export PNG cards
    Generate {
        /// Path to the review workbook (.xlsx, .xlsb, .xls or .ods)
        file: PathBuf,

        /// Directory the PNG files are written to
        #[arg(short, long, default_value = "cards")]
        out_dir: PathBuf,

        /// Show per-card progress
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Validate a workbook without exporting.

Loads the first sheet and reports the row count and which of the six
required columns are present. Exits non-zero when columns are missing.

EXAMPLES:
  cardsmith check reviews.xlsx
  cardsmith check reviews.xlsx --json")]
    /// Validate a workbook without exporting
    Check {
        /// Path to the review workbook (.xlsx, .xlsb, .xls or .ods)
        file: PathBuf,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> CardResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            file,
            out_dir,
            verbose,
        } => cli::generate(file, out_dir, verbose),

        Commands::Check { file, json } => cli::check(file, json),
    }
}
