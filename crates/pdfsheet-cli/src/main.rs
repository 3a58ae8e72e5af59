mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pdfsheet_core::extraction::plumber::{Strategy, TableSettings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfsheet",
    version,
    about = "Extract page text and tables from a PDF into an xlsx workbook"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text and tables from a PDF and write them to a workbook
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Workbook to write (overwritten if it exists)
        #[arg(short = 'o', long = "output", value_name = "FILE", default_value = pdfsheet_core::spreadsheet::DEFAULT_OUTPUT)]
        output_file: PathBuf,

        /// Summary format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,

        #[command(flatten)]
        detector: DetectorArgs,
    },
    /// Print the per-page text of a PDF without writing a workbook
    Text {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Print the tables detected in a PDF without writing a workbook
    Tables {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,

        #[command(flatten)]
        detector: DetectorArgs,
    },
    /// List the sheets and rows of an existing workbook
    Inspect {
        /// Path to the xlsx file
        workbook: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

/// Table detection knobs shared by `extract` and `tables`.
#[derive(Args)]
struct DetectorArgs {
    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
    strategy: TableStrategy,

    /// Snap tolerance for aligning nearby edges
    #[arg(long, default_value_t = 3.0)]
    snap_tolerance: f64,

    /// Join tolerance for merging collinear edges
    #[arg(long, default_value_t = 3.0)]
    join_tolerance: f64,

    /// Text tolerance for assigning words to cells
    #[arg(long, default_value_t = 3.0)]
    text_tolerance: f64,
}

/// Table detection strategy.
#[derive(Debug, Clone, ValueEnum)]
enum TableStrategy {
    /// Ruling lines and rect edges only (ignores spaced-out prose)
    Lattice,
    /// Word alignment, for tables drawn without lines
    Stream,
}

impl From<DetectorArgs> for TableSettings {
    fn from(args: DetectorArgs) -> Self {
        let strategy = match args.strategy {
            TableStrategy::Lattice => Strategy::Lattice,
            TableStrategy::Stream => Strategy::Stream,
        };

        TableSettings {
            strategy,
            snap_tolerance: args.snap_tolerance,
            snap_x_tolerance: args.snap_tolerance,
            snap_y_tolerance: args.snap_tolerance,
            join_tolerance: args.join_tolerance,
            join_x_tolerance: args.join_tolerance,
            join_y_tolerance: args.join_tolerance,
            text_tolerance: args.text_tolerance,
            text_x_tolerance: args.text_tolerance,
            text_y_tolerance: args.text_tolerance,
            ..TableSettings::default()
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output_file,
            format,
            detector,
        } => commands::extract::run(input_file, output_file, &format, detector.into()),
        Commands::Text { input_file, format } => commands::text::run(input_file, &format),
        Commands::Tables {
            input_file,
            format,
            detector,
        } => commands::tables::run(input_file, &format, detector.into()),
        Commands::Inspect { workbook, format } => commands::inspect::run(workbook, &format),
    };

    if let Err(e) = result {
        log::debug!("{e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
