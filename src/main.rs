use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use exifdate::{BatchReport, ExtractOptions, TagScope, extract_batch};

#[derive(Parser)]
#[command(name = "exifdate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the capture date stored in the Exif metadata of JPEG photos")]
struct Cli {
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print a JSON report instead of one line per file
    #[arg(long)]
    json: bool,

    /// Also look for DateTimeOriginal/DateTimeDigitized in the Exif sub-IFD
    #[arg(long)]
    sub_ifd: bool,

    /// Number of leading bytes read from each file
    #[arg(long, value_name = "BYTES")]
    read_limit: Option<usize>,

    /// JSON file with extraction options; flags override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = load_options(&cli)?;
    let report = BatchReport::new(extract_batch(&cli.files, &options));

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{json}");
    } else {
        for item in &report.items {
            match item.date {
                Some(date) => println!("{}\t{}", item.path.display(), date),
                None => println!("{}\t-", item.path.display()),
            }
        }
        eprintln!(
            "{} files: {} dated, {} undated, {} unreadable",
            report.summary.total(),
            report.summary.dated,
            report.summary.undated,
            report.summary.unreadable
        );
    }

    if report.summary.unreadable == report.summary.total() {
        bail!("none of the {} files could be read", report.summary.total());
    }

    Ok(())
}

fn load_options(cli: &Cli) -> Result<ExtractOptions> {
    let mut options = match &cli.config {
        Some(path) => ExtractOptions::from_json_file(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => ExtractOptions::default(),
    };

    if cli.sub_ifd {
        options = options.with_scope(TagScope::WithExifSubIfd);
    }
    if let Some(limit) = cli.read_limit {
        options = options.with_read_limit(limit);
    }

    Ok(options)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
