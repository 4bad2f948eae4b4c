use clap::Parser;
use libro_report::{ReportConfig, ReportError, ReportGenerator, load_snapshot};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Generate the LibroRed admin report from a JSON export of the store.
#[derive(Parser, Debug)]
#[command(name = "libro-report", version, about)]
struct Cli {
    /// JSON file with `users`, `books` and `loans` arrays.
    data: PathBuf,

    /// Where to write the PDF. Defaults to the configured filename.
    output: Option<PathBuf>,

    /// JSON report configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the page plan instead of writing a PDF.
    #[arg(long)]
    dry_run: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), ReportError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &cli.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.filename));
    let generator = ReportGenerator::new(config)?;

    println!("Loading data from {}", cli.data.display());
    let snapshot = load_snapshot(&cli.data)?;

    if cli.dry_run {
        let layout = generator.plan(&snapshot)?;
        println!("{} pages", layout.page_count());
        for (page, counts) in layout.record_distribution().iter().enumerate() {
            println!(
                "  page {:>3}: {:>3} users, {:>3} books, {:>3} loans",
                page + 1,
                counts[0],
                counts[1],
                counts[2]
            );
        }
        return Ok(());
    }

    println!("Generating PDF to {}...", output.display());
    let writer = BufWriter::new(File::create(&output)?);
    generator.generate_into(&snapshot, writer)?;
    println!("Successfully generated {}", output.display());
    Ok(())
}
