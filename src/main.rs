//! Sectionmap CLI - convert the journal section mapping CSV to JSON
//!
//! ```bash
//! sectionmap            # public/journals/mapping.csv -> mapping.json
//! sectionmap --strict   # same, but exit non-zero when the conversion fails
//! ```
//!
//! Runs as a build-time step of the journal site; the two paths are fixed
//! and no environment variables are consulted. Without `--strict` the
//! process always exits 0, success or failure, to match the historical
//! behavior build scripts rely on.

use clap::Parser;
use sectionmap::{convert_file, Conversion};
use std::path::Path;
use std::process::ExitCode;

/// Mapping export maintained alongside the volume PDFs.
const MAPPING_CSV: &str = "public/journals/mapping.csv";

/// Index consumed by the publication reader.
const MAPPING_JSON: &str = "public/journals/mapping.json";

#[derive(Parser)]
#[command(name = "sectionmap")]
#[command(about = "Convert the journal section mapping CSV into the JSON index", long_about = None)]
struct Cli {
    /// Exit with a distinct non-zero code per failure kind
    /// (2 not found, 3 missing column, 4 bad value, 1 other)
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match convert_file(Path::new(MAPPING_CSV), Path::new(MAPPING_JSON)) {
        Ok(conversion) => {
            print_success(&conversion);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("❌ Error: {}", e);
            if cli.strict {
                ExitCode::from(e.exit_code())
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn print_success(conversion: &Conversion) {
    let info = &conversion.csv_info;

    println!("📄 Source: {}", MAPPING_CSV);
    println!("   Encoding: {}", info.encoding);
    println!("   Delimiter: '{}'", format_delimiter(info.delimiter));
    println!("   Columns: {}", info.headers.join(", "));
    println!("✅ Converted {} sections", conversion.map.len());
    println!("💾 Output written to: {}", MAPPING_JSON);
    println!();
    println!("Generated JSON:");
    println!("{}", conversion.document);
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
