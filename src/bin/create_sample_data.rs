use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use transaction_dashboard::{sample_records, write_records};

/// A utility for writing the built-in sample records to a data file for the
/// transaction dashboard server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the records to, ending in `.json` or `.csv`.
    #[arg(long, short)]
    output_path: String,
}

/// Write the sample records for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let records = sample_records();

    println!("Writing {} records to {output_path:#?}", records.len());
    write_records(&records, output_path)?;

    println!("Success!");

    Ok(())
}
