//! Encode a file into RS(15, 9) code words, written as hex symbols into a
//! sequential protected stream (`A2.txt`) and a column-major-interleaved
//! stream (`A3.txt`) side by side, both derived from the same code words.
//!
//! Usage: `encode <input> [output-dir]`

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use rscodec::driver;

fn run() -> Result<(), rscodec::CodecError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.len() > 2 {
        eprintln!("usage: encode <input> [output-dir]");
        std::process::exit(2);
    }

    let out_dir = args.get(1).map(String::as_str).unwrap_or(".");
    let a2_path = Path::new(out_dir).join("A2.txt");
    let a3_path = Path::new(out_dir).join("A3.txt");

    let bytes = fs::read(&args[0])?;
    let sequential = driver::encode_bytes(&bytes)?;
    let interleaved = driver::encode_bytes_interleaved(&bytes)?;

    fs::write(&a2_path, driver::format_symbols(&sequential))?;
    fs::write(&a3_path, driver::format_symbols(&interleaved))?;

    println!(
        "encoded {} bytes into {} code words; wrote {} and {}",
        bytes.len(),
        sequential.len() / rscodec::encoder::N,
        a2_path.display(),
        a3_path.display()
    );

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("encode: {e}");
            ExitCode::FAILURE
        }
    }
}
