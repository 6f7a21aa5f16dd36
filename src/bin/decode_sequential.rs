//! Decode a non-interleaved hex symbol file back into bytes.
//!
//! Usage: `decode-sequential <input> <output>`
//!
//! Unlike `decode-interleaved`, this driver always aborts the whole stream on
//! the first `Uncorrectable` code word; there is no zero-fill recovery policy
//! here.

use std::fs;
use std::process::ExitCode;

use rscodec::driver::{self, RecoveryPolicy, WordOutcome};

fn run() -> Result<(), rscodec::CodecError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() != 2 {
        eprintln!("usage: decode-sequential <input> <output>");
        std::process::exit(2);
    }

    let text = fs::read_to_string(&args[0])?;
    let symbols = driver::parse_symbols(&text)?;
    let report = driver::decode_sequential(&symbols, RecoveryPolicy::Abort)?;

    fs::write(&args[1], &report.bytes)?;

    let corrected = report
        .words
        .iter()
        .filter(|w| matches!(w, WordOutcome::Corrected(_)))
        .count();

    println!(
        "decoded {} code words into {} bytes ({} corrected)",
        report.words.len(),
        report.bytes.len(),
        corrected
    );

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("decode-sequential: {e}");
            ExitCode::FAILURE
        }
    }
}
