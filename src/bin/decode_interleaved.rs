//! Decode a column-major-interleaved hex symbol file back into bytes.
//!
//! Usage: `decode-interleaved [--on-error=abort|zero-fill] <words> <input> <output>`
//!
//! `<words>` is the number of code words M the stream was interleaved across
//! (the encoder side must communicate this out of band; the interleaved wire
//! format carries no self-describing word count).

use std::fs;
use std::process::ExitCode;

use rscodec::driver::{self, RecoveryPolicy, WordOutcome};

fn parse_policy(args: &[String]) -> RecoveryPolicy {
    for a in args {
        if let Some(v) = a.strip_prefix("--on-error=") {
            return match v {
                "zero-fill" => RecoveryPolicy::SubstituteZero,
                _ => RecoveryPolicy::Abort,
            };
        }
    }
    RecoveryPolicy::Abort
}

fn run() -> Result<(), rscodec::CodecError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let policy = parse_policy(&args);
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    if positional.len() != 3 {
        eprintln!("usage: decode-interleaved [--on-error=abort|zero-fill] <words> <input> <output>");
        std::process::exit(2);
    }

    let m: usize = positional[0].parse().unwrap_or_else(|_| {
        eprintln!("decode-interleaved: <words> must be a positive integer");
        std::process::exit(2);
    });

    let text = fs::read_to_string(positional[1])?;
    let symbols = driver::parse_symbols(&text)?;
    let report = driver::decode_interleaved(&symbols, m, policy)?;

    fs::write(positional[2], &report.bytes)?;

    let corrected = report
        .words
        .iter()
        .filter(|w| matches!(w, WordOutcome::Corrected(_)))
        .count();
    let substituted = report
        .words
        .iter()
        .filter(|w| matches!(w, WordOutcome::Substituted))
        .count();

    println!(
        "decoded {} interleaved code words into {} bytes ({} corrected, {} substituted)",
        report.words.len(),
        report.bytes.len(),
        corrected,
        substituted
    );

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("decode-interleaved: {e}");
            ExitCode::FAILURE
        }
    }
}
