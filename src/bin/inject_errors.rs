//! Corrupt a hex symbol file for testing: flip symbols to random nonzero
//! magnitudes, either at chosen positions or at random positions under a
//! per-word budget.
//!
//! Usage:
//!   `inject-errors [--count=N] <input> <output>`
//!   `inject-errors --positions=<word>:<pos>[,<word>:<pos>...] <input> <output>`
//!
//! Random mode defaults to 3 errors per word, the decoder's correction
//! budget, and is clamped there: it can never push a word past what the
//! decoder can fix. Chosen-positions mode corrupts exactly the named
//! `(word, position)` pairs; if more than 3 land in the same word it warns,
//! since that word will then be uncorrectable.

use std::fs;
use std::process::ExitCode;

use rscodec::decoder::T;
use rscodec::driver;
use rscodec::encoder::N;

fn parse_positions(spec: &str) -> Vec<(usize, usize)> {
    spec.split(',')
        .map(|pair| {
            let (w, p) = pair.split_once(':').unwrap_or_else(|| {
                eprintln!(
                    "inject-errors: --positions entries must be <word>:<pos>, got {pair:?}"
                );
                std::process::exit(2);
            });
            let parse = |s: &str| {
                s.parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("inject-errors: --positions entries must be integers, got {s:?}");
                    std::process::exit(2);
                })
            };
            (parse(w), parse(p))
        })
        .collect()
}

fn run() -> Result<(), rscodec::CodecError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut count = T;
    let mut positions: Option<Vec<(usize, usize)>> = None;
    for a in &args {
        if let Some(v) = a.strip_prefix("--count=") {
            count = v.parse().unwrap_or_else(|_| {
                eprintln!("inject-errors: --count must be a non-negative integer");
                std::process::exit(2);
            });
        } else if let Some(v) = a.strip_prefix("--positions=") {
            positions = Some(parse_positions(v));
        }
    }

    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    if positional.len() != 2 {
        eprintln!(
            "usage: inject-errors [--count=N | --positions=<word>:<pos>,...] <input> <output>"
        );
        std::process::exit(2);
    }

    let text = fs::read_to_string(positional[0])?;
    let symbols = driver::parse_symbols(&text)?;

    if symbols.len() % N != 0 {
        return Err(rscodec::CodecError::InvalidLength(format!(
            "stream length {} is not a multiple of the {}-symbol code word size",
            symbols.len(),
            N
        )));
    }

    let mut matrix: Vec<Vec<rscodec::Symbol>> = symbols.chunks(N).map(|c| c.to_vec()).collect();
    let mut rng = rand::thread_rng();

    let total = match &positions {
        Some(chosen) => {
            let mut per_word = vec![0usize; matrix.len()];
            for &(w, _) in chosen {
                if let Some(c) = per_word.get_mut(w) {
                    *c += 1;
                }
            }
            if per_word.iter().any(|&c| c > T) {
                eprintln!(
                    "inject-errors: warning: some word has more than {T} chosen errors; \
                     every such word will become uncorrectable"
                );
            }
            driver::inject_errors_at(&mut matrix, chosen, &mut rng)
        }
        None => {
            if count > T {
                eprintln!(
                    "inject-errors: warning: {count} errors per word exceeds the correction \
                     budget of {T}; clamping to {T} so every word stays within the code's \
                     correction capacity"
                );
            }
            driver::inject_errors(&mut matrix, count, &mut rng)
        }
    };

    let flat: Vec<rscodec::Symbol> = matrix.into_iter().flatten().collect();
    fs::write(positional[1], driver::format_symbols(&flat))?;

    match &positions {
        Some(chosen) => println!(
            "injected {} errors across {} code words ({} chosen positions)",
            total,
            flat.len() / N,
            chosen.len()
        ),
        None => println!(
            "injected {} errors across {} code words ({} per word)",
            total,
            flat.len() / N,
            count.min(T)
        ),
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("inject-errors: {e}");
            ExitCode::FAILURE
        }
    }
}
