//! Ties the field, polynomial, packer, encoder, decoder, and interleaver
//! modules into the file-level operations the CLI binaries expose: encode,
//! decode-sequential, decode-interleaved, and symbol-level error injection.
//!
//! Follows `data::coder::DataCoder`'s shape, which drives one code's
//! encode/decode over a stream of frames; here the pipeline instead runs
//! over fully-buffered `Vec`s end to end, since this codec has no streaming
//! requirement.

use crate::decoder::T;
use crate::encoder::{self, K, N};
use crate::error::{CodecError, Result};
use crate::field::Symbol;
use crate::interleaver;
use crate::packer;

/// What to do with a code word that the decoder reports `Uncorrectable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Stop decoding and propagate the error.
    Abort,
    /// Substitute an all-zero information block for the failed word and keep
    /// decoding the rest of the stream.
    SubstituteZero,
}

/// Result of decoding a stream: the recovered bytes plus a per-word report of
/// what happened, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// The recovered byte stream.
    pub bytes: Vec<u8>,
    /// One entry per code word, in stream order.
    pub words: Vec<WordOutcome>,
}

/// What happened to a single code word during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    /// No errors detected.
    Clean,
    /// Corrected, with the positions and magnitudes of the fixed symbols.
    Corrected(Vec<(usize, Symbol)>),
    /// Declared uncorrectable and zero-filled per `RecoveryPolicy::SubstituteZero`.
    Substituted,
}

/// Encode a byte stream into a flat sequence of RS(15, 9) code words, one per
/// 9-symbol (4.5 byte) block of the input.
pub fn encode_bytes(bytes: &[u8]) -> Result<Vec<Symbol>> {
    let nibbles = packer::bytes_to_nibbles(bytes);
    let blocks = packer::block(&nibbles);

    let mut out = Vec::with_capacity(blocks.len() * N);
    for block in &blocks {
        out.extend(encoder::encode(block)?);
    }

    Ok(out)
}

/// Encode a byte stream and additionally interleave the resulting code words
/// into an M×15 block, returning the flat interleaved stream.
pub fn encode_bytes_interleaved(bytes: &[u8]) -> Result<Vec<Symbol>> {
    let nibbles = packer::bytes_to_nibbles(bytes);
    let blocks = packer::block(&nibbles);

    let mut matrix = Vec::with_capacity(blocks.len());
    for block in &blocks {
        matrix.push(encoder::encode(block)?);
    }

    Ok(interleaver::interleave(&matrix))
}

/// Decode a flat, non-interleaved stream of code words back into bytes.
/// `policy` governs what happens when a word is `Uncorrectable`.
pub fn decode_sequential(symbols: &[Symbol], policy: RecoveryPolicy) -> Result<DecodeReport> {
    if symbols.len() % N != 0 {
        return Err(CodecError::InvalidLength(format!(
            "stream length {} is not a multiple of the {}-symbol code word size",
            symbols.len(),
            N
        )));
    }

    let mut blocks = Vec::new();
    let mut outcomes = Vec::new();

    for (i, chunk) in symbols.chunks(N).enumerate() {
        match crate::decoder::decode(chunk, i) {
            Ok(dec) if dec.errors.is_empty() => {
                blocks.push(dec.information().to_vec());
                outcomes.push(WordOutcome::Clean);
            }
            Ok(dec) => {
                let errs = dec.errors.clone();
                blocks.push(dec.information().to_vec());
                outcomes.push(WordOutcome::Corrected(errs));
            }
            Err(CodecError::Uncorrectable { word_index }) => match policy {
                RecoveryPolicy::Abort => {
                    return Err(CodecError::Uncorrectable { word_index });
                }
                RecoveryPolicy::SubstituteZero => {
                    blocks.push(vec![Symbol::default(); K]);
                    outcomes.push(WordOutcome::Substituted);
                }
            },
            Err(e) => return Err(e),
        }
    }

    let nibbles = packer::unblock(&blocks);
    Ok(DecodeReport {
        bytes: packer::nibbles_to_bytes(&nibbles),
        words: outcomes,
    })
}

/// Decode a flat, column-major-interleaved stream of `m` code words back into
/// bytes. `policy` governs what happens when a word is `Uncorrectable`.
pub fn decode_interleaved(
    symbols: &[Symbol],
    m: usize,
    policy: RecoveryPolicy,
) -> Result<DecodeReport> {
    let matrix = interleaver::deinterleave(symbols, m)?;
    let flat_sequential: Vec<Symbol> = matrix.into_iter().flatten().collect();
    decode_sequential(&flat_sequential, policy)
}

/// Render a symbol stream as a flat run of upper-case hex digits, one per
/// symbol, with no delimiters: `15 * M` bytes for `M` code words, matching
/// the on-disk A2/A3 contract exactly.
pub fn format_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| std::char::from_digit(s.bits() as u32, 16).unwrap().to_ascii_uppercase())
        .collect()
}

/// Parse a symbol stream written by `format_symbols`. Whitespace is skipped
/// (tolerating a hand-edited or line-wrapped file on read); any other byte
/// outside `'0'..='9'` / `'A'..='F'` / `'a'..='f'` fails with `InvalidSymbol`.
pub fn parse_symbols(text: &str) -> Result<Vec<Symbol>> {
    let mut out = Vec::new();

    for b in text.bytes() {
        if b.is_ascii_whitespace() {
            continue;
        }

        let digit = (b as char)
            .to_digit(16)
            .ok_or(CodecError::InvalidSymbol(b))?;
        out.push(Symbol::new(digit as u8));
    }

    Ok(out)
}

/// Flip up to `count` symbols (chosen uniformly at random, without repeats,
/// within the code word) to a nonzero random error magnitude, word by word.
/// Used by the error-injection tool's random mode to simulate channel noise.
///
/// `count` is clamped to `T`, the decoder's correction budget: the random
/// mode must stay within the code's correction capacity, so it can never
/// push a word past what `decode` can fix.
pub fn inject_errors(
    matrix: &mut [Vec<Symbol>],
    count: usize,
    rng: &mut impl rand::Rng,
) -> usize {
    use rand::seq::SliceRandom;
    use rand::Rng as _;

    let count = count.min(T);
    let mut total = 0;

    for word in matrix.iter_mut() {
        let mut positions: Vec<usize> = (0..word.len()).collect();
        positions.shuffle(rng);

        for &p in positions.iter().take(count.min(word.len())) {
            let power = rng.gen_range(0..15) + 1;
            word[p] = word[p] + Symbol::for_power(power);
            total += 1;
        }
    }

    total
}

/// Flip explicit `(word_index, position)` pairs to random nonzero error
/// magnitudes. Used by the error-injection tool's chosen-positions mode,
/// where the caller names exactly which symbols to corrupt rather than
/// letting the tool pick at random. Out-of-range `word_index`/`position`
/// pairs are ignored. Returns the number of symbols actually flipped.
pub fn inject_errors_at(
    matrix: &mut [Vec<Symbol>],
    positions: &[(usize, usize)],
    rng: &mut impl rand::Rng,
) -> usize {
    use rand::Rng as _;

    let mut total = 0;

    for &(word_index, pos) in positions {
        if let Some(word) = matrix.get_mut(word_index) {
            if let Some(symbol) = word.get_mut(pos) {
                let power = rng.gen_range(0..15) + 1;
                *symbol = *symbol + Symbol::for_power(power);
                total += 1;
            }
        }
    }

    total
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode_decode_sequential_roundtrip() {
        let bytes = b"the quick brown fox jumps over the lazy dog".to_vec();
        let symbols = encode_bytes(&bytes).unwrap();
        let report = decode_sequential(&symbols, RecoveryPolicy::Abort).unwrap();

        assert!(report.bytes.starts_with(&bytes));
        assert!(report.words.iter().all(|w| *w == WordOutcome::Clean));
    }

    #[test]
    fn test_encode_decode_interleaved_roundtrip() {
        let bytes = b"interleave me please, thank you very much indeed".to_vec();
        let symbols = encode_bytes_interleaved(&bytes).unwrap();

        let nibbles = packer::bytes_to_nibbles(&bytes);
        let m = packer::block(&nibbles).len();

        let report = decode_interleaved(&symbols, m, RecoveryPolicy::Abort).unwrap();
        assert!(report.bytes.starts_with(&bytes));
    }

    #[test]
    fn test_decode_sequential_corrects_burst_within_budget() {
        let bytes = b"0123456789abcdef".to_vec();
        let mut symbols = encode_bytes(&bytes).unwrap();

        // Corrupt two symbols in the first code word.
        symbols[0] = symbols[0] + Symbol::for_power(2);
        symbols[3] = symbols[3] + Symbol::for_power(9);

        let report = decode_sequential(&symbols, RecoveryPolicy::Abort).unwrap();
        assert!(report.bytes.starts_with(&bytes));
        assert!(matches!(report.words[0], WordOutcome::Corrected(_)));
    }

    #[test]
    fn test_decode_sequential_abort_on_uncorrectable() {
        let bytes = b"0123456789abcdef".to_vec();
        let mut symbols = encode_bytes(&bytes).unwrap();

        for (i, s) in symbols.iter_mut().take(N).enumerate() {
            *s = *s + Symbol::for_power(i + 1);
        }

        assert!(matches!(
            decode_sequential(&symbols, RecoveryPolicy::Abort),
            Err(CodecError::Uncorrectable { word_index: 0 })
        ));
    }

    #[test]
    fn test_decode_sequential_substitute_zero_keeps_going() {
        let bytes = b"0123456789abcdef0123456789abcdef".to_vec();
        let mut symbols = encode_bytes(&bytes).unwrap();

        for (i, s) in symbols.iter_mut().take(N).enumerate() {
            *s = *s + Symbol::for_power(i + 1);
        }

        let report = decode_sequential(&symbols, RecoveryPolicy::SubstituteZero).unwrap();
        assert_eq!(report.words[0], WordOutcome::Substituted);

        let word_count = symbols.len() / N;
        assert_eq!(report.bytes.len(), word_count * K / 2);
    }

    #[test]
    fn test_interleaved_burst_spanning_fifteen_words_recovers_exactly() {
        // 67 bytes -> 134 nibbles -> ceil(134/9) = 15 information blocks, so M = 15.
        let bytes: Vec<u8> = (0..67u8).collect();
        let mut symbols = encode_bytes_interleaved(&bytes).unwrap();

        let nibbles = packer::bytes_to_nibbles(&bytes);
        let m = packer::block(&nibbles).len();
        assert_eq!(m, 15);
        assert_eq!(symbols.len(), m * N);

        // A 45-symbol burst (3M) starting at offset 100, unaligned to the column
        // boundary. By the interleaver's column-major layout this still lands at
        // most ceil(45/15) = 3 corrupted symbols in any single code word.
        for s in symbols.iter_mut().skip(100).take(45) {
            *s = *s + Symbol::new(1);
        }

        let report = decode_interleaved(&symbols, m, RecoveryPolicy::Abort).unwrap();
        assert_eq!(&report.bytes[..bytes.len()], &bytes[..]);
        assert!(report.words.iter().all(|w| !matches!(w, WordOutcome::Substituted)));
    }

    #[test]
    fn test_wrong_stream_length() {
        let symbols = vec![Symbol::default(); 7];
        assert!(matches!(
            decode_sequential(&symbols, RecoveryPolicy::Abort),
            Err(CodecError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let symbols = encode_bytes(b"abc").unwrap();
        let text = format_symbols(&symbols);
        assert_eq!(parse_symbols(&text).unwrap(), symbols);
    }

    #[test]
    fn test_format_is_flat_with_no_delimiters() {
        let symbols = encode_bytes(b"abcdefgh").unwrap();
        let text = format_symbols(&symbols);
        assert_eq!(text.len(), symbols.len());
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_parse_skips_whitespace() {
        let symbols = parse_symbols(" 0A\n3F \t ").unwrap();
        assert_eq!(symbols, vec![Symbol::new(0), Symbol::new(0xA), Symbol::new(3), Symbol::new(0xF)]);
    }

    #[test]
    fn test_parse_rejects_bad_byte() {
        assert!(matches!(parse_symbols("0G"), Err(CodecError::InvalidSymbol(_))));
    }

    #[test]
    fn test_inject_errors_reports_count() {
        let bytes = b"0123456789abcdef".to_vec();
        let nibbles = packer::bytes_to_nibbles(&bytes);
        let mut matrix: Vec<Vec<Symbol>> = packer::block(&nibbles)
            .iter()
            .map(|b| encoder::encode(b).unwrap())
            .collect();

        let mut rng = rand::thread_rng();
        let total = inject_errors(&mut matrix, 2, &mut rng);
        assert_eq!(total, matrix.len() * 2);
    }

    #[test]
    fn test_inject_errors_clamps_to_correction_budget() {
        let bytes = b"0123456789abcdef".to_vec();
        let nibbles = packer::bytes_to_nibbles(&bytes);
        let mut matrix: Vec<Vec<Symbol>> = packer::block(&nibbles)
            .iter()
            .map(|b| encoder::encode(b).unwrap())
            .collect();

        let mut rng = rand::thread_rng();
        let total = inject_errors(&mut matrix, T + 5, &mut rng);
        assert_eq!(total, matrix.len() * T);
    }

    #[test]
    fn test_inject_errors_at_chosen_positions() {
        let bytes = b"0123456789abcdef".to_vec();
        let nibbles = packer::bytes_to_nibbles(&bytes);
        let mut matrix: Vec<Vec<Symbol>> = packer::block(&nibbles)
            .iter()
            .map(|b| encoder::encode(b).unwrap())
            .collect();
        let original = matrix.clone();

        let mut rng = rand::thread_rng();
        let total = inject_errors_at(&mut matrix, &[(0, 2), (0, 9), (1, 0)], &mut rng);

        assert_eq!(total, 3);
        assert_ne!(matrix[0][2], original[0][2]);
        assert_ne!(matrix[0][9], original[0][9]);
        assert_ne!(matrix[1][0], original[1][0]);
        assert_eq!(matrix[0][0], original[0][0]);
    }

    #[test]
    fn test_inject_errors_at_ignores_out_of_range() {
        let mut matrix = vec![vec![Symbol::default(); N]];
        let mut rng = rand::thread_rng();
        let total = inject_errors_at(&mut matrix, &[(5, 0), (0, 99)], &mut rng);
        assert_eq!(total, 0);
    }
}
