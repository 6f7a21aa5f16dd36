//! Systematic RS(15, 9) encoding over GF(16).
//!
//! Follows `coding::reed_solomon::encode`'s generator-driven shape: there the
//! generator is a fixed matrix baked in as a constant table (P25's shortened
//! cyclic codes use a different parameterization per code); here it's built
//! at call time from the code's defining roots α¹..α⁶, since RS(15, 9) is
//! parameterized directly by its error-correcting distance rather than by a
//! precomputed generator matrix.

use crate::error::{CodecError, Result};
use crate::field::Symbol;
use crate::poly::Poly;

/// Number of information symbols per code word.
pub const K: usize = 9;
/// Number of symbols per code word.
pub const N: usize = 15;
/// Number of parity symbols per code word: N - K.
pub const PARITY: usize = N - K;

/// Build the generator polynomial g(x) = ∏_{i=1..6} (x - α^i) = ∏ (x + α^i),
/// since subtraction equals addition in characteristic 2.
///
/// The construction is deterministic: multiplying in the factors in ascending
/// order of i reproduces the same 7-coefficient sequence on every run.
pub fn generator() -> Poly {
    (1..=PARITY).fold(Poly::new(vec![Symbol::new(1)]), |g, i| {
        let factor = Poly::new(vec![Symbol::for_power(i), Symbol::new(1)]);
        g.mul(&factor)
    })
}

/// Systematically encode a 9-symbol information block into a 15-symbol code
/// word. Fails with `InvalidLength` if `info` isn't exactly 9 symbols.
pub fn encode(info: &[Symbol]) -> Result<Vec<Symbol>> {
    if info.len() != K {
        return Err(CodecError::InvalidLength(format!(
            "expected {} information symbols, got {}",
            K,
            info.len()
        )));
    }

    let mut m = vec![Symbol::default(); N];
    m[PARITY..N].copy_from_slice(info);

    let g = generator();
    let (_, remainder) = Poly::new(m).divmod(&g)?;

    let mut word = vec![Symbol::default(); N];
    for (i, &c) in remainder.coeffs().iter().enumerate() {
        word[i] = c;
    }
    word[PARITY..N].copy_from_slice(info);

    Ok(word)
}
