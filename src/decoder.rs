//! RS(15, 9) decoding: syndromes, the extended-Euclidean key equation, Chien
//! search, and Forney's formula.
//!
//! Structurally mirrors `coding::bmcf`'s four-stage pipeline (`ErrorLocator` →
//! `PolynomialRoots` → `ErrorDescriptions` → `Errors`), but the key-equation
//! stage here runs a literal extended-Euclidean recipe (`r_prev`/`r_curr`/
//! `t_prev`/`t_curr`) rather than a Hankerson-style Berlekamp-Massey variant,
//! and Chien search walks code-word positions 0..15 directly rather than
//! field powers, matching how this codec's syndromes are indexed.

use crate::encoder::N;
use crate::error::{CodecError, Result};
use crate::field::Symbol;
use crate::poly::Poly;

/// Number of syndromes / twice the correctable error count: 2t.
const SYNDROME_COUNT: usize = 6;
/// Maximum number of correctable errors per code word.
pub const T: usize = 3;

/// Outcome of decoding a single 15-symbol code word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The corrected 15-symbol code word.
    pub word: Vec<Symbol>,
    /// `(position, magnitude)` pairs for every corrected symbol, empty if the
    /// word had no detectable errors.
    pub errors: Vec<(usize, Symbol)>,
}

impl Decoded {
    /// The 9-symbol information block extracted from the corrected word.
    pub fn information(&self) -> &[Symbol] {
        &self.word[crate::encoder::PARITY..]
    }
}

/// Compute the syndrome polynomial S(x) with S[i] = r(α^(i+1)) for i = 0..5,
/// from a received word's polynomial.
fn syndromes(received: &Poly) -> Poly {
    let coeffs: Vec<Symbol> = (1..=SYNDROME_COUNT)
        .map(|i| received.eval(Symbol::for_power(i)))
        .collect();

    Poly::new(coeffs)
}

/// Run the extended-Euclidean key equation on the syndrome polynomial,
/// returning the normalized error-locator Λ(x) and error-evaluator Ω(x).
fn key_equation(syn: &Poly, word_index: usize) -> Result<(Poly, Poly)> {
    let mut r_prev = Poly::unit_power(SYNDROME_COUNT);
    let mut r_curr = syn.clone();
    let mut t_prev = Poly::zero();
    let mut t_curr = Poly::new(vec![Symbol::new(1)]);

    while r_curr.degree() >= T as isize {
        let (q, r_next) = r_prev.divmod(&r_curr)?;
        let t_next = t_prev.add(&q.mul(&t_curr));

        r_prev = r_curr;
        r_curr = r_next;
        t_prev = t_curr;
        t_curr = t_next;
    }

    let lambda_raw = t_curr;
    let omega_raw = r_curr;

    let c = lambda_raw.constant();
    if c.zero() {
        return Err(CodecError::Uncorrectable { word_index });
    }

    let inv_c = c.invert()?;
    Ok((lambda_raw.scale(inv_c), omega_raw.scale(inv_c)))
}

/// Chien search: the code-word positions where Λ(α^((15-i) mod 15)) vanishes.
/// Fails with `Uncorrectable` if more than `T` roots are found.
fn chien_search(lambda: &Poly, word_index: usize) -> Result<Vec<usize>> {
    let mut positions = Vec::new();

    for i in 0..N {
        let x = Symbol::for_power((N - i) % N);
        if lambda.eval(x).zero() {
            positions.push(i);

            if positions.len() > T {
                return Err(CodecError::Uncorrectable { word_index });
            }
        }
    }

    Ok(positions)
}

/// Forney's formula: the error magnitude at each located position.
fn forney(
    omega: &Poly,
    lambda: &Poly,
    positions: &[usize],
    word_index: usize,
) -> Result<Vec<(usize, Symbol)>> {
    let lambda_deriv = lambda.derivative();
    let mut errors = Vec::with_capacity(positions.len());

    for &p in positions {
        let x_inv = Symbol::for_power((N - p) % N);
        let denom = lambda_deriv.eval(x_inv);

        if denom.zero() {
            return Err(CodecError::Uncorrectable { word_index });
        }

        let numer = omega.eval(x_inv);
        let magnitude = numer.div(denom)?;
        errors.push((p, magnitude));
    }

    Ok(errors)
}

/// Decode a single 15-symbol received word. `word_index` is only used to label
/// an `Uncorrectable` failure.
///
/// If all six syndromes vanish, the word is declared error-free and returned
/// unchanged with no further work. Otherwise the key equation, Chien search,
/// and Forney's formula run in sequence; any of the three failure checkpoints
/// surfaces the whole word as `Uncorrectable`, with no partial correction.
pub fn decode(received: &[Symbol], word_index: usize) -> Result<Decoded> {
    if received.len() != N {
        return Err(CodecError::InvalidLength(format!(
            "expected a {}-symbol code word, got {}",
            N,
            received.len()
        )));
    }

    let r = Poly::new(received.to_vec());
    let syn = syndromes(&r);

    if syn.is_zero() {
        return Ok(Decoded {
            word: received.to_vec(),
            errors: Vec::new(),
        });
    }

    let (lambda, omega) = key_equation(&syn, word_index)?;
    let positions = chien_search(&lambda, word_index)?;
    let errors = forney(&omega, &lambda, &positions, word_index)?;

    let mut word = received.to_vec();
    for &(p, magnitude) in &errors {
        word[p] = word[p] + magnitude;
    }

    Ok(Decoded { word, errors })
}
