//! Polynomial algebra over GF(16).
//!
//! A `Poly` is an owned, ascending-index coefficient vector: index 0 is the
//! constant term. Every `Poly` returned from an operation here is trimmed per
//! the codec's canonical form — the zero polynomial is always the singleton
//! `[0]`, and every other polynomial has a nonzero leading coefficient.

use crate::error::{CodecError, Result};
use crate::field::Symbol;

/// A polynomial with GF(16) coefficients, ascending index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly(Vec<Symbol>);

fn trim(mut coeffs: Vec<Symbol>) -> Vec<Symbol> {
    while coeffs.len() > 1 && coeffs.last().unwrap().zero() {
        coeffs.pop();
    }

    if coeffs.is_empty() {
        coeffs.push(Symbol::default());
    }

    coeffs
}

impl Poly {
    /// Construct a polynomial from its coefficients c₀, c₁, ..., trimming any
    /// trailing zero terms.
    pub fn new(coeffs: Vec<Symbol>) -> Poly {
        Poly(trim(coeffs))
    }

    /// The canonical zero polynomial, p(x) = 0.
    pub fn zero() -> Poly {
        Poly(vec![Symbol::default()])
    }

    /// Construct p(x) = x^n.
    pub fn unit_power(n: usize) -> Poly {
        let mut coeffs = vec![Symbol::default(); n + 1];
        coeffs[n] = Symbol::new(1);
        Poly(coeffs)
    }

    /// Coefficients in ascending-index order.
    pub fn coeffs(&self) -> &[Symbol] {
        &self.0
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0].zero()
    }

    /// Degree of the polynomial, or -1 for the zero polynomial.
    pub fn degree(&self) -> isize {
        if self.is_zero() {
            -1
        } else {
            self.0.len() as isize - 1
        }
    }

    /// The degree-0 coefficient, c₀.
    pub fn constant(&self) -> Symbol {
        self.0[0]
    }

    /// Coefficient of x^i, or zero if i exceeds the degree.
    pub fn coeff(&self, i: usize) -> Symbol {
        self.0.get(i).copied().unwrap_or_default()
    }

    /// Add two polynomials, coefficient-wise XOR padded to the longer length.
    pub fn add(&self, other: &Poly) -> Poly {
        let n = self.0.len().max(other.0.len());
        let out: Vec<Symbol> = (0..n).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Poly::new(out)
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: Symbol) -> Poly {
        Poly::new(self.0.iter().map(|&x| x * c).collect())
    }

    /// Multiply two polynomials by convolution.
    pub fn mul(&self, other: &Poly) -> Poly {
        if self.is_zero() || other.is_zero() {
            return Poly::zero();
        }

        let mut out = vec![Symbol::default(); self.0.len() + other.0.len() - 1];

        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in other.0.iter().enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }

        Poly::new(out)
    }

    /// Long division: `num == add(mul(q, den), r)` with `deg(r) < deg(den)`.
    /// Fails with `DivisionByZero` if `den` is the zero polynomial.
    pub fn divmod(&self, den: &Poly) -> Result<(Poly, Poly)> {
        if den.is_zero() {
            return Err(CodecError::DivisionByZero);
        }

        let den_deg = den.degree();
        let num_deg = self.degree();

        if num_deg < den_deg {
            return Ok((Poly::zero(), self.clone()));
        }

        let mut rem = self.0.clone();
        let mut quot = vec![Symbol::default(); (num_deg - den_deg) as usize + 1];
        let den_lead = den.0[den_deg as usize];

        let mut deg = num_deg;
        while deg >= den_deg {
            let idx = deg as usize;
            let lead = rem[idx];

            if !lead.zero() {
                let coef = lead.div(den_lead)?;
                let shift = idx - den_deg as usize;
                quot[shift] = coef;

                for (i, &d) in den.0.iter().enumerate() {
                    rem[shift + i] = rem[shift + i] + coef * d;
                }
            }

            deg -= 1;
        }

        Ok((Poly::new(quot), Poly::new(rem)))
    }

    /// Evaluate p(x) at the given point, ascending-index Horner-equivalent
    /// accumulation: a running power of x is updated after each term.
    pub fn eval(&self, x: Symbol) -> Symbol {
        let mut acc = Symbol::default();
        let mut xp = Symbol::new(1);

        for &c in &self.0 {
            acc = acc + c * xp;
            xp = xp * x;
        }

        acc
    }

    /// Formal derivative in characteristic 2: d[i-1] = p[i] for odd i, 0
    /// otherwise. Using the integer derivative (multiplying by i mod the field)
    /// would be wrong over GF(16).
    pub fn derivative(&self) -> Poly {
        let len = self.0.len().saturating_sub(1).max(1);
        let mut out = vec![Symbol::default(); len];

        for i in 1..self.0.len() {
            if i % 2 == 1 {
                out[i - 1] = self.0[i];
            }
        }

        Poly::new(out)
    }
}
