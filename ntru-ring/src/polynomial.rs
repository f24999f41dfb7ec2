use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::modular::centered_reduce;

/// A polynomial of degree < n in the convolution ring Z[X]/(X^n - 1).
///
/// Coefficients are plain integers; no coefficient modulus is applied
/// implicitly. Reduction modulo an integer is an explicit step via
/// [`Polynomial::reduce_mod`], so callers decide exactly where wraparound
/// happens. Every arithmetic operation returns a polynomial of the same
/// fixed length n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// Coefficients indexed by power of X, always of length n
    pub coeffs: Vec<i64>,
}

impl Polynomial {
    /// Creates a new polynomial of degree bound n from the given
    /// coefficients, padding with zeros if fewer than n are supplied.
    ///
    /// Panics if more than n coefficients are supplied; higher-degree
    /// input must be folded explicitly by the caller.
    pub fn new(coeffs: Vec<i64>, n: usize) -> Self {
        assert!(coeffs.len() <= n, "Polynomial has too many coefficients");

        let mut padded_coeffs = coeffs;
        if padded_coeffs.len() < n {
            padded_coeffs.resize(n, 0);
        }

        Polynomial {
            coeffs: padded_coeffs,
        }
    }

    /// Creates a new zero polynomial
    pub fn zero(n: usize) -> Self {
        Polynomial { coeffs: vec![0; n] }
    }

    /// Creates a constant polynomial
    pub fn constant(value: i64, n: usize) -> Self {
        let mut poly = Self::zero(n);
        poly.coeffs[0] = value;
        poly
    }

    /// The multiplicative identity of the ring
    pub fn one(n: usize) -> Self {
        Self::constant(1, n)
    }

    /// Degree bound of the ring this polynomial lives in
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Number of non-zero coefficients
    pub fn weight(&self) -> usize {
        self.coeffs.iter().filter(|&&c| c != 0).count()
    }

    /// Multiplies two polynomials with schoolbook convolution, reducing
    /// modulo X^n - 1 as it goes: X^(i+j) folds onto X^((i+j) mod n) by
    /// plain wraparound addition.
    ///
    /// O(n^2), which is fine at the parameter sizes this workspace targets.
    pub fn cyclic_mul(&self, other: &Self) -> Self {
        assert_eq!(
            self.coeffs.len(),
            other.coeffs.len(),
            "Polynomials must have the same degree bound"
        );

        let n = self.coeffs.len();
        let mut result = vec![0i64; n];

        for i in 0..n {
            if self.coeffs[i] == 0 {
                continue;
            }
            for j in 0..n {
                result[(i + j) % n] += self.coeffs[i] * other.coeffs[j];
            }
        }

        Polynomial { coeffs: result }
    }

    /// Multiplies every coefficient by a scalar
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        let coeffs = self.coeffs.iter().map(|&c| c * scalar).collect();
        Polynomial { coeffs }
    }

    /// Reduces every coefficient into the centered range (-m/2, m/2]
    pub fn reduce_mod(&self, m: i64) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| centered_reduce(c, m))
            .collect();
        Polynomial { coeffs }
    }

    /// Maximum absolute value of any coefficient
    pub fn infinity_norm(&self) -> i64 {
        self.coeffs.iter().map(|c| c.abs()).max().unwrap_or(0)
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        assert_eq!(
            self.coeffs.len(),
            other.coeffs.len(),
            "Polynomials must have the same degree bound"
        );

        let coeffs = self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Polynomial { coeffs }
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        assert_eq!(
            self.coeffs.len(),
            other.coeffs.len(),
            "Polynomials must have the same degree bound"
        );

        let coeffs = self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Polynomial { coeffs }
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self {
        let coeffs = self.coeffs.iter().map(|&c| -c).collect();
        Polynomial { coeffs }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, coeff) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coeff)?;
        }
        write!(f, "]")?;
        Ok(())
    }
}
