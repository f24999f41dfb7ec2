//! Inversion in the quotient ring Z_m[X]/(X^n - 1).
//!
//! Two cases cover the NTRU convention of moduli:
//! - m prime (the small modulus p, and the base case m = 2): extended
//!   Euclidean algorithm on f and X^n - 1 over Z_m;
//! - m a power of two (the large modulus q): invert modulo 2, then
//!   Hensel-lift the inverse by iterating v <- v * (2 - f * v), which
//!   doubles the precision of the working modulus each round.

use thiserror::Error;

use crate::modular::{mod_inverse, nonneg_reduce};
use crate::polynomial::Polynomial;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InverseError {
    /// The polynomial shares a nontrivial factor with X^n - 1 modulo m.
    /// During key generation this is the expected resample trigger, not a
    /// fault.
    #[error("polynomial has no inverse modulo {modulus}")]
    NotInvertible { modulus: i64 },
}

/// Computes f^(-1) in Z_m[X]/(X^n - 1).
///
/// The result has coefficients already reduced into the centered range of
/// m. Returns [`InverseError::NotInvertible`] when no inverse exists.
pub fn invert(f: &Polynomial, m: i64) -> Result<Polynomial, InverseError> {
    assert!(m >= 2, "modulus must be at least 2");

    if m > 2 && m & (m - 1) == 0 {
        invert_power_of_two(f, m)
    } else {
        invert_prime(f, m)
    }
}

/// Extended Euclidean inversion for prime m.
fn invert_prime(f: &Polynomial, m: i64) -> Result<Polynomial, InverseError> {
    let n = f.len();
    let not_invertible = InverseError::NotInvertible { modulus: m };

    // X^n - 1, the ring modulus, with non-negative coefficients
    let mut ring_poly = vec![0i64; n + 1];
    ring_poly[0] = nonneg_reduce(-1, m);
    ring_poly[n] = 1;

    let f_reduced = trim(f.coeffs.iter().map(|&c| nonneg_reduce(c, m)).collect());
    if f_reduced.is_empty() {
        return Err(not_invertible);
    }

    // Track only the Bezout coefficient of f: old_t * f ≡ old_r (mod X^n - 1)
    let mut old_r = trim(ring_poly);
    let mut r = f_reduced;
    let mut old_t = vec![];
    let mut t = vec![1i64];

    while !r.is_empty() {
        let (quotient, remainder) = divmod(&old_r, &r, m).ok_or(not_invertible.clone())?;

        old_r = r;
        r = remainder;

        let new_t = sub_mul(&old_t, &quotient, &t, m);
        old_t = t;
        t = new_t;
    }

    // GCD must be a nonzero constant for f to be a unit in the ring
    if old_r.len() != 1 {
        return Err(not_invertible);
    }
    let scale = mod_inverse(old_r[0], m).ok_or(not_invertible)?;

    // Fold old_t * scale back into degree < n and center the coefficients
    let mut coeffs = vec![0i64; n];
    for (i, &c) in old_t.iter().enumerate() {
        coeffs[i % n] += c * scale;
    }
    Ok(Polynomial::new(coeffs, n).reduce_mod(m))
}

/// Newton/Hensel lifting for q a power of two.
fn invert_power_of_two(f: &Polynomial, q: i64) -> Result<Polynomial, InverseError> {
    let n = f.len();

    let mut inv = invert_prime(f, 2).map_err(|_| InverseError::NotInvertible { modulus: q })?;

    // If v ≡ f^(-1) (mod 2^k), then v * (2 - f * v) ≡ f^(-1) (mod 2^(2k))
    let mut modulus = 2i64;
    while modulus < q {
        modulus = (modulus * modulus).min(q);
        let correction = Polynomial::constant(2, n) - f.cyclic_mul(&inv);
        inv = inv.cyclic_mul(&correction).reduce_mod(modulus);
    }

    Ok(inv)
}

/// Strips leading zero coefficients; the empty vector is the zero polynomial.
fn trim(mut coeffs: Vec<i64>) -> Vec<i64> {
    while coeffs.last() == Some(&0) {
        coeffs.pop();
    }
    coeffs
}

/// Polynomial long division over Z_m. Requires the leading coefficient of
/// the divisor to be invertible mod m, which always holds for prime m.
fn divmod(a: &[i64], b: &[i64], m: i64) -> Option<(Vec<i64>, Vec<i64>)> {
    debug_assert!(!b.is_empty(), "division by the zero polynomial");

    let lead_inv = mod_inverse(b[b.len() - 1], m)?;

    let mut remainder = a.to_vec();
    if a.len() < b.len() {
        return Some((vec![], remainder));
    }
    let mut quotient = vec![0i64; a.len() - b.len() + 1];

    for i in (b.len() - 1..a.len()).rev() {
        let coeff = nonneg_reduce(remainder[i] * lead_inv, m);
        if coeff == 0 {
            continue;
        }
        let shift = i - (b.len() - 1);
        quotient[shift] = coeff;
        for (j, &bc) in b.iter().enumerate() {
            remainder[shift + j] = nonneg_reduce(remainder[shift + j] - coeff * bc, m);
        }
    }

    Some((trim(quotient), trim(remainder)))
}

/// Computes a - q * t over Z_m on raw coefficient vectors.
fn sub_mul(a: &[i64], q: &[i64], t: &[i64], m: i64) -> Vec<i64> {
    let prod_len = if q.is_empty() || t.is_empty() {
        0
    } else {
        q.len() + t.len() - 1
    };
    let mut result = vec![0i64; a.len().max(prod_len)];

    for (i, &c) in a.iter().enumerate() {
        result[i] = c;
    }
    for (i, &qc) in q.iter().enumerate() {
        for (j, &tc) in t.iter().enumerate() {
            result[i + j] = nonneg_reduce(result[i + j] - qc * tc, m);
        }
    }

    trim(result.into_iter().map(|c| nonneg_reduce(c, m)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::sample_ternary;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn is_one(poly: &Polynomial, m: i64) -> bool {
        poly.reduce_mod(m) == Polynomial::one(poly.len())
    }

    #[test]
    fn test_invert_x_is_x_to_n_minus_one() {
        // x * x^(n-1) = x^n = 1, for any modulus
        let n = 11;
        let x = Polynomial::new(vec![0, 1], n);

        for m in [3, 32] {
            let inv = invert(&x, m).unwrap();
            let mut expected = Polynomial::zero(n);
            expected.coeffs[n - 1] = 1;
            assert_eq!(inv, expected);
        }
    }

    #[test]
    fn test_invert_constant() {
        let n = 7;
        let two = Polynomial::constant(2, n);

        // 2 * 2 = 4 ≡ 1 (mod 3)
        let inv = invert(&two, 3).unwrap();
        assert!(is_one(&two.cyclic_mul(&inv), 3));
    }

    #[test]
    fn test_invert_prime_modulus_product_is_identity() {
        let n = 7;
        // Tutorial trapdoor: f = -1 + x^2 + x^3 - x^4 + x^6
        let f = Polynomial::new(vec![-1, 0, 1, 1, -1, 0, 1], n);

        let inv = invert(&f, 3).unwrap();
        assert!(is_one(&f.cyclic_mul(&inv), 3));
    }

    #[test]
    fn test_invert_power_of_two_product_is_identity() {
        let n = 7;
        let f = Polynomial::new(vec![-1, 0, 1, 1, -1, 0, 1], n);

        let inv = invert(&f, 32).unwrap();
        assert!(is_one(&f.cyclic_mul(&inv), 32));
        // Output must already sit in the centered range of q
        assert!(inv.infinity_norm() <= 16);
    }

    #[test]
    fn test_not_invertible_shares_factor() {
        // f(1) = 0, so f shares the factor (x - 1) with x^n - 1 over any m
        let n = 11;
        let f = Polynomial::new(vec![-1, 1], n);

        for m in [2, 3, 32] {
            assert_eq!(
                invert(&f, m),
                Err(InverseError::NotInvertible { modulus: m })
            );
        }
    }

    #[test]
    fn test_zero_is_not_invertible() {
        let zero = Polynomial::zero(5);
        assert!(invert(&zero, 3).is_err());
        assert!(invert(&zero, 32).is_err());
    }

    #[test]
    fn test_random_ternary_inverses() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let n = 11;
        let mut successes = 0;

        for _ in 0..100 {
            let f = sample_ternary(4, 3, n, &mut rng);
            for m in [3, 32] {
                if let Ok(inv) = invert(&f, m) {
                    assert!(is_one(&f.cyclic_mul(&inv), m));
                    successes += 1;
                }
            }
        }

        // Invertible samples are the common case, not a fluke
        assert!(successes > 50);
    }
}
