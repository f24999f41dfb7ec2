//! Coefficient arithmetic modulo an integer.
//!
//! NTRU decryption only works if every coefficient is brought into the
//! centered range before the modulus is switched, so a single reduction
//! primitive is defined here and used everywhere else in the workspace.

/// Reduces a value into the centered range (-m/2, m/2].
///
/// For m = 3 this yields {-1, 0, 1}; for an even modulus such as q = 32
/// the upper endpoint m/2 is included and -m/2 is not.
pub fn centered_reduce(x: i64, m: i64) -> i64 {
    debug_assert!(m > 1, "modulus must be at least 2");
    let r = x.rem_euclid(m);
    if r > m / 2 {
        r - m
    } else {
        r
    }
}

/// Reduces a value into the range [0, m-1].
///
/// Used internally by the polynomial extended Euclidean algorithm, where
/// non-negative representatives make the division step simpler.
pub fn nonneg_reduce(x: i64, m: i64) -> i64 {
    x.rem_euclid(m)
}

/// Computes the multiplicative inverse of a in Z_m, if it exists.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = nonneg_reduce(a, m);
    if a == 0 {
        return None;
    }

    // Extended Euclidean algorithm to find s such that a * s ≡ 1 (mod m)
    let mut s = 0i64;
    let mut old_s = 1i64;
    let mut r = m;
    let mut old_r = a;

    while r != 0 {
        let quotient = old_r / r;

        let temp = r;
        r = old_r - quotient * r;
        old_r = temp;

        let temp = s;
        s = old_s - quotient * s;
        old_s = temp;
    }

    if old_r != 1 {
        return None; // Not invertible
    }

    Some(nonneg_reduce(old_s, m))
}

/// Greatest common divisor of two non-negative integers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_reduce_odd_modulus() {
        assert_eq!(centered_reduce(0, 3), 0);
        assert_eq!(centered_reduce(1, 3), 1);
        assert_eq!(centered_reduce(2, 3), -1);
        assert_eq!(centered_reduce(-1, 3), -1);
        assert_eq!(centered_reduce(-4, 3), -1);
        assert_eq!(centered_reduce(7, 3), 1);
    }

    #[test]
    fn test_centered_reduce_even_modulus() {
        // For even m the range is (-m/2, m/2], so m/2 maps to itself
        assert_eq!(centered_reduce(16, 32), 16);
        assert_eq!(centered_reduce(17, 32), -15);
        assert_eq!(centered_reduce(31, 32), -1);
        assert_eq!(centered_reduce(-16, 32), 16);
        assert_eq!(centered_reduce(32, 32), 0);
    }

    #[test]
    fn test_nonneg_reduce() {
        assert_eq!(nonneg_reduce(15, 13), 2);
        assert_eq!(nonneg_reduce(-3, 13), 10);
    }

    #[test]
    fn test_mod_inverse() {
        let inv = mod_inverse(5, 13).unwrap();
        assert_eq!((5 * inv) % 13, 1);

        let inv = mod_inverse(3, 32).unwrap();
        assert_eq!((3 * inv) % 32, 1);
    }

    #[test]
    fn test_mod_inverse_not_invertible() {
        assert!(mod_inverse(0, 13).is_none());
        assert!(mod_inverse(4, 32).is_none());
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(3, 32), 1);
        assert_eq!(gcd(12, 18), 6);
    }
}
