use ntru_ring::modular::gcd;

use crate::NtruError;

/// Parameter set for a school-book NTRU instance.
///
/// n is the ring degree, p the small plaintext modulus, q the large
/// ciphertext modulus (a power of two by convention), and d the sparsity
/// of the ternary polynomials: f carries d+1 ones and d minus-ones, g and
/// the randomizer r carry d of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NtruParams {
    /// Degree bound of the convolution ring Z[X]/(X^n - 1)
    pub n: usize,
    /// Small modulus, coprime to q (conventionally 3)
    pub p: i64,
    /// Large modulus (conventionally a power of two, q >> p)
    pub q: i64,
    /// Number of ±1 coefficient pairs in the small polynomials
    pub d: usize,
}

impl NtruParams {
    /// Classroom-board parameters: every intermediate value fits on a
    /// whiteboard. Matches the n=11 instance used throughout the tests.
    pub fn toy() -> Self {
        NtruParams {
            n: 11,
            p: 3,
            q: 32,
            d: 1,
        }
    }

    /// A larger (still completely insecure) instance for exercising the
    /// arithmetic at the sizes the convolution was written for.
    pub fn classroom() -> Self {
        NtruParams {
            n: 167,
            p: 3,
            q: 256,
            d: 15,
        }
    }

    /// Number of +1 coefficients in the trapdoor f. The extra one keeps
    /// f(1) = 1, so f never shares the factor (x - 1) with x^n - 1.
    pub fn f_ones(&self) -> usize {
        self.d + 1
    }

    /// Number of -1 coefficients in the trapdoor f
    pub fn f_neg_ones(&self) -> usize {
        self.d
    }

    /// Checks that this parameter set can decrypt correctly.
    ///
    /// Decryption recovers p·g·r + f·m from its reduction mod q only if
    /// that value never leaves (-q/2, q/2]. With the sparsity convention
    /// above each coefficient is bounded by 8d + 1 in absolute value, so
    /// q/2 > 8d is required. The moduli must also be coprime, and the
    /// non-zero coefficients of f must fit in the ring.
    pub fn validate(&self) -> Result<(), NtruError> {
        let feasible = self.n >= 2
            && 2 * self.d + 1 <= self.n
            && gcd(self.p, self.q) == 1
            && self.q / 2 > 8 * self.d as i64;

        if feasible {
            Ok(())
        } else {
            Err(NtruError::ParameterInfeasible {
                n: self.n,
                p: self.p,
                q: self.q,
                d: self.d,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_feasible() {
        assert!(NtruParams::toy().validate().is_ok());
        assert!(NtruParams::classroom().validate().is_ok());
    }

    #[test]
    fn test_noise_bound_boundary() {
        // q/2 = 16 and 8d = 16: the bound must hold strictly, so d=2 fails
        let params = NtruParams {
            n: 11,
            p: 3,
            q: 32,
            d: 2,
        };
        assert!(matches!(
            params.validate(),
            Err(NtruError::ParameterInfeasible { .. })
        ));

        let params = NtruParams { d: 1, ..params };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_non_coprime_moduli_rejected() {
        let params = NtruParams {
            n: 11,
            p: 2,
            q: 32,
            d: 1,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_oversparse_rejected() {
        // 2d + 1 non-zero coefficients cannot fit in a degree-5 ring
        let params = NtruParams {
            n: 5,
            p: 3,
            q: 128,
            d: 3,
        };
        assert!(params.validate().is_err());
    }
}
