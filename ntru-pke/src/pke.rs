use ntru_ring::inverse::invert;
use ntru_ring::polynomial::Polynomial;
use ntru_ring::sampling::{sample_ternary, sample_ternary_from_seed};
use rand::Rng;

use crate::params::NtruParams;
use crate::NtruError;

/// Resampling a non-invertible f succeeds within a handful of tries for
/// any feasible parameter set; the cap exists so a misconfigured instance
/// fails loudly instead of spinning.
const MAX_KEYGEN_ATTEMPTS: usize = 128;

/// NTRU public key: h = p · f^(-1)_q · g, coefficients centered mod q
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub h: Polynomial,
    pub params: NtruParams,
}

/// NTRU private key: the trapdoor f together with its inverse mod p,
/// precomputed at generation time because decryption needs it every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub f: Polynomial,
    pub f_p_inv: Polynomial,
    pub params: NtruParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

/// Generates an NTRU key pair.
///
/// Samples f (d+1 ones, d minus-ones) until it is invertible both mod p
/// and mod q; a non-invertible draw is the expected retry path, not an
/// error. g needs no invertibility and is sampled independently. The
/// noise-bound check happens once here: a parameter set that passes
/// `validate` is guaranteed to decrypt every well-formed ciphertext.
pub fn keygen(params: &NtruParams, rng: &mut impl Rng) -> Result<KeyPair, NtruError> {
    params.validate()?;

    for _ in 0..MAX_KEYGEN_ATTEMPTS {
        let f = sample_ternary(params.f_ones(), params.f_neg_ones(), params.n, rng);
        let g = sample_ternary(params.d, params.d, params.n, rng);
        match try_assemble(params, f, g) {
            Some(key_pair) => return Ok(key_pair),
            None => continue,
        }
    }

    Err(NtruError::GenerationExhausted {
        attempts: MAX_KEYGEN_ATTEMPTS,
    })
}

/// Deterministic key generation: the candidate polynomials are expanded
/// from (seed, attempt nonce), so the same seed always yields the same
/// key pair. Intended for reproducible test vectors.
pub fn keygen_from_seed(params: &NtruParams, seed: &[u8]) -> Result<KeyPair, NtruError> {
    params.validate()?;

    for attempt in 0..MAX_KEYGEN_ATTEMPTS as u16 {
        let f = sample_ternary_from_seed(
            seed,
            2 * attempt,
            params.f_ones(),
            params.f_neg_ones(),
            params.n,
        );
        let g = sample_ternary_from_seed(seed, 2 * attempt + 1, params.d, params.d, params.n);
        match try_assemble(params, f, g) {
            Some(key_pair) => return Ok(key_pair),
            None => continue,
        }
    }

    Err(NtruError::GenerationExhausted {
        attempts: MAX_KEYGEN_ATTEMPTS,
    })
}

/// Builds a key pair from candidate (f, g), or None when f is not
/// invertible under one of the moduli and the caller should resample.
fn try_assemble(params: &NtruParams, f: Polynomial, g: Polynomial) -> Option<KeyPair> {
    let f_p_inv = invert(&f, params.p).ok()?;
    let f_q_inv = invert(&f, params.q).ok()?;

    let h = f_q_inv
        .scalar_mul(params.p)
        .cyclic_mul(&g)
        .reduce_mod(params.q);

    Some(KeyPair {
        public: PublicKey {
            h,
            params: *params,
        },
        private: PrivateKey {
            f,
            f_p_inv,
            params: *params,
        },
    })
}

/// Encrypts a ternary plaintext polynomial under a fresh randomizer r
/// drawn from the supplied randomness source. r is consumed and not
/// returned.
pub fn encrypt(
    public_key: &PublicKey,
    plaintext: &Polynomial,
    rng: &mut impl Rng,
) -> Result<Polynomial, NtruError> {
    let params = &public_key.params;
    let r = sample_ternary(params.d, params.d, params.n, rng);
    encrypt_with_randomizer(public_key, plaintext, &r)
}

/// The deterministic core of encryption: c = h·r + m, centered mod q.
/// Exposed separately so fixed-randomizer test vectors are possible.
pub fn encrypt_with_randomizer(
    public_key: &PublicKey,
    plaintext: &Polynomial,
    r: &Polynomial,
) -> Result<Polynomial, NtruError> {
    let params = &public_key.params;
    check_shape(plaintext, params.n)?;
    check_shape(r, params.n)?;

    let c = public_key.h.cyclic_mul(r) + plaintext.clone();
    Ok(c.reduce_mod(params.q))
}

/// Decrypts a ciphertext.
///
/// f·c equals p·g·r + f·m over the integers once reduced into the
/// centered range mod q; the noise bound enforced at key generation makes
/// that reduction a no-op on the true value. Centering mod q BEFORE the
/// mod-p step is what makes the p·g·r term vanish.
pub fn decrypt(private_key: &PrivateKey, ciphertext: &Polynomial) -> Result<Polynomial, NtruError> {
    let params = &private_key.params;
    check_shape(ciphertext, params.n)?;

    let a = private_key.f.cyclic_mul(ciphertext).reduce_mod(params.q);
    let b = a.reduce_mod(params.p);
    Ok(private_key.f_p_inv.cyclic_mul(&b).reduce_mod(params.p))
}

fn check_shape(poly: &Polynomial, n: usize) -> Result<(), NtruError> {
    if poly.len() != n {
        return Err(NtruError::InvalidShape {
            expected: n,
            actual: poly.len(),
        });
    }
    Ok(())
}
