//! School-book NTRU public-key encryption.
//!
//! Implements the classic three-operation scheme over Z[X]/(X^n - 1):
//! key generation (sample a ternary trapdoor f invertible mod p and mod q,
//! publish h = p·f^(-1)_q·g), encryption (c = h·r + m mod q), and
//! decryption (center f·c mod q, reduce mod p, multiply by f^(-1)_p).
//!
//! FOR EDUCATIONAL PURPOSES ONLY - NOT CRYPTOGRAPHICALLY SECURE.
//! Nothing here is constant-time, no parameter set targets a security
//! level, and there is no protection against chosen-ciphertext attacks.

use thiserror::Error;

pub mod params;
pub mod pke;

pub use params::NtruParams;
pub use pke::{decrypt, encrypt, encrypt_with_randomizer, keygen, keygen_from_seed};
pub use pke::{KeyPair, PrivateKey, PublicKey};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NtruError {
    /// The parameter set cannot decrypt correctly: requires gcd(p, q) = 1,
    /// 2d + 1 ≤ n, and the noise bound q/2 > 8d.
    #[error("infeasible parameters (n={n}, p={p}, q={q}, d={d}): decryption bound q/2 > 8d or coprimality violated")]
    ParameterInfeasible { n: usize, p: i64, q: i64, d: usize },

    /// No invertible trapdoor was found within the attempt cap. With
    /// feasible parameters this is essentially unreachable; the cap only
    /// guards against a pathological configuration looping forever.
    #[error("key generation found no invertible trapdoor in {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// A coefficient sequence had the wrong length for the ring degree
    #[error("polynomial has {actual} coefficients, expected {expected}")]
    InvalidShape { expected: usize, actual: usize },
}
