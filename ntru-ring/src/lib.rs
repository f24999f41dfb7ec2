//! Arithmetic in the convolution ring Z[X]/(X^n - 1), the algebraic core
//! of school-book NTRU: centered modular reduction, polynomial ring
//! operations, inversion modulo a prime or a power of two, and sparse
//! ternary sampling.
//!
//! FOR EDUCATIONAL PURPOSES ONLY - NOT CRYPTOGRAPHICALLY SECURE.

pub mod inverse;
pub mod modular;
pub mod polynomial;
pub mod sampling;
