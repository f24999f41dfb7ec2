use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use crate::polynomial::Polynomial;

/// Samples a ternary polynomial with exactly `ones` coefficients set to +1
/// and `neg_ones` set to -1, the rest 0.
///
/// This is the small-polynomial shape NTRU uses for the trapdoors f and g,
/// the randomizer r, and plaintexts.
pub fn sample_ternary(ones: usize, neg_ones: usize, n: usize, rng: &mut impl Rng) -> Polynomial {
    let weight = ones + neg_ones;
    assert!(weight <= n, "more non-zero coefficients than ring degree");

    let mut values = vec![0i64; n];

    // Fisher-Yates shuffle to pick `weight` distinct positions
    let mut positions: Vec<usize> = (0..n).collect();
    for i in 0..weight {
        let j = i + rng.gen_range(0..n - i);
        positions.swap(i, j);
    }

    for &pos in positions.iter().take(ones) {
        values[pos] = 1;
    }
    for &pos in positions.iter().skip(ones).take(neg_ones) {
        values[pos] = -1;
    }

    Polynomial::new(values, n)
}

/// Implements PRF(seed, nonce, len) via SHAKE-256
pub fn prf(seed: &[u8], nonce: u16, len: usize) -> Vec<u8> {
    let mut input = seed.to_vec();
    input.extend_from_slice(&nonce.to_le_bytes());

    let mut shake = Shake256::default();
    shake.update(&input);
    let mut reader = shake.finalize_xof();

    let mut output = vec![0u8; len];
    reader.read(&mut output);

    output
}

/// Deterministic variant of [`sample_ternary`]: expands (seed, nonce) with
/// SHAKE-256 into a ChaCha20 stream and samples from that. The same seed
/// and nonce always produce the same polynomial, which makes key-pair test
/// vectors reproducible.
pub fn sample_ternary_from_seed(
    seed: &[u8],
    nonce: u16,
    ones: usize,
    neg_ones: usize,
    n: usize,
) -> Polynomial {
    let material = prf(seed, nonce, 32);
    let mut seed_array = [0u8; 32];
    seed_array.copy_from_slice(&material);

    let mut rng = ChaCha20Rng::from_seed(seed_array);
    sample_ternary(ones, neg_ones, n, &mut rng)
}
