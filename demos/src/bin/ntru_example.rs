use ntru_pke::{decrypt, encrypt, keygen, keygen_from_seed, NtruParams};
use ntru_ring::modular::nonneg_reduce;
use ntru_ring::polynomial::Polynomial;
use rand::rngs::OsRng;

/// Packs a ciphertext into bytes for display; two little-endian bytes per
/// coefficient, taken in the [0, q) representative range.
fn ciphertext_to_bytes(c: &Polynomial, q: i64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(c.len() * 2);
    for &coeff in &c.coeffs {
        let v = nonneg_reduce(coeff, q) as u16;
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

fn main() {
    println!("School-book NTRU Example");
    println!("========================");

    let params = NtruParams::toy();
    println!(
        "Parameters: n={}, p={}, q={}, d={}",
        params.n, params.p, params.q, params.d
    );

    // Generate a keypair
    let mut rng = OsRng;
    let key_pair = keygen(&params, &mut rng).expect("toy parameters are feasible");
    println!("\nGenerated keypair");
    println!("Private key f        = {}", key_pair.private.f);
    println!("f^(-1) mod p         = {}", key_pair.private.f_p_inv);
    println!("Public key h (mod q) = {}", key_pair.public.h);

    // Encrypt a ternary message
    println!("\nEncryption:");
    println!("-----------");
    let message = Polynomial::new(vec![1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0], params.n);
    println!("Message polynomial m = {}", message);

    let ciphertext = encrypt(&key_pair.public, &message, &mut rng).expect("message fits the ring");
    println!("Ciphertext c (mod q) = {}", ciphertext);
    println!(
        "Packed ciphertext    = {}",
        hex::encode(ciphertext_to_bytes(&ciphertext, params.q))
    );

    // Decrypt it again
    println!("\nDecryption:");
    println!("-----------");
    let recovered = decrypt(&key_pair.private, &ciphertext).expect("ciphertext fits the ring");
    println!("Recovered m          = {}", recovered);

    if recovered == message {
        println!("Decryption successful!");
    } else {
        println!("Decryption failed!");
    }

    // Deterministic key generation from a seed
    println!("\nSeeded key generation:");
    println!("----------------------");
    let kp1 = keygen_from_seed(&params, b"classroom demo seed").unwrap();
    let kp2 = keygen_from_seed(&params, b"classroom demo seed").unwrap();
    println!("f from seed          = {}", kp1.private.f);
    if kp1 == kp2 {
        println!("Same seed reproduced the same key pair");
    } else {
        println!("Seeded key generation was not reproducible!");
    }
}
