//! Thread-RNG entropy source.

use rand::Rng;

use guardian_core::ports::Entropy;

const NONCE_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Entropy backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngEntropy;

impl Entropy for ThreadRngEntropy {
    fn guardian_pin(&self) -> String {
        rand::thread_rng().gen_range(1000..=9999).to_string()
    }

    fn session_nonce(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..NONCE_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect()
    }
}
