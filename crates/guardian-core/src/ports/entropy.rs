/// Randomness seam for the cosmetic identifiers the site hands out.
pub trait Entropy: Send + Sync {
    /// A fresh 4-digit guardian pseudonym, "1000" through "9999".
    fn guardian_pin(&self) -> String;

    /// Seven lowercase base-36 characters for session tokens.
    fn session_nonce(&self) -> String;
}
