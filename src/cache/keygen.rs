//! Key Generation
//!
//! Produces short pseudo-random base-36 tokens for newly created records.
//! No collision check is made against existing keys; the store's uniqueness
//! constraint is the only backstop. Non-cryptographic, best-effort unique.

use rand::Rng;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LENGTH: usize = 7;

/// Returns a random base-36 token.
pub fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        assert_eq!(random_token().len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_token_charset() {
        for c in random_token().chars() {
            assert!(
                c.is_ascii_lowercase() || c.is_ascii_digit(),
                "unexpected character '{}' in token",
                c
            );
        }
    }
}
