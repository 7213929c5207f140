//! OAuth consumer key and secret generation.
//!
//! Randomness is taken from an explicit [`RandomSource`] so callers (and
//! tests) decide where the bytes come from. [`OsRandom`] reads the
//! operating system CSPRNG and reports its failures instead of falling back
//! to anything weaker.

use base64::{engine::general_purpose, Engine as _};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{Error, ErrorKind, Result};

/// Raw bytes behind a consumer key.
pub const CONSUMER_KEY_BYTES: usize = 24;

/// Smallest 32-bit value with ten decimal digits.
const TEN_DIGIT_FLOOR: u32 = 1_000_000_000;

/// Source of cryptographically secure random bytes.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;

    /// Draw a uniformly random `u32`.
    fn next_u32(&self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf)?;
        Ok(u32::from_ne_bytes(buf))
    }
}

/// The operating system random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::with_source(ErrorKind::Random(e.to_string()), e))
    }
}

/// Generate an OAuth consumer key: Base64 of 24 random bytes (32 characters).
pub fn generate_key(rng: &dyn RandomSource) -> Result<String> {
    let mut bytes = [0u8; CONSUMER_KEY_BYTES];
    rng.fill_bytes(&mut bytes)?;
    Ok(general_purpose::STANDARD.encode(bytes))
}

/// Generate an OAuth consumer secret of exactly 20 decimal digits.
///
/// Salesforce requires at least 20 characters, so each half is re-drawn
/// until it has ten digits and cannot lose length to leading zeros.
pub fn generate_secret(rng: &dyn RandomSource) -> Result<String> {
    Ok(format!("{}{}", ten_digit_number(rng)?, ten_digit_number(rng)?))
}

fn ten_digit_number(rng: &dyn RandomSource) -> Result<u32> {
    loop {
        let value = rng.next_u32()?;
        if value >= TEN_DIGIT_FLOOR {
            return Ok(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};
    use std::sync::Mutex;

    /// Yields the queued values, one per `next_u32`.
    struct SequenceRandom {
        values: Mutex<VecDeque<u32>>,
    }

    impl SequenceRandom {
        fn new(values: &[u32]) -> Self {
            Self {
                values: Mutex::new(values.iter().copied().collect()),
            }
        }

        fn remaining(&self) -> usize {
            self.values.lock().unwrap().len()
        }
    }

    impl RandomSource for SequenceRandom {
        fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
            let value = self
                .values
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| Error::new(ErrorKind::Random("exhausted".to_string())))?;
            for (i, byte) in dest.iter_mut().enumerate() {
                *byte = value.to_ne_bytes()[i % 4];
            }
            Ok(())
        }
    }

    struct FailingRandom;

    impl RandomSource for FailingRandom {
        fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
            Err(Error::new(ErrorKind::Random("entropy unavailable".to_string())))
        }
    }

    #[test]
    fn test_generate_key_length_and_alphabet() {
        for _ in 0..100 {
            let key = generate_key(&OsRandom).unwrap();
            assert_eq!(key.len(), 32);
            assert!(key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/'));
            assert_eq!(general_purpose::STANDARD.decode(&key).unwrap().len(), CONSUMER_KEY_BYTES);
        }
    }

    #[test]
    fn test_generate_key_unique_over_many_draws() {
        let keys: HashSet<String> = (0..1000).map(|_| generate_key(&OsRandom).unwrap()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_generate_key_uses_injected_source() {
        let key = generate_key(&SequenceRandom::new(&[u32::MAX])).unwrap();
        assert_eq!(key, "/".repeat(32));
    }

    #[test]
    fn test_generate_secret_is_twenty_digits() {
        for _ in 0..1000 {
            let secret = generate_secret(&OsRandom).unwrap();
            assert_eq!(secret.len(), 20);
            assert!(secret.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_secret_redraws_short_values() {
        let rng = SequenceRandom::new(&[5, 999_999_999, 1_000_000_000, 0, u32::MAX]);
        let secret = generate_secret(&rng).unwrap();
        assert_eq!(secret, "10000000004294967295");
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_random_failure_propagates() {
        let err = generate_key(&FailingRandom).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Random(_)));

        let err = generate_secret(&FailingRandom).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Random(_)));
    }
}
