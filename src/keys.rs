//! API key generation for operators.
//!
//! Keys look like `sk_` followed by 32 lowercase hex characters (16 random
//! bytes).  Generated keys are printed, never stored; add them to
//! `API_KEYS` to activate them.

use ring::rand::{SecureRandom, SystemRandom};

/// Prefix of every generated key.
pub const KEY_PREFIX: &str = "sk_";

const KEY_BYTES: usize = 16;

/// Generate one new API key.
pub fn generate_api_key(rng: &SystemRandom) -> anyhow::Result<String> {
    let mut bytes = [0u8; KEY_BYTES];
    rng.fill(&mut bytes)
        .map_err(|_| anyhow::anyhow!("failed to generate random key"))?;

    Ok(format!("{KEY_PREFIX}{}", hex::encode(bytes)))
}

/// Generate `count` keys from one RNG.
pub fn generate_api_keys(count: usize) -> anyhow::Result<Vec<String>> {
    let rng = SystemRandom::new();
    (0..count).map(|_| generate_api_key(&rng)).collect()
}
