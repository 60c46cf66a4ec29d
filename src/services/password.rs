// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password hashing with PBKDF2-HMAC-SHA256.
//!
//! Stored format: `{salt}${hash}`, both standard base64. Verification
//! goes through `ring::pbkdf2::verify`, which compares in constant time.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use ring::rand::{SecureRandom, SystemRandom};
use ring::{digest, pbkdf2};
use std::num::NonZeroU32;

const ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const HASH_LEN: usize = digest::SHA256_OUTPUT_LEN;

static ALGORITHM: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

/// Errors from password hashing/verification.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Failed to generate salt")]
    Rng,

    #[error("Stored hash is malformed")]
    Malformed,
}

fn iterations() -> NonZeroU32 {
    NonZeroU32::new(ITERATIONS).unwrap()
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt).map_err(|_| PasswordError::Rng)?;

    let mut hash = [0u8; HASH_LEN];
    pbkdf2::derive(
        ALGORITHM,
        iterations(),
        &salt,
        password.as_bytes(),
        &mut hash,
    );

    Ok(format!("{}${}", STANDARD.encode(salt), STANDARD.encode(hash)))
}

/// Check a password against a stored `salt$hash` string.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_b64, hash_b64)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(hash)) = (STANDARD.decode(salt_b64), STANDARD.decode(hash_b64)) else {
        return false;
    };

    pbkdf2::verify(ALGORITHM, iterations(), &salt, password.as_bytes(), &hash).is_ok()
}
