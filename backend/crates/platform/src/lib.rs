//! Platform - shared cryptographic and HTTP plumbing
//!
//! Infrastructure used by the feature crates:
//! - `password` - Argon2id hashing and verification
//! - `headers` - `Authorization` header parsing (Basic / Bearer)
//! - `crypto` - secure random bytes and base64 helpers

pub mod crypto;
pub mod headers;
pub mod password;
