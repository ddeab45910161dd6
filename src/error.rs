use thiserror::Error;

/// Errors produced by the proxy signature operations.
///
/// Verification never fails with an error: a forged or tampered credential
/// or signature is reported as `false` by the checking functions.
#[derive(Error, Debug)]
pub enum Error {
    #[error("randomness source failed: {0}")]
    RandomnessFailure(#[from] rand_core::Error),
    #[error("invalid private key encoding")]
    InvalidPrivateKey,
}

pub type Result<T> = std::result::Result<T, Error>;
