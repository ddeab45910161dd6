//! # Proxy Signature Library
//!
//! This Rust library provides a warrant-based proxy signature scheme over the NIST P-256 curve, built on the p256 library.
//!
//! ## Overview of Proxy Signatures
//!
//! A proxy signature lets an original signer delegate its signing authority to a proxy signer. Signatures produced by the proxy are verified against the public keys of both signers, so a verifier learns that the proxy acted under a delegation issued by the original signer. The proxy never learns the original signer's private key.
//!
//! - Key Pair Generation: every signer holds a private key (d) and a public key (Q), where Q = d * G and G is the generator of P-256.
//! - Delegation: the original signer binds its private key, a random warrant nonce and a permission weight into a delegation credential.
//! - Signing: the proxy combines the credential with its own private key into a signing key and signs messages with it.
//! - Verification: anyone holding both public keys, the warrant point and the weight can verify a signature.
//!
//! ## Algorithm
//!
//! - Original signer: private key d_A, public key Q_A = d_A * G
//! - Proxy signer: private key d_B, public key Q_B = d_B * G
//! - Permission weight: w
//! - Message: m, H() = SHA-256
//!
//! The equations of the scheme (all scalars reduced modulo the group order):
//!
//! - Delegation: (P, s) = (kG, d_A + k * w * x(P)) where k is a random warrant nonce
//! - Identity check: sG = Q_A + (w * x(P)) * P
//! - Proxy signing key: l = d_B + s
//! - Signing: σ = l * H(m) + d_B
//! - Verification: σG = H(m) * (Q_B + Q_A + (w * x(P)) * P) + Q_B
//!
//! ## Usage
//!
//! ```rust
//! use proxy_signature::{check_identity, check_signature, derive_signing_key, issue_delegation, sign_message};
//! use proxy_signature::keys_management::KeyPair;
//! use rand::rngs::OsRng;
//!
//! let original = KeyPair::create(OsRng);
//! let proxy = KeyPair::create(OsRng);
//!
//! let credential = issue_delegation(original.get_private_key(), 1).unwrap();
//! assert!(check_identity(&credential, original.get_public_key()));
//!
//! let signing_key = derive_signing_key(proxy.get_private_key(), &credential);
//! let signed = sign_message(b"Test message", &signing_key, proxy.get_private_key());
//!
//! assert!(check_signature(
//!     b"Test message",
//!     proxy.get_public_key(),
//!     original.get_public_key(),
//!     signed,
//!     credential.warrant_point(),
//!     credential.weight(),
//! ));
//! ```

pub mod curve_group;
pub mod delegation;
pub mod error;
pub mod keys_management;
pub mod signing;
pub mod warrant_nonce;

#[cfg(feature = "tracing")]
pub mod telemetry;

pub use crate::delegation::{
    check_identity, issue_delegation, issue_delegation_with_rng, DelegationCredential,
};
pub use crate::error::{Error, Result};
pub use crate::signing::{check_signature, derive_signing_key, sign_message};
pub use crate::warrant_nonce::NonceRange;
