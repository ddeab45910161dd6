//! Delegation of signing rights from the original signer to a proxy.
//!
//! The original signer with key pair `(d_A, Q_A)` draws an ephemeral `k`,
//! publishes the warrant point `P = kG` and binds its key to the permission
//! weight `w`:
//!
//! - Issuance: `s = d_A + k·w·x(P)`
//! - Identity check: `sG = Q_A + (w·x(P))·P`
use crate::curve_group::{base_mul, mul, weight_scalar, x_coordinate, Point};
use crate::error::Result;
use crate::warrant_nonce::{NonceRange, WarrantNonce};
use p256::{AffinePoint, ProjectivePoint, Scalar};
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Delegation credential (warrant signature) handed to the proxy signer.
///
/// Holds no secret material and may be sent to the proxy and to verifiers.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct DelegationCredential {
    warrant_point: AffinePoint,
    s: Scalar,
    weight: u64,
}

impl DelegationCredential {
    /// Reassembles a credential received from a transport of the caller's choice.
    pub fn from_parts(warrant_point: Point, s: Scalar, weight: u64) -> Self {
        DelegationCredential {
            warrant_point: warrant_point.into(),
            s,
            weight,
        }
    }

    pub fn warrant_point(&self) -> Point {
        ProjectivePoint::from(self.warrant_point)
    }

    pub fn s(&self) -> Scalar {
        self.s
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }
}

/// Issues a delegation credential for `weight` using the operating system RNG.
///
/// # Arguments
///
/// * `original_private_key` - The original signer's private key `d_A`.
/// * `weight` - Permission weight bound into the credential.
///
/// # Returns
///
/// The credential, or [`crate::Error::RandomnessFailure`] if no entropy is available.
pub fn issue_delegation(
    original_private_key: &Secret<Scalar>,
    weight: u64,
) -> Result<DelegationCredential> {
    issue_delegation_with_rng(original_private_key, weight, &mut OsRng, NonceRange::Full)
}

/// Issues a delegation credential drawing `k` from `rng` over `range`.
#[tracing::instrument(
    name = "Issuing the delegation credential",
    skip(original_private_key, rng)
)]
pub fn issue_delegation_with_rng<R>(
    original_private_key: &Secret<Scalar>,
    weight: u64,
    rng: &mut R,
    range: NonceRange,
) -> Result<DelegationCredential>
where
    R: CryptoRng + RngCore,
{
    if range == NonceRange::Legacy130 {
        tracing::warn!("sampling the warrant nonce from the narrow 130-bit range");
    }
    let nonce = WarrantNonce::new_rand(rng, range)?;
    let r = x_coordinate(&nonce.warrant_point);
    let s = *original_private_key.expose_secret()
        + *nonce.k.expose_secret() * weight_scalar(weight) * r;

    Ok(DelegationCredential::from_parts(
        nonce.warrant_point,
        s,
        weight,
    ))
}

/// Verifies that `credential` was honestly issued by the owner of
/// `original_public_key`: `sG == Q_A + (w·x(P))·P`.
#[tracing::instrument(name = "Checking the delegation identity")]
pub fn check_identity(credential: &DelegationCredential, original_public_key: Point) -> bool {
    let left = base_mul(&credential.s);
    let right =
        original_public_key + challenge_point(&credential.warrant_point(), credential.weight);

    let valid = left == right;
    if !valid {
        tracing::debug!("delegation credential does not match the original public key");
    }
    valid
}

/// Computes `(w·x(P))·P`, the warrant term shared by both verification equations.
pub(crate) fn challenge_point(warrant_point: &Point, weight: u64) -> Point {
    let exponent = weight_scalar(weight) * x_coordinate(warrant_point);
    mul(warrant_point, &exponent)
}
