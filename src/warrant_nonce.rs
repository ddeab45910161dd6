use crate::curve_group::{base_mul, Point};
use crate::error::Result;
use p256::elliptic_curve::{Field, PrimeField};
use p256::{FieldBytes, Scalar};
use rand_core::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, Secret};
use zeroize::Zeroizing;

/// Range the ephemeral delegation scalar `k` is drawn from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NonceRange {
    /// Uniform over the non-zero scalars of P-256.
    #[default]
    Full,
    /// Uniform over `[1, 2^130 - 1]`. Only for interoperating with credentials
    /// issued by deployments that sample this narrower range.
    Legacy130,
}

const LEGACY_NONCE_BITS: usize = 130;

/// Ephemeral scalar `k` and its public image `k·G` (the warrant point).
pub struct WarrantNonce {
    pub warrant_point: Point,
    pub(crate) k: Secret<Scalar>,
}

use std::fmt;
impl fmt::Debug for WarrantNonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WarrantNonce {{ warrant_point: {:?} }}", self.warrant_point)
    }
}

impl WarrantNonce {
    /// Draws a fresh non-zero `k` from `range`.
    ///
    /// Zero is redrawn so the warrant point is never the identity. Fails with
    /// [`crate::Error::RandomnessFailure`] if `rng` cannot produce bytes.
    pub fn new_rand<R>(rng: &mut R, range: NonceRange) -> Result<WarrantNonce>
    where
        R: CryptoRng + RngCore,
    {
        let k = loop {
            let candidate = match range {
                NonceRange::Full => sample_full(rng)?,
                NonceRange::Legacy130 => Some(sample_legacy(rng)?),
            };
            if let Some(k) = candidate {
                if !bool::from(k.is_zero()) {
                    break Secret::new(k);
                }
            }
        };
        let warrant_point = base_mul(k.expose_secret());
        Ok(WarrantNonce { warrant_point, k })
    }
}

// Rejection sampling; `None` when the bytes encode a value >= n.
fn sample_full<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Option<Scalar>> {
    let mut bytes = Zeroizing::new([0u8; 32]);
    rng.try_fill_bytes(&mut bytes[..])?;
    Ok(Option::from(Scalar::from_repr(FieldBytes::clone_from_slice(
        &bytes[..],
    ))))
}

fn sample_legacy<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Scalar> {
    let mut bytes = Zeroizing::new([0u8; 32]);
    let low = 32 - LEGACY_NONCE_BITS.div_ceil(8);
    rng.try_fill_bytes(&mut bytes[low..])?;
    bytes[low] &= (1u8 << (LEGACY_NONCE_BITS % 8)) - 1;
    // always below n
    Ok(crate::curve_group::reduce_field_bytes(
        FieldBytes::from_slice(&bytes[..]),
    ))
}
