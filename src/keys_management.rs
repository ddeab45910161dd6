use crate::curve_group::{base_mul, Point};
use crate::error::{Error, Result};
use p256::elliptic_curve::{Field, PrimeField};
use p256::{FieldBytes, NonZeroScalar, Scalar};
use rand_core::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, Secret};

/// A signer's P-256 key pair. Used for both the original and the proxy signer.
pub struct KeyPair {
    pub(crate) private_key: Secret<Scalar>,
    pub public_key: Point,
}

use std::fmt;
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // private_key is never printed
        write!(f, "KeyPair {{ public_key: {:?} }}", self.public_key)
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        KeyPair {
            private_key: Secret::new(*self.private_key.expose_secret()),
            public_key: self.public_key,
        }
    }
}

impl KeyPair {
    pub fn create<R>(mut rng: R) -> KeyPair
    where
        R: CryptoRng + RngCore,
    {
        let private_key = Secret::new(*NonZeroScalar::random(&mut rng));
        Self::create_from_private_key(private_key)
    }

    pub fn create_from_private_key(private_key: Secret<Scalar>) -> KeyPair {
        let public_key = base_mul(private_key.expose_secret());
        KeyPair {
            private_key,
            public_key,
        }
    }

    /// Loads a key pair from the 32-byte big-endian encoding of its private key.
    ///
    /// Returns [`Error::InvalidPrivateKey`] if the encoding is zero or not
    /// below the group order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<KeyPair> {
        let scalar = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(*bytes)))
            .ok_or(Error::InvalidPrivateKey)?;
        if bool::from(scalar.is_zero()) {
            return Err(Error::InvalidPrivateKey);
        }
        Ok(Self::create_from_private_key(Secret::new(scalar)))
    }

    pub fn get_public_key(&self) -> Point {
        self.public_key
    }

    pub fn get_private_key(&self) -> &Secret<Scalar> {
        &self.private_key
    }
}
