use crate::curve_group::{base_mul, mul, reduce_field_bytes, Point};
use crate::delegation::{challenge_point, DelegationCredential};
use p256::Scalar;
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};

/// Derives the proxy signing key `l = d_B + s` from the proxy's private key
/// and the delegation credential.
#[tracing::instrument(name = "Deriving the proxy signing key", skip(proxy_private_key))]
pub fn derive_signing_key(
    proxy_private_key: &Secret<Scalar>,
    credential: &DelegationCredential,
) -> Secret<Scalar> {
    Secret::new(*proxy_private_key.expose_secret() + credential.s())
}

/// Signs a message on behalf of the original signer:
/// signed = l·H(m) + d_B
///
/// No nonce is drawn here; the randomness was injected at delegation time.
///
/// # Arguments
///
/// * `message` - The message to be signed.
/// * `signing_key` - The proxy signing key `l` from [`derive_signing_key`].
/// * `proxy_private_key` - The proxy signer's private key `d_B`.
///
/// # Returns
///
/// The signature scalar.
///
#[tracing::instrument(
    name = "Signing the message with the proxy key",
    skip(message, signing_key, proxy_private_key),
    fields(message_len = message.len())
)]
pub fn sign_message(
    message: &[u8],
    signing_key: &Secret<Scalar>,
    proxy_private_key: &Secret<Scalar>,
) -> Scalar {
    let h = hash_message(message);
    *signing_key.expose_secret() * h + *proxy_private_key.expose_secret()
}

/// Verifies a proxy signature using the following formula:
/// signed·G = H(m)·(Q_B + Q_A + (w·x(P))·P) + Q_B
///
/// # Arguments
///
/// * `message` - The message that was signed.
/// * `proxy_public_key` - The proxy signer's public key `Q_B`.
/// * `original_public_key` - The original signer's public key `Q_A`.
/// * `signed` - The signature scalar.
/// * `warrant_point` - The warrant point `P` of the delegation credential.
/// * `weight` - The permission weight of the delegation credential.
///
/// # Returns
///
/// `true` if the signature is valid, `false` otherwise.
///
#[tracing::instrument(
    name = "Verifying the proxy signature",
    skip(message),
    fields(message_len = message.len())
)]
pub fn check_signature(
    message: &[u8],
    proxy_public_key: Point,
    original_public_key: Point,
    signed: Scalar,
    warrant_point: Point,
    weight: u64,
) -> bool {
    let left = base_mul(&signed);

    let h = hash_message(message);
    let combined = proxy_public_key + original_public_key + challenge_point(&warrant_point, weight);
    let right = mul(&combined, &h) + proxy_public_key;

    let valid = left == right;
    if !valid {
        tracing::debug!("proxy signature does not verify");
    }
    valid
}

/// SHA-256 of the message read as a big-endian integer, reduced mod n.
fn hash_message(message: &[u8]) -> Scalar {
    let digest = Sha256::digest(message);
    reduce_field_bytes(&digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegation::{check_identity, issue_delegation};
    use crate::keys_management::KeyPair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_signing_key_is_sum() {
        let mut rng = StdRng::seed_from_u64(1);
        let keys_a = KeyPair::create(&mut rng);
        let keys_b = KeyPair::create(&mut rng);
        let credential = issue_delegation(&keys_a.private_key, 1).unwrap();

        let signing_key = derive_signing_key(&keys_b.private_key, &credential);

        assert_eq!(
            *signing_key.expose_secret(),
            *keys_b.private_key.expose_secret() + credential.s()
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(2);
        let keys_a = KeyPair::create(&mut rng);
        let keys_b = KeyPair::create(&mut rng);
        let credential = issue_delegation(&keys_a.private_key, 1).unwrap();

        let first_key = derive_signing_key(&keys_b.private_key, &credential);
        let second_key = derive_signing_key(&keys_b.private_key, &credential);
        assert_eq!(first_key.expose_secret(), second_key.expose_secret());

        let message = b"Test message";
        assert_eq!(
            sign_message(message, &first_key, &keys_b.private_key),
            sign_message(message, &second_key, &keys_b.private_key)
        );
    }

    #[test]
    fn test_hash_message_is_sha256() {
        // SHA-256("abc") = BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD
        let expected = crate::curve_group::scalar_from_be_bytes(&[
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ]);
        assert_eq!(hash_message(b"abc"), expected);
    }

    #[test]
    fn test_valid_proxy_signature() {
        let mut rng = StdRng::seed_from_u64(3);
        let keys_a = KeyPair::create(&mut rng);
        let keys_b = KeyPair::create(&mut rng);

        let credential = issue_delegation(&keys_a.private_key, 1).unwrap();
        assert!(check_identity(&credential, keys_a.public_key));

        let signing_key = derive_signing_key(&keys_b.private_key, &credential);
        let message = b"Test message";
        let signed = sign_message(message, &signing_key, &keys_b.private_key);

        assert!(check_signature(
            message,
            keys_b.public_key,
            keys_a.public_key,
            signed,
            credential.warrant_point(),
            credential.weight(),
        ));
    }

    #[test]
    fn test_invalid_proxy_signature() {
        let mut rng = StdRng::seed_from_u64(4);
        let keys_a = KeyPair::create(&mut rng);
        let keys_b = KeyPair::create(&mut rng);
        let keys_c = KeyPair::create(&mut rng);

        let credential = issue_delegation(&keys_a.private_key, 1).unwrap();
        let signing_key = derive_signing_key(&keys_b.private_key, &credential);
        let message = b"Test message";
        let signed = sign_message(message, &signing_key, &keys_b.private_key);
        let warrant_point = credential.warrant_point();

        // wrong message
        assert!(!check_signature(
            b"Wrong test message",
            keys_b.public_key,
            keys_a.public_key,
            signed,
            warrant_point,
            1,
        ));
        // wrong proxy key
        assert!(!check_signature(
            message,
            keys_c.public_key,
            keys_a.public_key,
            signed,
            warrant_point,
            1,
        ));
        // wrong original key
        assert!(!check_signature(
            message,
            keys_b.public_key,
            keys_c.public_key,
            signed,
            warrant_point,
            1,
        ));
        // wrong weight
        assert!(!check_signature(
            message,
            keys_b.public_key,
            keys_a.public_key,
            signed,
            warrant_point,
            2,
        ));
        // wrong warrant point
        assert!(!check_signature(
            message,
            keys_b.public_key,
            keys_a.public_key,
            signed,
            keys_c.public_key,
            1,
        ));
        // tampered signature
        assert!(!check_signature(
            message,
            keys_b.public_key,
            keys_a.public_key,
            signed + Scalar::ONE,
            warrant_point,
            1,
        ));
    }
}
