#![no_main]

use libfuzzer_sys::fuzz_target;

use p256::elliptic_curve::ops::Reduce;
use p256::{FieldBytes, Scalar, U256};
use proxy_signature::keys_management::KeyPair;
use proxy_signature::{
    check_identity, check_signature, derive_signing_key, issue_delegation_with_rng, sign_message,
    NonceRange,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use secrecy::Secret;
use sha2::{Digest, Sha256};

fuzz_target!(|data: &[u8]| {
    // Message to be signed
    let message = b"Hello world";

    // Randomness source
    let mut seeded_rng = StdRng::seed_from_u64(123);

    let digest: FieldBytes = Sha256::digest(data);
    let private_key = Secret::new(<Scalar as Reduce<U256>>::reduce_bytes(&digest));
    let original = KeyPair::create_from_private_key(private_key);
    let proxy = KeyPair::create(&mut seeded_rng);

    let weight = data.len() as u64;
    let credential = issue_delegation_with_rng(
        original.get_private_key(),
        weight,
        &mut seeded_rng,
        NonceRange::Legacy130,
    )
    .expect("Error");
    assert!(check_identity(&credential, original.get_public_key()));

    let signing_key = derive_signing_key(proxy.get_private_key(), &credential);
    let signed = sign_message(message, &signing_key, proxy.get_private_key());

    assert!(check_signature(
        message,
        proxy.get_public_key(),
        original.get_public_key(),
        signed,
        credential.warrant_point(),
        weight,
    ));
});
