#![no_main]

use libfuzzer_sys::fuzz_target;

use proxy_signature::keys_management::KeyPair;
use proxy_signature::{
    check_identity, check_signature, derive_signing_key, issue_delegation_with_rng, sign_message,
    NonceRange,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fuzz_target!(|data: &[u8]| {
    // Randomness source
    let mut seeded_rng = StdRng::seed_from_u64(123);

    let original = KeyPair::create(&mut seeded_rng);
    let proxy = KeyPair::create(&mut seeded_rng);

    let credential =
        issue_delegation_with_rng(original.get_private_key(), 1, &mut seeded_rng, NonceRange::Full)
            .expect("Error");
    assert!(check_identity(&credential, original.get_public_key()));

    let signing_key = derive_signing_key(proxy.get_private_key(), &credential);
    let signed = sign_message(data, &signing_key, proxy.get_private_key());

    assert!(check_signature(
        data,
        proxy.get_public_key(),
        original.get_public_key(),
        signed,
        credential.warrant_point(),
        credential.weight(),
    ));
});
