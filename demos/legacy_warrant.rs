use p256::elliptic_curve::PrimeField;
use proxy_signature::curve_group::scalar_from_be_bytes;
use proxy_signature::keys_management::KeyPair;
use proxy_signature::{check_identity, issue_delegation_with_rng, DelegationCredential, NonceRange};
use rand_core::OsRng;

// n, the order of P-256
const ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

// Big-endian addition of two 32-byte integers.
fn add_be(a: &[u8; 32], b: &[u8; 32]) -> Vec<u8> {
    let mut sum = vec![0u8; 33];
    let mut carry = 0u16;
    for i in (0..32).rev() {
        let digit = u16::from(a[i]) + u16::from(b[i]) + carry;
        sum[i + 1] = digit as u8;
        carry = digit >> 8;
    }
    sum[0] = carry as u8;
    sum
}

fn main() -> proxy_signature::Result<()> {
    let original = KeyPair::create(OsRng);

    // Warrant nonce drawn from [1, 2^130 - 1]
    let credential = issue_delegation_with_rng(
        original.get_private_key(),
        3,
        &mut OsRng,
        NonceRange::Legacy130,
    )?;
    println!("Legacy delegation: {:?}", credential);

    // s + n, as a deployment without modular reduction could have stored it
    let s_bytes: [u8; 32] = credential.s().to_repr().into();
    let unreduced = add_be(&s_bytes, &ORDER);

    let imported = DelegationCredential::from_parts(
        credential.warrant_point(),
        scalar_from_be_bytes(&unreduced),
        credential.weight(),
    );
    assert_eq!(imported, credential);

    let result = check_identity(&imported, original.get_public_key());
    println!("Imported delegation accepted: {:?}", result);
    assert!(result);
    Ok(())
}
