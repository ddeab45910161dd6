use proxy_signature::keys_management::KeyPair;
use proxy_signature::{
    check_identity, check_signature, derive_signing_key, issue_delegation, sign_message,
};
use rand_core::OsRng;

fn main() -> proxy_signature::Result<()> {
    let csprng = OsRng;
    // Original signer and proxy signer keys
    let original = KeyPair::create(csprng);
    let proxy = KeyPair::create(csprng);

    // Delegation with permission weight 1
    let credential = issue_delegation(original.get_private_key(), 1)?;
    let accepted = check_identity(&credential, original.get_public_key());
    println!("Delegation accepted: {:?}", accepted);
    assert!(accepted);

    // Signing on behalf of the original signer
    let message = b"Test message";
    let signing_key = derive_signing_key(proxy.get_private_key(), &credential);
    let signed = sign_message(message, &signing_key, proxy.get_private_key());

    // Verification of the signature
    let result = check_signature(
        message,
        proxy.get_public_key(),
        original.get_public_key(),
        signed,
        credential.warrant_point(),
        credential.weight(),
    );

    println!("Verification result: {:?}", result);
    assert!(result);
    Ok(())
}
