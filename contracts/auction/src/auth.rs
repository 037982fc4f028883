use crate::errors::Error;
use soroban_sdk::{crypto::Hash, xdr::ToXdr, Address, Bytes, BytesN, Env};

const SCHEME_NAME: &[u8] = b"Dutch Auction Bid";
const SCHEME_VERSION: &[u8] = b"1";

/// Keccak-256 digest of a bid authorization, domain-separated by scheme
/// name/version, network id and this contract's address so a signature
/// cannot be replayed against another deployment or network.
pub fn bid_digest(
    env: &Env,
    account: &Address,
    quantity: u32,
    nonce: u64,
    deadline: u64,
) -> Hash<32> {
    let mut payload = Bytes::from_slice(env, SCHEME_NAME);
    payload.append(&Bytes::from_slice(env, SCHEME_VERSION));
    payload.extend_from_array(&env.ledger().network_id().to_array());
    payload.append(&env.current_contract_address().to_xdr(env));
    payload.append(&account.clone().to_xdr(env));
    payload.extend_from_array(&quantity.to_be_bytes());
    payload.extend_from_array(&nonce.to_be_bytes());
    payload.extend_from_array(&deadline.to_be_bytes());
    env.crypto().keccak256(&payload)
}

/// Recover the signer of a bid authorization and compare it with the
/// trusted signer key. `nonce` must be the participant's current stored
/// nonce — a consumed authorization recovers to a different digest and
/// fails here.
pub fn verify_bid(
    env: &Env,
    trusted_signer: &BytesN<65>,
    account: &Address,
    quantity: u32,
    nonce: u64,
    deadline: u64,
    signature: &BytesN<64>,
    recovery_id: u32,
) -> Result<(), Error> {
    if recovery_id > 1 {
        return Err(Error::InvalidSignature);
    }
    let digest = bid_digest(env, account, quantity, nonce, deadline);
    let recovered = env
        .crypto()
        .secp256k1_recover(&digest, signature, recovery_id);
    if recovered != *trusted_signer {
        return Err(Error::InvalidSignature);
    }
    Ok(())
}
