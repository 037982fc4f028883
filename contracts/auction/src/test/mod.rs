pub mod config_test;

use crate::{DutchAuctionContract, DutchAuctionContractClient};
use k256::ecdsa::SigningKey;
use nft_collection::{Collection, CollectionClient as NftCollectionClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env,
};

/// One whole payment-token unit (7 decimals).
pub const ONE: i128 = 10_000_000;

pub const START_TIME: u64 = 1_700_000_000;
pub const DURATION: u64 = 3 * 3600;
pub const REFUND_DELAY: u64 = 30 * 60;

pub struct Setup {
    pub env: Env,
    pub client: DutchAuctionContractClient<'static>,
    pub collection: NftCollectionClient<'static>,
    pub admin: Address,
    pub alice: Address,
    pub bob: Address,
    pub treasury: Address,
    pub token: token::TokenClient<'static>,
    pub signer_key: SigningKey,
}

pub fn setup(max_supply: u32) -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, START_TIME);

    let contract_id = env.register(DutchAuctionContract, ());
    let client = DutchAuctionContractClient::new(&env, &contract_id);

    let collection_id = env.register(Collection, ());
    let collection = NftCollectionClient::new(&env, &collection_id);

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let treasury = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin_client = token::StellarAssetClient::new(&env, &token_contract.address());
    token_admin_client.mint(&alice, &(1_000 * ONE));
    token_admin_client.mint(&bob, &(1_000 * ONE));

    let signer_key = SigningKey::from_slice(&[0x42; 32]).unwrap();

    collection.initialize(&admin, &max_supply);
    collection.set_minter(&admin, &contract_id);

    client.initialize(
        &admin,
        &collection_id,
        &signer_pubkey(&env, &signer_key),
        &treasury,
        &token_contract.address(),
    );

    Setup {
        env,
        client,
        collection,
        admin,
        alice,
        bob,
        treasury,
        token,
        signer_key,
    }
}

/// Schedule from the reference scenario: 2.0 -> 0.2 over three hours,
/// 10.0 spend limit, 30 minute refund delay, no vesting ramp.
pub fn default_config(s: &Setup) {
    s.client.set_config(
        &s.admin,
        &(2 * ONE),
        &(ONE / 5),
        &(10 * ONE),
        &REFUND_DELAY,
        &START_TIME,
        &(START_TIME + DURATION),
        &0,
    );
}

pub fn signer_pubkey(env: &Env, key: &SigningKey) -> BytesN<65> {
    let point = key.verifying_key().to_encoded_point(false);
    let bytes: [u8; 65] = point.as_bytes().try_into().unwrap();
    BytesN::from_array(env, &bytes)
}

/// Sign the digest the contract expects for a bid authorization.
pub fn sign_bid(
    s: &Setup,
    key: &SigningKey,
    account: &Address,
    quantity: u32,
    nonce: u64,
    deadline: u64,
) -> (BytesN<64>, u32) {
    let digest = s.client.bid_digest(account, &quantity, &nonce, &deadline);
    let (signature, recovery_id) = key.sign_prehash_recoverable(&digest.to_array()).unwrap();
    let signature_bytes: [u8; 64] = signature.to_bytes().into();
    (
        BytesN::from_array(&s.env, &signature_bytes),
        recovery_id.to_byte() as u32,
    )
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}
