use crate::types::{AuctionConfig, DataKey, UserLedger};
use soroban_sdk::{Address, BytesN, Env};

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_signer(env: &Env) -> Option<BytesN<65>> {
    env.storage().instance().get(&DataKey::Signer)
}

pub fn set_signer(env: &Env, signer: &BytesN<65>) {
    env.storage().instance().set(&DataKey::Signer, signer);
}

pub fn get_collection(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Collection)
}

pub fn set_collection(env: &Env, collection: &Address) {
    env.storage().instance().set(&DataKey::Collection, collection);
}

pub fn get_treasury(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Treasury)
}

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
}

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_config(env: &Env) -> Option<AuctionConfig> {
    env.storage().persistent().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn get_user(env: &Env, account: &Address) -> UserLedger {
    let key = DataKey::User(account.clone());
    env.storage().persistent().get(&key).unwrap_or(UserLedger {
        total_paid: 0,
        qty_purchased: 0,
        qty_claimed: 0,
        refund_claimed: false,
        nonce: 0,
    })
}

pub fn set_user(env: &Env, account: &Address, ledger: &UserLedger) {
    let key = DataKey::User(account.clone());
    env.storage().persistent().set(&key, ledger);
}
