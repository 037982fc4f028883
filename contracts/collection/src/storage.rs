use crate::types::DataKey;
use soroban_sdk::{Address, Env};

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_minter(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Minter)
}

pub fn set_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&DataKey::Minter, minter);
}

pub fn get_max_supply(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::MaxSupply).unwrap_or(0)
}

pub fn set_max_supply(env: &Env, max_supply: u32) {
    env.storage().instance().set(&DataKey::MaxSupply, &max_supply);
}

pub fn get_total_allocated(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalAllocated)
        .unwrap_or(0)
}

pub fn set_total_allocated(env: &Env, total: u32) {
    env.storage().instance().set(&DataKey::TotalAllocated, &total);
}

pub fn get_total_minted(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalMinted)
        .unwrap_or(0)
}

pub fn set_total_minted(env: &Env, total: u32) {
    env.storage().instance().set(&DataKey::TotalMinted, &total);
}

pub fn get_next_token_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(0)
}

pub fn set_next_token_id(env: &Env, next: u32) {
    env.storage().instance().set(&DataKey::NextTokenId, &next);
}

pub fn get_allocation(env: &Env, account: &Address) -> u32 {
    let key = DataKey::Allocation(account.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allocation(env: &Env, account: &Address, quantity: u32) {
    let key = DataKey::Allocation(account.clone());
    env.storage().persistent().set(&key, &quantity);
}

pub fn get_minted(env: &Env, account: &Address) -> u32 {
    let key = DataKey::Minted(account.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_minted(env: &Env, account: &Address, quantity: u32) {
    let key = DataKey::Minted(account.clone());
    env.storage().persistent().set(&key, &quantity);
}

pub fn get_owner(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(token_id))
}

pub fn set_owner(env: &Env, token_id: u32, owner: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Owner(token_id), owner);
}
