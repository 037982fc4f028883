use soroban_sdk::{contractclient, Address, Env};

/// Interface of the collection contract the auction issues items through.
/// `allocate` reserves supply at bid time; `mint` issues previously
/// allocated tokens at claim time. Both are gated to the auction contract
/// on the collection side.
#[contractclient(name = "CollectionClient")]
pub trait ItemCollection {
    fn allocate(env: Env, to: Address, quantity: u32);
    fn mint(env: Env, to: Address, quantity: u32);
    fn remaining_supply(env: Env) -> u32;
}
