#![no_std]

//! Fixed-supply collection minted through a designated minter contract
//! (the auction). Supply is consumed in two steps: `allocate` reserves it
//! at purchase time, `mint` issues the reserved tokens at claim time, so
//! concurrent purchases can never over-allocate past `max_supply`.

mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

use events::{AllocatedEventData, MintedEventData};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidSupply = 4,
    CapacityExceeded = 5,
    AllocationExceeded = 6,
}

#[contract]
pub struct Collection;

#[contractimpl]
impl Collection {
    pub fn initialize(env: Env, admin: Address, max_supply: u32) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        if max_supply == 0 {
            return Err(Error::InvalidSupply);
        }
        storage::set_admin(&env, &admin);
        storage::set_max_supply(&env, max_supply);
        Ok(())
    }

    /// Set the address allowed to allocate and mint — the auction contract.
    pub fn set_minter(env: Env, caller: Address, minter: Address) -> Result<(), Error> {
        let admin = storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        caller.require_auth();
        if caller != admin {
            return Err(Error::Unauthorized);
        }
        storage::set_minter(&env, &minter);
        Ok(())
    }

    /// Reserve `quantity` of the remaining supply for `to`. Minter-only.
    pub fn allocate(env: Env, to: Address, quantity: u32) -> Result<(), Error> {
        Self::require_minter(&env)?;

        let max_supply = storage::get_max_supply(&env);
        let total_allocated = storage::get_total_allocated(&env);
        if total_allocated + quantity > max_supply {
            return Err(Error::CapacityExceeded);
        }

        storage::set_total_allocated(&env, total_allocated + quantity);
        let allocation = storage::get_allocation(&env, &to);
        storage::set_allocation(&env, &to, allocation + quantity);

        AllocatedEventData { to, quantity }.publish(&env);

        Ok(())
    }

    /// Mint `quantity` sequential tokens to `to`, bounded by `to`'s
    /// unminted allocation. Minter-only.
    pub fn mint(env: Env, to: Address, quantity: u32) -> Result<(), Error> {
        Self::require_minter(&env)?;

        let allocation = storage::get_allocation(&env, &to);
        let minted = storage::get_minted(&env, &to);
        if minted + quantity > allocation {
            return Err(Error::AllocationExceeded);
        }

        let mut token_id = storage::get_next_token_id(&env);
        for _ in 0..quantity {
            token_id += 1;
            storage::set_owner(&env, token_id, &to);
        }
        storage::set_next_token_id(&env, token_id);
        storage::set_minted(&env, &to, minted + quantity);
        storage::set_total_minted(&env, storage::get_total_minted(&env) + quantity);

        MintedEventData {
            to,
            quantity,
            last_token_id: token_id,
        }
        .publish(&env);

        Ok(())
    }

    pub fn remaining_supply(env: Env) -> u32 {
        storage::get_max_supply(&env) - storage::get_total_allocated(&env)
    }

    pub fn total_allocated(env: Env) -> u32 {
        storage::get_total_allocated(&env)
    }

    pub fn total_minted(env: Env) -> u32 {
        storage::get_total_minted(&env)
    }

    pub fn allocation_of(env: Env, account: Address) -> u32 {
        storage::get_allocation(&env, &account)
    }

    pub fn minted_of(env: Env, account: Address) -> u32 {
        storage::get_minted(&env, &account)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Option<Address> {
        storage::get_owner(&env, token_id)
    }

    fn require_minter(env: &Env) -> Result<(), Error> {
        let minter = storage::get_minter(env).ok_or(Error::Unauthorized)?;
        minter.require_auth();
        Ok(())
    }
}
