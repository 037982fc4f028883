#![no_std]

//! Dutch auction selling a fixed-supply collection at a linearly
//! descending price, gated by signed bid authorizations.
//!
//! Participants bid with an off-chain signature from the trusted signer;
//! the contract escrows the full value sent, allocates supply on the
//! collection, and tracks a per-participant ledger. After the auction ends
//! and the refund delay passes, everyone who paid above the clearing price
//! (the end price) can claim the difference back, and the admin can
//! withdraw the remaining proceeds to the treasury. Checks precede every
//! mutation; a failed token or collection call traps and the ledger change
//! is rolled back atomically by the Soroban runtime.

mod admin;
mod auth;
mod errors;
mod events;
mod issuance;
mod price;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env};

pub use errors::Error;
pub use issuance::{CollectionClient, ItemCollection};
pub use types::{AuctionConfig, UserLedger};

use events::{
    AuctionPausedEventData, BidPlacedEventData, ConfigSetEventData, FundsWithdrawnEventData,
    RefundClaimedEventData, TokensClaimedEventData,
};

#[contract]
pub struct DutchAuctionContract;

#[contractimpl]
impl DutchAuctionContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        collection: Address,
        signer: BytesN<65>,
        treasury: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_collection(&env, &collection);
        storage::set_signer(&env, &signer);
        storage::set_treasury(&env, &treasury);
        storage::set_payment_token(&env, &payment_token);
        Ok(())
    }

    /// Set the auction schedule. Admin-only, and only once — the schedule
    /// is immutable after the first successful call.
    pub fn set_config(
        env: Env,
        caller: Address,
        start_price: i128,
        end_price: i128,
        spend_limit: i128,
        refund_delay: u64,
        start_time: u64,
        end_time: u64,
        vesting_duration: u64,
    ) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;

        if storage::has_config(&env) {
            return Err(Error::ConfigAlreadySet);
        }
        if start_time == 0 || start_time >= end_time {
            return Err(Error::InvalidStartEndTime);
        }
        if start_price <= 0 || spend_limit <= 0 || end_price < 0 || end_price > start_price {
            return Err(Error::InvalidAmountInWei);
        }

        let config = AuctionConfig {
            start_price,
            end_price,
            spend_limit,
            refund_delay,
            start_time,
            end_time,
            vesting_duration,
        };
        storage::set_config(&env, &config);

        ConfigSetEventData {
            admin: caller,
            start_price,
            end_price,
            start_time,
            end_time,
        }
        .publish(&env);

        Ok(())
    }

    /// Place a bid for `quantity` tokens, paying `value_sent` of the
    /// payment token. Requires a single-use authorization signed by the
    /// trusted signer over the participant's current nonce.
    ///
    /// The full `value_sent` is escrowed (not just the instantaneous
    /// cost); the excess over the clearing price comes back through
    /// [`claim_refund`](Self::claim_refund).
    pub fn bid(
        env: Env,
        account: Address,
        quantity: u32,
        deadline: u64,
        signature: BytesN<64>,
        recovery_id: u32,
        value_sent: i128,
    ) -> Result<(), Error> {
        account.require_auth();

        if storage::is_paused(&env) {
            return Err(Error::Paused);
        }
        let config = storage::get_config(&env).ok_or(Error::ConfigNotSet)?;

        let now = env.ledger().timestamp();
        if now < config.start_time || now >= config.end_time {
            return Err(Error::InvalidStartEndTime);
        }
        if now > deadline {
            return Err(Error::BidExpired);
        }

        let mut ledger = storage::get_user(&env, &account);
        let signer = storage::get_signer(&env).ok_or(Error::NotInitialized)?;
        auth::verify_bid(
            &env,
            &signer,
            &account,
            quantity,
            ledger.nonce,
            deadline,
            &signature,
            recovery_id,
        )?;

        let unit_price = price::current_price(&config, now);
        let cost = unit_price * quantity as i128;
        if value_sent < cost {
            return Err(Error::NotEnoughValue);
        }
        if ledger.total_paid + value_sent > config.spend_limit {
            return Err(Error::PurchaseLimitReached);
        }

        let collection = storage::get_collection(&env).ok_or(Error::NotInitialized)?;
        if CollectionClient::new(&env, &collection)
            .try_allocate(&account, &quantity)
            .is_err()
        {
            return Err(Error::CapacityExceeded);
        }

        let payment_token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
        token::TokenClient::new(&env, &payment_token).transfer(
            &account,
            &env.current_contract_address(),
            &value_sent,
        );

        ledger.nonce += 1;
        ledger.total_paid += value_sent;
        ledger.qty_purchased += quantity;
        storage::set_user(&env, &account, &ledger);

        BidPlacedEventData {
            account,
            quantity,
            value_sent,
            unit_price,
        }
        .publish(&env);

        Ok(())
    }

    /// Mint up to `quantity` of the caller's vested, unclaimed tokens.
    /// Returns the minted amount, which may be less than requested.
    /// Remains available while bidding is paused.
    pub fn claim_tokens(env: Env, account: Address, quantity: u32) -> Result<u32, Error> {
        account.require_auth();

        let config = storage::get_config(&env).ok_or(Error::ConfigNotSet)?;
        let mut ledger = storage::get_user(&env, &account);

        let now = env.ledger().timestamp();
        let vested = price::vested_quantity(&config, ledger.qty_purchased, now);
        let claimable = vested - ledger.qty_claimed;
        if claimable == 0 {
            return Err(Error::NothingToClaim);
        }

        let to_mint = quantity.min(claimable);
        let collection = storage::get_collection(&env).ok_or(Error::NotInitialized)?;
        if CollectionClient::new(&env, &collection)
            .try_mint(&account, &to_mint)
            .is_err()
        {
            return Err(Error::CapacityExceeded);
        }

        ledger.qty_claimed += to_mint;
        storage::set_user(&env, &account, &ledger);

        TokensClaimedEventData {
            account,
            quantity: to_mint,
        }
        .publish(&env);

        Ok(to_mint)
    }

    /// Refund the difference between what the caller paid and the clearing
    /// price for their purchased quantity. Opens `refund_delay` seconds
    /// after the auction ends; one refund per participant. A zero (or
    /// negative) difference still marks the refund as claimed without
    /// transferring anything. Remains available while bidding is paused.
    pub fn claim_refund(env: Env, account: Address) -> Result<(), Error> {
        account.require_auth();

        let config = storage::get_config(&env).ok_or(Error::ConfigNotSet)?;
        let now = env.ledger().timestamp();
        if now < config.end_time + config.refund_delay {
            return Err(Error::ClaimRefundNotReady);
        }

        let mut ledger = storage::get_user(&env, &account);
        if ledger.refund_claimed {
            return Err(Error::UserAlreadyClaimed);
        }

        let final_price = price::current_price(&config, config.end_time);
        let owed = ledger.total_paid - ledger.qty_purchased as i128 * final_price;

        ledger.refund_claimed = true;
        storage::set_user(&env, &account, &ledger);

        if owed > 0 {
            let payment_token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
            token::TokenClient::new(&env, &payment_token).transfer(
                &env.current_contract_address(),
                &account,
                &owed,
            );
        }

        RefundClaimedEventData {
            account,
            amount: owed.max(0),
        }
        .publish(&env);

        Ok(())
    }

    /// Transfer the contract's current payment-token balance to the
    /// treasury. Admin-only; locked until the refund window opens so
    /// refunds cannot be drained; repeatable after that.
    pub fn withdraw_funds(env: Env, caller: Address) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;

        let config = storage::get_config(&env).ok_or(Error::ConfigNotSet)?;
        let now = env.ledger().timestamp();
        if now < config.end_time + config.refund_delay {
            return Err(Error::WithdrawNotReady);
        }

        let payment_token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
        let treasury = storage::get_treasury(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::TokenClient::new(&env, &payment_token);
        let balance = token_client.balance(&env.current_contract_address());
        if balance > 0 {
            token_client.transfer(&env.current_contract_address(), &treasury, &balance);
        }

        FundsWithdrawnEventData {
            treasury,
            amount: balance,
        }
        .publish(&env);

        Ok(())
    }

    /// Circuit breaker: while paused, only `bid` is blocked — claims and
    /// refunds stay available so users are never locked out of tokens or
    /// funds already owed.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        storage::set_paused(&env, true);
        AuctionPausedEventData {
            admin: caller,
            is_paused: true,
        }
        .publish(&env);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        storage::set_paused(&env, false);
        AuctionPausedEventData {
            admin: caller,
            is_paused: false,
        }
        .publish(&env);
        Ok(())
    }

    pub fn set_signer(env: Env, caller: Address, signer: BytesN<65>) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        storage::set_signer(&env, &signer);
        Ok(())
    }

    pub fn set_collection(env: Env, caller: Address, collection: Address) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        storage::set_collection(&env, &collection);
        Ok(())
    }

    pub fn set_treasury(env: Env, caller: Address, treasury: Address) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        storage::set_treasury(&env, &treasury);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<AuctionConfig, Error> {
        storage::get_config(&env).ok_or(Error::ConfigNotSet)
    }

    /// Current unit price: `start_price` before the window, the linear
    /// decay inside it, `end_price` (the clearing price) after it.
    pub fn current_price(env: Env) -> Result<i128, Error> {
        let config = storage::get_config(&env).ok_or(Error::ConfigNotSet)?;
        Ok(price::current_price(&config, env.ledger().timestamp()))
    }

    pub fn get_nonce(env: Env, account: Address) -> u64 {
        storage::get_user(&env, &account).nonce
    }

    pub fn get_ledger(env: Env, account: Address) -> UserLedger {
        storage::get_user(&env, &account)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Digest the trusted signer must sign to authorize a bid. Exposed so
    /// off-chain signers (and tests) construct exactly what `bid` verifies.
    pub fn bid_digest(
        env: Env,
        account: Address,
        quantity: u32,
        nonce: u64,
        deadline: u64,
    ) -> BytesN<32> {
        auth::bid_digest(&env, &account, quantity, nonce, deadline).to_bytes()
    }
}

#[cfg(test)]
mod test;
