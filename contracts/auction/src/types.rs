use soroban_sdk::{contracttype, Address};

/// Auction schedule, set once by the admin and immutable afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub start_price: i128,
    pub end_price: i128,
    /// Per-bidder cap on cumulative value sent across all bids.
    pub spend_limit: i128,
    /// Seconds after `end_time` before refunds (and withdrawal) open.
    pub refund_delay: u64,
    pub start_time: u64,
    pub end_time: u64,
    /// Seconds from `start_time` over which purchased tokens become
    /// claimable. Zero means claimable immediately.
    pub vesting_duration: u64,
}

/// Per-participant accounting entry, created lazily on first access and
/// never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserLedger {
    pub total_paid: i128,
    pub qty_purchased: u32,
    pub qty_claimed: u32,
    pub refund_claimed: bool,
    pub nonce: u64,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Signer,
    Collection,
    Treasury,
    PaymentToken,
    Paused,
    Config,
    User(Address),
}
