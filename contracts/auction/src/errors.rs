use soroban_sdk::contracterror;

/// Error codes for the Dutch auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the contract admin
    Unauthorized = 3,
    /// Auction schedule has not been set
    ConfigNotSet = 4,
    /// Auction schedule has already been set and is immutable
    ConfigAlreadySet = 5,
    /// Start time is zero, start time is not before end time, or the
    /// current time is outside the bidding window
    InvalidStartEndTime = 6,
    /// Start price, end price or spend limit is out of range
    InvalidAmountInWei = 7,
    /// Bid authorization deadline has passed
    BidExpired = 8,
    /// Signature does not recover to the trusted signer for the
    /// participant's current nonce
    InvalidSignature = 9,
    /// Value sent does not cover the current price for the quantity
    NotEnoughValue = 10,
    /// Cumulative paid amount would exceed the per-bidder spend limit
    PurchaseLimitReached = 11,
    /// No purchased tokens are claimable yet
    NothingToClaim = 12,
    /// Refund window has not opened yet
    ClaimRefundNotReady = 13,
    /// Refund was already claimed by this participant
    UserAlreadyClaimed = 14,
    /// Bidding is paused
    Paused = 15,
    /// Collection rejected the allocation (supply cap reached)
    CapacityExceeded = 16,
    /// Proceeds are locked until the refund window opens
    WithdrawNotReady = 17,
}
