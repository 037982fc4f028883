use soroban_sdk::{contractevent, Address};

/// Event emitted when the auction schedule is set
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigSetEventData {
    #[topic]
    pub admin: Address,
    pub start_price: i128,
    pub end_price: i128,
    pub start_time: u64,
    pub end_time: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub account: Address,
    pub quantity: u32,
    pub value_sent: i128,
    pub unit_price: i128,
}

/// Event emitted when purchased tokens are claimed; `quantity` is the
/// minted amount, which may be less than requested
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimedEventData {
    #[topic]
    pub account: Address,
    pub quantity: u32,
}

/// Event emitted when a refund is claimed (amount may be zero)
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundClaimedEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
}

/// Event emitted when proceeds are withdrawn to the treasury
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEventData {
    #[topic]
    pub treasury: Address,
    pub amount: i128,
}

/// Event emitted when bidding is paused or unpaused
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionPausedEventData {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
}
