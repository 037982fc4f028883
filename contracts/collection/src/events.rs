use soroban_sdk::{contractevent, Address};

/// Event emitted when supply is reserved for an account
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocatedEventData {
    #[topic]
    pub to: Address,
    pub quantity: u32,
}

/// Event emitted when allocated tokens are minted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEventData {
    #[topic]
    pub to: Address,
    pub quantity: u32,
    pub last_token_id: u32,
}
