use soroban_sdk::{contracttype, Address};

#[contracttype]
pub enum DataKey {
    Admin,
    Minter,
    MaxSupply,
    TotalAllocated,
    TotalMinted,
    NextTokenId,
    Allocation(Address),
    Minted(Address),
    Owner(u32),
}
